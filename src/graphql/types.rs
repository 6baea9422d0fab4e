use crate::model::{Post as ModelPost, PostPatch};
use async_graphql::{InputObject, SimpleObject};

#[derive(SimpleObject, Clone, Debug)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ModelPost> for Post {
    fn from(p: ModelPost) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

#[derive(InputObject)]
pub struct PostCreateInput {
    pub title: String,
    pub description: String,
}

#[derive(InputObject)]
pub struct PostUpdateInput {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PostUpdateInput {
    /// Split into the target id and the fields to overwrite.
    pub fn into_parts(self) -> (String, PostPatch) {
        let patch = PostPatch {
            title: self.title,
            description: self.description,
        };
        (self.id, patch)
    }
}
