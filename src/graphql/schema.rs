use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::storage::PostStore;

use super::types::*;

pub type PostSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: PostStore) -> PostSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a PostStore> {
    ctx.data::<PostStore>()
}

pub struct QueryRoot;

#[Object(name = "query")]
impl QueryRoot {
    /// Get single post
    async fn post(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
    ) -> async_graphql::Result<Option<Post>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = get_store(ctx)?;
        Ok(store.get(&id).await.map(Into::into))
    }

    /// Last post added
    ///
    /// Reorders the stored posts newest first as a side effect.
    async fn last_post(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Post>> {
        let store = get_store(ctx)?;
        Ok(store.latest().await.map(Into::into))
    }

    /// List of posts
    async fn post_list(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let store = get_store(ctx)?;
        Ok(store.list().await.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object(name = "mutation")]
impl MutationRoot {
    /// Create new post
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        post: PostCreateInput,
    ) -> async_graphql::Result<Post> {
        let store = get_store(ctx)?;
        let created = store.create(post.title, post.description).await;
        Ok(created.into())
    }

    /// Update existing post
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        post: PostUpdateInput,
    ) -> async_graphql::Result<Option<Post>> {
        let store = get_store(ctx)?;
        let (id, patch) = post.into_parts();
        Ok(store.update(&id, patch).await.map(Into::into))
    }
}
