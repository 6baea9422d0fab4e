use crate::model::{Post, PostPatch};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

const FIXTURES: [(&str, &str); 3] = [
    (
        "Post 1 title",
        "Lorem, ipsum dolor sit amet consectetur adipisicing elit. Quaerat ea odit eaque amet dicta consequuntur eum dolore commodi error exercitationem, dolorum corporis accusamus esse assumenda obcaecati qui nam illo dolores.",
    ),
    (
        "Post 2 title",
        "Dolore nesciunt aspernatur debitis porro ullam impedit, doloremque deleniti delectus perferendis tempora earum velit dignissimos quam minus voluptate beatae nulla. Natus, molestiae officia fugiat dolor asperiores ex vel. Incidunt, perspiciatis!",
    ),
    (
        "Post 3 title",
        "Minima facere optio cupiditate quisquam, asperiores, voluptatem alias, ducimus quos eum magnam possimus suscipit accusamus. Vero, est nemo! Obcaecati cumque ipsa deleniti laboriosam quaerat doloremque dolores. Maxime deserunt dolores quidem!",
    ),
];

/// Shared, ordered, in-memory collection of posts.
///
/// Cloning the store clones the handle, not the posts. Every operation holds
/// the lock for its whole duration, so callers never observe a half-applied
/// write.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Store seeded with the three demo posts.
    ///
    /// Each fixture is stamped one nanosecond after the previous one, so the
    /// last fixture is the newest.
    pub fn with_fixtures() -> Self {
        let now = Utc::now();
        let mut posts: Vec<Post> = Vec::with_capacity(FIXTURES.len());
        for (offset, (title, description)) in (0i64..).zip(FIXTURES) {
            let id = generate_id(&posts);
            posts.push(Post::new_at(
                id,
                title.to_string(),
                description.to_string(),
                now + Duration::nanoseconds(offset),
            ));
        }
        Self::new(posts)
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    /// First post with the given id.
    pub async fn get(&self, id: &str) -> Option<Post> {
        self.posts.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// All posts in current store order.
    pub async fn list(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    /// Most recently created post.
    ///
    /// Sorts the store itself by `created_at` descending, so later `list`
    /// calls see the new order. The sort is stable: posts created at the same
    /// instant keep their relative order.
    pub async fn latest(&self) -> Option<Post> {
        let mut posts = self.posts.write().await;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts.first().cloned()
    }

    pub async fn create(&self, title: String, description: String) -> Post {
        let mut posts = self.posts.write().await;
        let post = Post::new(generate_id(&posts), title, description);
        tracing::info!(id = %post.id, title = %post.title, "Creating post");
        posts.push(post.clone());
        post
    }

    /// Apply `patch` to the first post with the given id.
    ///
    /// Returns `None` and leaves the store untouched when nothing matches.
    pub async fn update(&self, id: &str, patch: PostPatch) -> Option<Post> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(id = %id, "No post to update");
            return None;
        };
        tracing::info!(id = %post.id, title = %post.title, "Updating post");
        post.apply(patch);
        Some(post.clone())
    }
}

fn generate_id(existing: &[Post]) -> String {
    loop {
        let id = nanoid::nanoid!();
        if !existing.iter().any(|p| p.id == id) {
            return id;
        }
    }
}
