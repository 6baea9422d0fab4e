mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::graphql::{PostSchema, build_schema};
use crate::storage::PostStore;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub store: PostStore,
}

impl CommandContext {
    /// Context over a store seeded with the demo posts.
    pub fn new() -> Self {
        Self {
            store: PostStore::with_fixtures(),
        }
    }

    pub fn schema(&self) -> PostSchema {
        build_schema(self.store.clone())
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}
