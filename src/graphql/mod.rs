//! GraphQL schema, resolvers and HTTP gateway for posts.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (port from $PORT, default 8080)
//! postql serve
//!
//! # Execute a query from CLI
//! postql query '{ postList { id title } }'
//!
//! # Execute a mutation from CLI
//! postql mutate 'createPost(post: { title: "T", description: "D" }) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `post`, `lastPost`, `postList`
//! - **Mutations**: `createPost`, `updatePost`
//!
//! ## HTTP
//!
//! `POST /graphql` accepts `{"query": ..., "variables": {...}}` and answers
//! with the standard `data`/`errors` envelope. A body that cannot be read or
//! decoded is rejected with a plain-text 400. `GET /graphql` serves GraphiQL.

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, PostSchema, QueryRoot, build_schema};
pub use server::{GraphqlRequestBody, router, run_server};
pub use types::*;
