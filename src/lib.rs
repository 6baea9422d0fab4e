//! # postql - A small in-memory GraphQL API for posts
//!
//! postql keeps a list of posts in process memory and exposes it through a
//! GraphQL endpoint. Nothing is persisted: every process starts from the same
//! three demo posts.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on $PORT (default 8080)
//! postql serve
//!
//! # Ask for the newest post without starting a server
//! postql query '{ lastPost { id title createdAt } }'
//!
//! # Print the schema
//! postql schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Server address configuration and `.env` loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP gateway
//! - [`model`]: The `Post` data model
//! - [`storage`]: The shared in-memory post store

/// Command-line interface definitions using clap.
pub mod cli;

/// Server configuration.
///
/// Resolves the listening address from CLI flags, the environment and `.env`.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PostsError`, `GatewayError` and the `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum router serving it.
pub mod graphql;

pub mod logging;

/// Data models for posts.
pub mod model;

/// In-memory storage layer.
pub mod storage;
