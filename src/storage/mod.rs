//! In-memory storage layer for posts.
//!
//! Posts live only for the lifetime of the process. A [`PostStore`] is a
//! cheap, cloneable handle over one shared ordered list; every clone sees the
//! same posts.
//!
//! ## Components
//!
//! - [`PostStore`]: read, list, create, update and "latest" operations

mod post_store;

pub use post_store::PostStore;
