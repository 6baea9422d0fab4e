//! Data models for postql.
//!
//! - [`Post`]: The only entity, a titled and described record with timestamps
//! - [`PostPatch`]: Partial update applied by `updatePost`

mod post;

pub use post::{Post, PostPatch};
