//! Feed persistence port trait

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::FeedError;

#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Overwrite `file_name` with `document`, returning where it was written.
    async fn write_feed(&self, file_name: &str, document: &str) -> Result<PathBuf, FeedError>;
}
