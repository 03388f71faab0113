//! Writes rendered feeds into a directory

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::ports::FeedStore;
use crate::error::FeedError;

/// Stores each feed as a file directly under `dir`
pub struct FileFeedStore {
    dir: PathBuf,
}

impl FileFeedStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl FeedStore for FileFeedStore {
    async fn write_feed(&self, file_name: &str, document: &str) -> Result<PathBuf, FeedError> {
        let path = self.dir.join(file_name);

        tokio::fs::write(&path, document)
            .await
            .map_err(|source| FeedError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}
