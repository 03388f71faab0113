//! Qiita client port trait
//!
//! Defines the interface for fetching items from the Qiita:Team API.

use async_trait::async_trait;

use crate::domain::entities::ItemRecord;
use crate::error::QiitaError;

/// Result of one items request
#[derive(Debug, Clone)]
pub struct ListItemsResponse {
    pub status: u16,
    pub etag: Option<String>,
    /// Empty unless `status` is 200
    pub items: Vec<ItemRecord>,
}

impl ListItemsResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Port for the items endpoint
///
/// Implementations perform exactly one request for the first page and report
/// non-200 statuses through `ListItemsResponse::status` rather than as errors.
#[async_trait]
pub trait ItemsClient: Send + Sync {
    async fn list_items(&self, per_page: Option<u32>) -> Result<ListItemsResponse, QiitaError>;
}
