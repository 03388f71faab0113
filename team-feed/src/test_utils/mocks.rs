//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;

use crate::domain::entities::ItemRecord;
use crate::domain::ports::{FeedStore, ItemsClient, ListItemsResponse};
use crate::error::{FeedError, QiitaError};

// ============================================================================
// Mock Items Client
// ============================================================================

pub struct MockItemsClient {
    result: Mutex<Option<Result<ListItemsResponse, QiitaError>>>,
    calls: Mutex<Vec<Option<u32>>>,
}

impl MockItemsClient {
    fn with_result(result: Result<ListItemsResponse, QiitaError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer 200 with `items`
    pub fn ok(items: Vec<ItemRecord>) -> Self {
        Self::with_result(Ok(ListItemsResponse {
            status: 200,
            etag: Some("\"mock-etag\"".to_string()),
            items,
        }))
    }

    /// Answer with `status` and no items
    pub fn status(status: u16) -> Self {
        Self::with_result(Ok(ListItemsResponse {
            status,
            etag: None,
            items: Vec::new(),
        }))
    }

    pub fn failing(error: QiitaError) -> Self {
        Self::with_result(Err(error))
    }

    /// `per_page` of every call made so far
    pub fn calls(&self) -> Vec<Option<u32>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ItemsClient for MockItemsClient {
    async fn list_items(&self, per_page: Option<u32>) -> Result<ListItemsResponse, QiitaError> {
        self.calls.lock().unwrap().push(per_page);
        self.result
            .lock()
            .unwrap()
            .take()
            .expect("MockItemsClient answers a single request")
    }
}

// ============================================================================
// In-Memory Feed Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryFeedStore {
    feeds: RwLock<HashMap<String, String>>,
    fail_writes: bool,
}

impl InMemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write fails with a permission error
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn get(&self, file_name: &str) -> Option<String> {
        self.feeds.read().unwrap().get(file_name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.read().unwrap().is_empty()
    }
}

#[async_trait]
impl FeedStore for InMemoryFeedStore {
    async fn write_feed(&self, file_name: &str, document: &str) -> Result<PathBuf, FeedError> {
        if self.fail_writes {
            return Err(FeedError::Write {
                path: PathBuf::from(file_name),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }

        self.feeds
            .write()
            .unwrap()
            .insert(file_name.to_string(), document.to_string());
        Ok(PathBuf::from(file_name))
    }
}
