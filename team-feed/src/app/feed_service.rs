//! Feed service
//!
//! One run: fetch the first page of items, stop if the API did not answer 200,
//! otherwise map, render and overwrite the feed file.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::domain::entities::ChannelMetadata;
use crate::domain::ports::{FeedStore, ItemsClient};
use crate::error::AppError;
use crate::feed::{render_feed, EntryMapper};

/// Per-run feed settings, derived from `Config`
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub per_page: Option<u32>,
    pub branding: bool,
    pub site_url: String,
    pub title: String,
    pub author: String,
    pub about: String,
    pub self_url: Option<String>,
    pub file_name: String,
}

impl From<&Config> for FeedSettings {
    fn from(config: &Config) -> Self {
        Self {
            per_page: config.per_page,
            branding: config.branding,
            site_url: config.site_url(),
            title: config.title(),
            author: config.author(),
            about: config.about(),
            self_url: config.self_url(),
            file_name: config.output_file_name(),
        }
    }
}

/// How a run ended, when it did not fail outright
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written { path: PathBuf, entries: usize },
    /// The API answered with something other than 200; nothing was written
    UpstreamRejected { status: u16 },
}

impl RunOutcome {
    /// Process exit status for this outcome
    pub fn exit_status(&self) -> u8 {
        match self {
            RunOutcome::Written { .. } => 0,
            RunOutcome::UpstreamRejected { .. } => 1,
        }
    }
}

/// Service for generating the team feed
pub struct FeedService<IC, FS>
where
    IC: ItemsClient,
    FS: FeedStore,
{
    items: Arc<IC>,
    store: Arc<FS>,
    settings: FeedSettings,
}

impl<IC, FS> FeedService<IC, FS>
where
    IC: ItemsClient,
    FS: FeedStore,
{
    pub fn new(items: Arc<IC>, store: Arc<FS>, settings: FeedSettings) -> Self {
        Self {
            items,
            store,
            settings,
        }
    }

    pub async fn run(&self) -> Result<RunOutcome, AppError> {
        self.run_at(Utc::now()).await
    }

    /// Run with an explicit generation time for the feed's `updated` field
    pub async fn run_at(&self, generated_at: DateTime<Utc>) -> Result<RunOutcome, AppError> {
        tracing::info!(per_page = ?self.settings.per_page, "Fetching items");
        let response = self.items.list_items(self.settings.per_page).await?;

        if !response.is_ok() {
            tracing::warn!(status = response.status, "Items request was not successful");
            return Ok(RunOutcome::UpstreamRejected {
                status: response.status,
            });
        }

        if let Some(etag) = &response.etag {
            tracing::debug!(etag = %etag, "Items response ETag");
        }

        let mapper = EntryMapper::new(self.settings.branding, self.settings.site_url.clone());
        let entries = mapper.map_all(&response.items)?;
        let entry_count = entries.len();

        let document = render_feed(&self.channel(generated_at), entries);
        let path = self
            .store
            .write_feed(&self.settings.file_name, &document)
            .await?;

        tracing::info!(path = %path.display(), entries = entry_count, "Feed written");

        Ok(RunOutcome::Written {
            path,
            entries: entry_count,
        })
    }

    fn channel(&self, generated_at: DateTime<Utc>) -> ChannelMetadata {
        ChannelMetadata {
            about: self.settings.about.clone(),
            self_link: self.settings.self_url.clone(),
            title: self.settings.title.clone(),
            link: self.settings.site_url.clone(),
            author: self.settings.author.clone(),
            generated_at,
        }
    }
}
