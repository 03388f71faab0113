//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{TimeZone, Utc};

use crate::app::FeedSettings;
use crate::domain::entities::{ChannelMetadata, ItemRecord, ItemUser};

/// Create a test item created at 2024-01-01T00:00:00Z
pub fn test_item(title: &str, user_id: &str) -> ItemRecord {
    test_item_at(title, user_id, "2024-01-01T00:00:00Z")
}

/// Create a test item with a specific `created_at`
pub fn test_item_at(title: &str, user_id: &str, created_at: &str) -> ItemRecord {
    ItemRecord {
        id: None,
        url: "https://x/1".to_string(),
        title: title.to_string(),
        created_at: created_at.to_string(),
        updated_at: None,
        user: ItemUser {
            id: user_id.to_string(),
            profile_image_url: Some("https://img/a.png".to_string()),
        },
    }
}

pub fn test_channel() -> ChannelMetadata {
    ChannelMetadata {
        about: "https://masutaka.net/s3cr3t.atom".to_string(),
        self_link: Some("https://masutaka.net/s3cr3t.atom".to_string()),
        title: "feedforce Qiita:Team".to_string(),
        link: "https://feedforce.qiita.com/".to_string(),
        author: "feedforce".to_string(),
        generated_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    }
}

pub fn test_settings() -> FeedSettings {
    FeedSettings {
        per_page: None,
        branding: true,
        site_url: "https://feedforce.qiita.com/".to_string(),
        title: "feedforce Qiita:Team".to_string(),
        author: "feedforce".to_string(),
        about: "https://masutaka.net/s3cr3t.atom".to_string(),
        self_url: Some("https://masutaka.net/s3cr3t.atom".to_string()),
        file_name: "s3cr3t.atom".to_string(),
    }
}
