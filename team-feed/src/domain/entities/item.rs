//! Qiita item records
//!
//! Only the fields the feed consumes are modelled; anything else in the
//! response body is ignored.

use serde::Deserialize;

/// One article returned by `GET /api/v2/items`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    pub title: String,
    /// RFC 3339 timestamp, parsed during mapping
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub user: ItemUser,
}

/// Author of an item
#[derive(Debug, Clone, Deserialize)]
pub struct ItemUser {
    /// User handle, rendered as `@id`
    pub id: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}
