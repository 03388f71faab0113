//! Feed entries and channel metadata

use chrono::{DateTime, FixedOffset, Utc};

/// A feed entry derived from one item
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub id: String,
    pub link: String,
    /// `"<title> by @<user>"`
    pub title: String,
    pub published: DateTime<FixedOffset>,
    pub updated: DateTime<FixedOffset>,
    pub author: Option<EntryAuthor>,
    /// Avatar markup, declared as `html` content
    pub html_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryAuthor {
    pub name: String,
    pub uri: Option<String>,
}

/// Feed-level values, fixed for one run
#[derive(Debug, Clone)]
pub struct ChannelMetadata {
    /// Feed id
    pub about: String,
    /// URL of the published feed file, emitted as the `self` link
    pub self_link: Option<String>,
    pub title: String,
    /// `alternate` link to the team site
    pub link: String,
    pub author: String,
    pub generated_at: DateTime<Utc>,
}
