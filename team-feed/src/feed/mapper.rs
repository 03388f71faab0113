//! Item to entry mapping
//!
//! Pure functions: no I/O, one `FeedEntry` per `ItemRecord`.

use chrono::{DateTime, FixedOffset};

use crate::domain::entities::{EntryAuthor, FeedEntry, ItemRecord};
use crate::error::FeedError;

/// Maps Qiita items to feed entries
#[derive(Debug, Clone)]
pub struct EntryMapper {
    branding: bool,
    site_url: String,
}

impl EntryMapper {
    /// `site_url` is the team site, used for author profile links.
    pub fn new(branding: bool, site_url: impl Into<String>) -> Self {
        Self {
            branding,
            site_url: site_url.into(),
        }
    }

    pub fn map(&self, item: &ItemRecord) -> Result<FeedEntry, FeedError> {
        let published = parse_timestamp("created_at", &item.created_at)?;
        let updated = match &item.updated_at {
            Some(value) => parse_timestamp("updated_at", value)?,
            None => published,
        };

        let (author, html_content) = if self.branding {
            let author = EntryAuthor {
                name: item.user.id.clone(),
                uri: Some(format!(
                    "{}/{}/items",
                    self.site_url.trim_end_matches('/'),
                    item.user.id
                )),
            };
            let image_url = item.user.profile_image_url.as_deref().unwrap_or_default();
            (Some(author), Some(avatar_html(&item.user.id, image_url)))
        } else {
            (None, None)
        };

        Ok(FeedEntry {
            id: item.id.clone().unwrap_or_else(|| item.url.clone()),
            link: item.url.clone(),
            title: entry_title(item),
            published,
            updated,
            author,
            html_content,
        })
    }

    /// Map every item, stopping at the first failure.
    pub fn map_all(&self, items: &[ItemRecord]) -> Result<Vec<FeedEntry>, FeedError> {
        items.iter().map(|item| self.map(item)).collect()
    }
}

/// `"<title> by @<user>"`
pub fn entry_title(item: &ItemRecord) -> String {
    format!("{} by @{}", item.title, item.user.id)
}

/// Avatar linking to the user's item list
pub fn avatar_html(user_id: &str, image_url: &str) -> String {
    let user_id = escape_attr(user_id);
    format!(
        "<a href=\"/{user_id}/items\" rel=\"noreferrer\">\n\
         <img alt=\"@{user_id}\" width=\"32\" height=\"32\" src=\"{}\">\n\
         </a>\n",
        escape_attr(image_url)
    )
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<FixedOffset>, FeedError> {
    DateTime::parse_from_rfc3339(value).map_err(|source| FeedError::InvalidTimestamp {
        field,
        value: value.to_string(),
        source,
    })
}
