//! Domain entities

pub mod entry;
pub mod item;

pub use entry::{ChannelMetadata, EntryAuthor, FeedEntry};
pub use item::ItemRecord;
#[cfg(test)]
pub use item::ItemUser;
