//! Domain ports (traits)
//!
//! Port traits define interfaces that the application layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed_store;
pub mod qiita;

pub use feed_store::FeedStore;
pub use qiita::{ItemsClient, ListItemsResponse};
