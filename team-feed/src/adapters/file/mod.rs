//! Filesystem adapter

pub mod feed_store;

pub use feed_store::FileFeedStore;
