//! Application layer
//!
//! Orchestrates the fetch, map, render and write pipeline.

pub mod feed_service;

pub use feed_service::{FeedService, FeedSettings, RunOutcome};
