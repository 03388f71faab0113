//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod file;
pub mod qiita;

pub use file::FileFeedStore;
pub use qiita::QiitaClientImpl;
