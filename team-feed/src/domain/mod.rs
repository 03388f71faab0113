//! Domain layer
//!
//! Contains pure data types with no I/O.
//! - `entities`: Items received from Qiita and the feed records derived from them
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
