//! Feed module
//!
//! Item-to-entry mapping and Atom rendering.

pub mod mapper;
pub mod renderer;

pub use mapper::EntryMapper;
pub use renderer::render_feed;
