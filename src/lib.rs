//! tinybeans - Client for the Tinybeans family journal service
//!
//! Logs in, walks the followed journals and their children, pages through
//! journal entries and requests server-side exports over the Tinybeans
//! REST API.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::TinybeansClient;
pub use error::TinybeansError;
