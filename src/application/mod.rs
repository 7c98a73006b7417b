//! Application layer - Client facade over the Tinybeans API

pub mod client;
pub mod entries;
pub mod export;

pub use client::{Followings, Session, TinybeansClient};
pub use entries::{EntriesPage, FETCH_SIZE};
