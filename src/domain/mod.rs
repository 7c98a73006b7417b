//! Domain layer - Value objects decoded from service responses

pub mod child;
pub mod entry;
pub mod fields;
pub mod following;
pub mod journal;
pub mod user;

pub use child::Child;
pub use entry::{Comment, Emotion, Entry, EntryKind};
pub use following::Following;
pub use journal::{Journal, JournalRef};
pub use user::User;
