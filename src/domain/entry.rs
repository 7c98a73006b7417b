//! Journal entries with their reactions and comments

use crate::domain::fields::Fields;
use crate::domain::user::User;
use crate::error::Result;
use serde_json::Value;

/// Attachment type that turns an entry into a video entry
pub const VIDEO: &str = "VIDEO";

/// What an entry holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Video attachment with its mp4 URL
    Video { url: String },
    /// Any other entry type as reported by the service (PHOTO, TEXT, ...)
    Other(String),
}

impl EntryKind {
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::Video { .. } => VIDEO,
            EntryKind::Other(kind) => kind.as_str(),
        }
    }

    pub fn video_url(&self) -> Option<&str> {
        match self {
            EntryKind::Video { url } => Some(url.as_str()),
            EntryKind::Other(_) => None,
        }
    }
}

/// One post in a journal
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i64,
    pub uuid: String,
    pub kind: EntryKind,
    /// Epoch milliseconds, when the service sends it
    pub timestamp: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub caption: Option<String>,
    /// Image renditions keyed by size, kept as the service sent them
    pub blobs: Value,
    pub emotions: Vec<Emotion>,
    pub comments: Vec<Comment>,
}

impl Entry {
    /// Build an entry from a decoded object.
    ///
    /// Coordinates are only kept when both `latitude` and `longitude` are
    /// present. Missing `emotions`/`comments` decode to empty lists.
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::new("Entry", value)?;

        let is_video = fields
            .get("attachmentType")
            .and_then(Value::as_str)
            .is_some_and(|kind| kind == VIDEO);
        let kind = if is_video {
            EntryKind::Video {
                url: fields.str("attachmentUrl_mp4")?,
            }
        } else {
            EntryKind::Other(fields.str("type")?)
        };

        let coordinates = (fields.opt_f64("latitude")?, fields.opt_f64("longitude")?);
        let (latitude, longitude) = match coordinates {
            (Some(lat), Some(long)) => (Some(lat), Some(long)),
            _ => (None, None),
        };

        let emotions = fields
            .opt_array("emotions")?
            .iter()
            .map(Emotion::from_json)
            .collect::<Result<Vec<_>>>()?;
        let comments = fields
            .opt_array("comments")?
            .iter()
            .map(Comment::from_json)
            .collect::<Result<Vec<_>>>()?;

        Ok(Entry {
            id: fields.i64("id")?,
            uuid: fields.str("uuid")?,
            kind,
            // Soft field: a non-integer value decodes to None
            timestamp: fields.get("timestamp").and_then(Value::as_i64),
            latitude,
            longitude,
            caption: fields.nullable_str("caption")?,
            blobs: fields.value("blobs")?.clone(),
            emotions,
            comments,
        })
    }

    pub fn is_video(&self) -> bool {
        matches!(self.kind, EntryKind::Video { .. })
    }

    /// URL of one blob rendition (e.g. "o" for the original)
    pub fn blob_url(&self, size: &str) -> Option<&str> {
        self.blobs.get(size).and_then(Value::as_str)
    }
}

/// A comment left on an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub user: User,
}

impl Comment {
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::new("Comment", value)?;

        Ok(Comment {
            id: fields.i64("id")?,
            text: fields.str("details")?,
            user: User::from_json(fields.value("user")?)?,
        })
    }
}

/// A reaction on an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emotion {
    pub id: i64,
    pub entry_id: i64,
    pub user_id: i64,
    /// Reaction label, e.g. "Love"
    pub kind: String,
}

impl Emotion {
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::new("Emotion", value)?;

        Ok(Emotion {
            id: fields.i64("id")?,
            entry_id: fields.i64("entryId")?,
            user_id: fields.i64("userId")?,
            kind: fields.object("type", "EmotionType")?.str("label")?,
        })
    }
}
