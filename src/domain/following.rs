//! Followed journals

use crate::domain::fields::Fields;
use crate::domain::journal::Journal;
use crate::error::Result;
use serde_json::Value;

/// Read access granted to the authenticated user on someone's journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Following {
    pub id: i64,
    pub url: String,
    /// Relationship label, e.g. "Mother" or "Grandparent"
    pub relationship: String,
    pub journal: Journal,
}

impl Following {
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::new("Following", value)?;

        Ok(Following {
            id: fields.i64("id")?,
            url: fields.str("URL")?,
            relationship: fields
                .object("relationship", "Relationship")?
                .str("label")?,
            journal: Journal::from_json(fields.value("journal")?)?,
        })
    }
}
