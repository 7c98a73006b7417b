//! Journal aggregate root

use crate::domain::child::Child;
use crate::domain::fields::Fields;
use crate::error::Result;
use serde_json::Value;
use std::fmt;

/// Non-owning reference to a journal, used to address journal endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JournalRef {
    pub id: i64,
}

impl fmt::Display for JournalRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A family journal and the children it records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    pub id: i64,
    pub title: String,
    pub children: Vec<Child>,
}

impl Journal {
    /// Build a journal from a decoded `journal` object.
    /// Children keep the order the service sent them in.
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::new("Journal", value)?;
        let id = fields.i64("id")?;
        let title = fields.str("title")?;
        let journal = JournalRef { id };

        let children = fields
            .array("children")?
            .iter()
            .map(|child| Child::from_json(journal, child))
            .collect::<Result<Vec<_>>>()?;

        Ok(Journal {
            id,
            title,
            children,
        })
    }

    pub fn reference(&self) -> JournalRef {
        JournalRef { id: self.id }
    }
}
