//! Child profiles recorded in a journal

use crate::domain::fields::Fields;
use crate::domain::journal::JournalRef;
use crate::error::{Result, TinybeansError};
use chrono::NaiveDate;
use serde_json::Value;
use std::fmt;

/// Wire format of a child's date of birth
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// A child whose entries are kept in a journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    /// The journal this child belongs to
    pub journal: JournalRef,
}

impl Child {
    /// Build a child from a decoded object. A `dob` that is not a real
    /// calendar date fails with `InvalidDate`.
    pub fn from_json(journal: JournalRef, value: &Value) -> Result<Self> {
        let fields = Fields::new("Child", value)?;
        let dob = fields.str("dob")?;
        let date_of_birth = NaiveDate::parse_from_str(&dob, DOB_FORMAT)
            .map_err(|source| TinybeansError::InvalidDate { value: dob, source })?;

        Ok(Child {
            id: fields.i64("id")?,
            first_name: fields.str("firstName")?,
            last_name: fields.str("lastName")?,
            gender: fields.str("gender")?,
            date_of_birth,
            journal,
        })
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.name(), self.date_of_birth)
    }
}
