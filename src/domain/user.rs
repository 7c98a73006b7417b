//! Authenticated user and comment authors

use crate::domain::fields::Fields;
use crate::error::Result;
use serde_json::Value;

/// A Tinybeans account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

impl User {
    /// Build a user from a decoded `user` object. Every key is required.
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::new("User", value)?;

        Ok(User {
            id: fields.i64("id")?,
            email_address: fields.str("emailAddress")?,
            first_name: fields.str("firstName")?,
            last_name: fields.str("lastName")?,
            username: fields.str("username")?,
        })
    }

    /// Full display name
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
