//! User entity
//!
//! Doubles as the SQL row target (`id, name, email` in that order) and the
//! JSON payload shape. No validation lives here: any field that is missing or
//! `null` in a request body reads as its zero value.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Store-generated identifier (`SERIAL` column).
pub type UserId = i32;

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Assigned by the store. Request bodies may omit it; it then reads as `0`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: UserId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
