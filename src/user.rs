//! The signed-in user's identifier and display profile.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A newtype wrapper for user identifiers issued by the identity provider.
///
/// The ID namespaces the user's stored data, so it must never be empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new user ID.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyUserId] if `id` is empty or only whitespace.
    pub fn new(id: &str) -> Result<Self, Error> {
        let id = id.trim();

        if id.is_empty() {
            return Err(Error::EmptyUserId);
        }

        Ok(Self(id.to_owned()))
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The current user as supplied by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Scopes the user's stored transactions.
    pub id: UserId,
    /// The name shown in the dashboard greeting.
    pub name: String,
    /// URL of the user's photo, empty if the provider has none.
    #[serde(default)]
    pub photo: String,
}

#[cfg(test)]
mod tests {
    use crate::{Error, user::UserId};

    use super::UserProfile;

    #[test]
    fn new_user_id_trims_whitespace() {
        let id = UserId::new("  abc123 ").unwrap();

        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn new_user_id_rejects_empty_string() {
        assert_eq!(UserId::new(""), Err(Error::EmptyUserId));
        assert_eq!(UserId::new("   "), Err(Error::EmptyUserId));
    }

    #[test]
    fn deserialize_profile_rejects_empty_id() {
        let result = serde_json::from_str::<UserProfile>(r#"{"id":"","name":"Leonardo"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn deserialize_profile_defaults_photo() {
        let profile =
            serde_json::from_str::<UserProfile>(r#"{"id":"42","name":"Leonardo"}"#).unwrap();

        assert_eq!(profile.id, UserId::new("42").unwrap());
        assert_eq!(profile.photo, "");
    }
}
