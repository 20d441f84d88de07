use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Result, UserId, UserStoreError};

/// A registered user as returned by a [`crate::UserRepository`].
///
/// `joined_at` is left out of the JSON form when the backing store doesn't
/// track it, so callers serialize exactly what the repository handed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a user without a join timestamp.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            joined_at: None,
        }
    }

    /// Sets the join timestamp.
    pub fn joined_at(mut self, joined_at: DateTime<Utc>) -> Self {
        self.joined_at = Some(joined_at);
        self
    }
}

/// A user about to be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
}

impl NewUser {
    /// Validates and wraps a user name. Surrounding whitespace is trimmed;
    /// a blank name is rejected.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(UserStoreError::InvalidName(name));
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_without_join_time_serializes_id_and_name_only() {
        let user = User::new(1, "Ann");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Ann"}"#);
    }

    #[test]
    fn user_with_join_time_includes_it() {
        let joined = "2024-05-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let user = User::new(7, "Bo").joined_at(joined);
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["joined_at"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn new_user_trims_name() {
        let new_user = NewUser::new("  Ann ").unwrap();
        assert_eq!(new_user.name(), "Ann");
    }

    #[test]
    fn new_user_rejects_blank_name() {
        let err = NewUser::new("   ").unwrap_err();
        assert!(matches!(err, UserStoreError::InvalidName(_)));
    }
}
