//! Validated user names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_USER_ID_LEN;
use crate::validate::check_string;
use crate::{Result, SampleError};

/// A user name: trimmed, non-empty, free of control characters.
///
/// The only way to obtain a `UserId` is through validation, so every ACL tier
/// and every link creator is known to be well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl AsRef<str>) -> Result<Self> {
        Self::named(id.as_ref(), "userid")
    }

    /// Validate `id`, reporting failures against the caller's field name.
    pub(crate) fn named(id: &str, name: &'static str) -> Result<Self> {
        check_string(Some(id), name, Some(MAX_USER_ID_LEN)).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = SampleError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserId {
    type Error = SampleError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl PartialEq<str> for UserId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for UserId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_keeps_unicode() {
        let user = UserId::new("  myuserᚥnameisHank ").expect("valid");
        assert_eq!(user.as_str(), "myuserᚥnameisHank");
        assert_eq!(user.to_string(), "myuserᚥnameisHank");
    }

    #[test]
    fn rejects_blank_and_control_characters() {
        assert_eq!(
            UserId::new(""),
            Err(SampleError::MissingParameter { name: "userid" })
        );
        assert_eq!(
            UserId::new("a\nb"),
            Err(SampleError::illegal("userid contains control characters"))
        );
        assert!(UserId::new("a".repeat(MAX_USER_ID_LEN)).is_ok());
        assert!(UserId::new("a".repeat(MAX_USER_ID_LEN + 1)).is_err());
    }

    #[test]
    fn serde_revalidates() {
        let user: UserId = serde_json::from_str("\"usera\"").expect("deserialize");
        assert_eq!(user, "usera");
        assert_eq!(serde_json::to_string(&user).expect("serialize"), "\"usera\"");
        assert!(serde_json::from_str::<UserId>("\"\"").is_err());
    }
}
