//! Ordered permission tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SampleError;

/// Access a user holds on a single sample.
///
/// Variants are ordered; comparing two levels answers "does the granted level
/// cover the required one".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum AccessLevel {
    #[default]
    None = 1,
    Read = 2,
    Write = 3,
    Admin = 4,
    Owner = 5,
}

impl AccessLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Read => "read",
            Self::Write => "write",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }

    /// Check if this level grants at least the privileges of `required`.
    pub fn includes(self, required: Self) -> bool {
        self >= required
    }
}

impl FromStr for AccessLevel {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            "admin" => Ok(Self::Admin),
            "owner" => Ok(Self::Owner),
            _ => Err(SampleError::illegal(format!("invalid access level: {s}"))),
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service-wide administration rights, independent of any sample ACL.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum AdminPermission {
    #[default]
    None = 1,
    Read = 2,
    Full = 3,
}

impl AdminPermission {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Read => "read",
            Self::Full => "full",
        }
    }

    pub fn includes(self, required: Self) -> bool {
        self >= required
    }
}

impl FromStr for AdminPermission {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "read" => Ok(Self::Read),
            "full" => Ok(Self::Full),
            _ => Err(SampleError::illegal(format!(
                "invalid admin permission: {s}"
            ))),
        }
    }
}

impl fmt::Display for AdminPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
