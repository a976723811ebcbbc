use thiserror::Error;

/// Errors raised while constructing or transforming sample value objects.
///
/// Every variant is produced eagerly by a constructor; a failed construction
/// never yields a partially built value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SampleError {
    /// A mandatory field was not supplied.
    #[error("{name} is required")]
    RequiredValue { name: &'static str },

    /// A required identity string was empty or whitespace only.
    #[error("missing parameter: {name}")]
    MissingParameter { name: &'static str },

    /// A timestamp carried no timezone information.
    #[error("{name} cannot be a naive datetime")]
    NaiveTimestamp { name: &'static str },

    /// A semantic invariant was violated.
    #[error("illegal parameter: {reason}")]
    IllegalParameter { reason: String },

    /// A user was assigned to more than one ACL tier.
    #[error("illegal parameter: user {user} appears in two ACLs")]
    DuplicateAssignment { user: String },

    /// The owner of an ACL was also listed in one of its tiers.
    #[error("illegal parameter: the owner cannot be in any other ACL")]
    OwnerInAcl,
}

impl SampleError {
    pub(crate) fn illegal(reason: impl Into<String>) -> Self {
        Self::IllegalParameter {
            reason: reason.into(),
        }
    }

    /// True for every error that signals a violated invariant rather than a
    /// missing or malformed input.
    #[must_use]
    pub fn is_illegal_parameter(&self) -> bool {
        matches!(
            self,
            Self::IllegalParameter { .. } | Self::DuplicateAssignment { .. } | Self::OwnerInAcl
        )
    }
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, SampleError>;
