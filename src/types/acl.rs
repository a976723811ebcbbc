//! Sample access control lists and the deltas used to change them.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::common::TimestampInput;
use super::user::UserId;
use crate::validate::check_timestamp;
use crate::{Result, SampleError};

/// Admin, write and read tiers of a sample ACL, without an owner.
///
/// Each tier keeps the first occurrence of every user in the order supplied.
/// No user appears in more than one tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct OwnerlessAcl {
    admin: Vec<UserId>,
    write: Vec<UserId>,
    read: Vec<UserId>,
    public_read: bool,
}

impl OwnerlessAcl {
    pub fn new(
        admin: impl IntoIterator<Item = UserId>,
        write: impl IntoIterator<Item = UserId>,
        read: impl IntoIterator<Item = UserId>,
        public_read: bool,
    ) -> Result<Self> {
        let admin = dedup(admin);
        let write = dedup(write);
        let read = dedup(read);
        check_tier_duplicates(&admin, &write, &read)?;
        Ok(Self {
            admin,
            write,
            read,
            public_read,
        })
    }

    pub fn admin(&self) -> &[UserId] {
        &self.admin
    }

    pub fn write(&self) -> &[UserId] {
        &self.write
    }

    pub fn read(&self) -> &[UserId] {
        &self.read
    }

    pub fn public_read(&self) -> bool {
        self.public_read
    }

    /// True if `user` holds any of the three tiers.
    pub fn contains(&self, user: &UserId) -> bool {
        self.admin.contains(user) || self.write.contains(user) || self.read.contains(user)
    }
}

/// A sample ACL: an owner, the three tiers, and the time of the last change.
///
/// `last_update` doubles as the version stamp a store compares against when it
/// swaps in a new ACL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SampleAcl {
    owner: UserId,
    last_update: DateTime<Utc>,
    #[serde(flatten)]
    tiers: OwnerlessAcl,
}

impl SampleAcl {
    pub fn new(
        owner: UserId,
        last_update: impl Into<TimestampInput>,
        admin: impl IntoIterator<Item = UserId>,
        write: impl IntoIterator<Item = UserId>,
        read: impl IntoIterator<Item = UserId>,
        public_read: bool,
    ) -> Result<Self> {
        let last_update = check_timestamp(last_update.into(), "lastupdate")?;
        let tiers = OwnerlessAcl::new(admin, write, read, public_read)?;
        Self::assemble(owner, last_update, tiers)
    }

    /// Attach an owner and update time to already validated tiers.
    pub fn with_tiers(
        owner: UserId,
        last_update: impl Into<TimestampInput>,
        tiers: OwnerlessAcl,
    ) -> Result<Self> {
        let last_update = check_timestamp(last_update.into(), "lastupdate")?;
        Self::assemble(owner, last_update, tiers)
    }

    fn assemble(owner: UserId, last_update: DateTime<Utc>, tiers: OwnerlessAcl) -> Result<Self> {
        if tiers.contains(&owner) {
            tracing::debug!(
                target: "sampleservice::acl",
                owner = %owner,
                "owner listed in an ACL tier"
            );
            return Err(SampleError::OwnerInAcl);
        }
        Ok(Self {
            owner,
            last_update,
            tiers,
        })
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    pub fn admin(&self) -> &[UserId] {
        self.tiers.admin()
    }

    pub fn write(&self) -> &[UserId] {
        self.tiers.write()
    }

    pub fn read(&self) -> &[UserId] {
        self.tiers.read()
    }

    pub fn public_read(&self) -> bool {
        self.tiers.public_read()
    }

    /// The ACL without its owner and update time.
    pub fn tiers(&self) -> &OwnerlessAcl {
        &self.tiers
    }
}

/// A requested change to a sample ACL.
///
/// Users in `admin`, `write` and `read` are granted that tier, replacing any
/// tier they held before. Users in `remove` lose every tier. `public_read` of
/// `None` leaves the public flag as it is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SampleAclDelta {
    last_update: DateTime<Utc>,
    admin: Vec<UserId>,
    write: Vec<UserId>,
    read: Vec<UserId>,
    remove: Vec<UserId>,
    public_read: Option<bool>,
}

impl SampleAclDelta {
    /// Start a delta stamped with `last_update`.
    pub fn builder(last_update: impl Into<TimestampInput>) -> SampleAclDeltaBuilder {
        SampleAclDeltaBuilder {
            last_update: last_update.into(),
            admin: Vec::new(),
            write: Vec::new(),
            read: Vec::new(),
            remove: Vec::new(),
            public_read: None,
        }
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    pub fn admin(&self) -> &[UserId] {
        &self.admin
    }

    pub fn write(&self) -> &[UserId] {
        &self.write
    }

    pub fn read(&self) -> &[UserId] {
        &self.read
    }

    pub fn remove(&self) -> &[UserId] {
        &self.remove
    }

    pub fn public_read(&self) -> Option<bool> {
        self.public_read
    }

    /// True if applying the delta would change nothing but the update time.
    pub fn is_noop(&self) -> bool {
        self.admin.is_empty()
            && self.write.is_empty()
            && self.read.is_empty()
            && self.remove.is_empty()
            && self.public_read.is_none()
    }

    /// Every user the delta names, in admin, write, read, remove order.
    pub(crate) fn users(&self) -> impl Iterator<Item = &UserId> {
        self.admin
            .iter()
            .chain(&self.write)
            .chain(&self.read)
            .chain(&self.remove)
    }
}

#[derive(Debug, Clone)]
pub struct SampleAclDeltaBuilder {
    last_update: TimestampInput,
    admin: Vec<UserId>,
    write: Vec<UserId>,
    read: Vec<UserId>,
    remove: Vec<UserId>,
    public_read: Option<bool>,
}

impl SampleAclDeltaBuilder {
    pub fn admin(mut self, users: impl IntoIterator<Item = UserId>) -> Self {
        self.admin.extend(users);
        self
    }

    pub fn write(mut self, users: impl IntoIterator<Item = UserId>) -> Self {
        self.write.extend(users);
        self
    }

    pub fn read(mut self, users: impl IntoIterator<Item = UserId>) -> Self {
        self.read.extend(users);
        self
    }

    pub fn remove(mut self, users: impl IntoIterator<Item = UserId>) -> Self {
        self.remove.extend(users);
        self
    }

    pub fn public_read(mut self, public_read: bool) -> Self {
        self.public_read = Some(public_read);
        self
    }

    pub fn build(self) -> Result<SampleAclDelta> {
        let last_update = check_timestamp(self.last_update, "lastupdate")?;
        let admin = dedup(self.admin);
        let write = dedup(self.write);
        let read = dedup(self.read);
        let remove = dedup(self.remove);
        check_tier_duplicates(&admin, &write, &read)?;

        let granted: HashSet<&UserId> = admin.iter().chain(&write).chain(&read).collect();
        if let Some(user) = remove.iter().find(|user| granted.contains(user)) {
            tracing::debug!(
                target: "sampleservice::acl",
                user = %user,
                "user both granted and removed"
            );
            return Err(SampleError::illegal(
                "users in the remove list cannot be in any other ACL",
            ));
        }

        Ok(SampleAclDelta {
            last_update,
            admin,
            write,
            read,
            remove,
            public_read: self.public_read,
        })
    }
}

/// Drop repeated users, keeping the first occurrence of each.
fn dedup(users: impl IntoIterator<Item = UserId>) -> Vec<UserId> {
    let mut seen = HashSet::new();
    users
        .into_iter()
        .filter(|user| seen.insert(user.clone()))
        .collect()
}

fn check_tier_duplicates(admin: &[UserId], write: &[UserId], read: &[UserId]) -> Result<()> {
    let duplicate = admin
        .iter()
        .find(|user| write.contains(user) || read.contains(user))
        .or_else(|| write.iter().find(|user| read.contains(user)));
    match duplicate {
        Some(user) => {
            tracing::debug!(
                target: "sampleservice::acl",
                user = %user,
                "user assigned to two ACL tiers"
            );
            Err(SampleError::DuplicateAssignment {
                user: user.to_string(),
            })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn users(names: &[&str]) -> Vec<UserId> {
        names.iter().map(|n| UserId::new(n).unwrap()).collect()
    }

    fn dt(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        assert_eq!(
            dedup(users(&["b", "a", "b", "c", "a"])),
            users(&["b", "a", "c"])
        );
    }

    #[test]
    fn duplicate_check_reports_admin_conflicts_first() {
        let err = check_tier_duplicates(&users(&["x", "y"]), &users(&["y"]), &users(&["x"]))
            .unwrap_err();
        assert_eq!(
            err,
            SampleError::DuplicateAssignment {
                user: "x".to_string()
            }
        );
        let err = check_tier_duplicates(&users(&["a"]), &users(&["w"]), &users(&["w"]))
            .unwrap_err();
        assert_eq!(
            err,
            SampleError::DuplicateAssignment {
                user: "w".to_string()
            }
        );
    }

    #[test]
    fn sample_acl_serializes_flat() {
        let acl = SampleAcl::new(
            UserId::new("owner").unwrap(),
            dt(0),
            users(&["a"]),
            Vec::new(),
            users(&["r"]),
            true,
        )
        .unwrap();
        let value = serde_json::to_value(&acl).unwrap();
        assert_eq!(value["owner"], "owner");
        assert_eq!(value["admin"][0], "a");
        assert_eq!(value["read"][0], "r");
        assert_eq!(value["public_read"], true);
    }

    #[test]
    fn delta_builder_accumulates_calls() {
        let delta = SampleAclDelta::builder(dt(1))
            .read(users(&["a"]))
            .read(users(&["b", "a"]))
            .build()
            .unwrap();
        assert_eq!(delta.read(), users(&["a", "b"]).as_slice());
        assert!(!delta.is_noop());
        assert!(SampleAclDelta::builder(dt(1)).build().unwrap().is_noop());
    }
}
