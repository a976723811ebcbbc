//! Access resolution and delta application for sample ACLs.

use std::collections::HashSet;

use crate::types::{AccessLevel, SampleAcl, SampleAclDelta, UserId};
use crate::{Result, SampleError};

impl SampleAcl {
    /// The access `user` holds on the sample. `None` is an anonymous caller.
    pub fn access_level(&self, user: Option<&UserId>) -> AccessLevel {
        let granted = user.map_or(AccessLevel::None, |user| self.tier_of(user));
        if granted == AccessLevel::None && self.public_read() {
            AccessLevel::Read
        } else {
            granted
        }
    }

    fn tier_of(&self, user: &UserId) -> AccessLevel {
        if self.owner() == user {
            AccessLevel::Owner
        } else if self.admin().contains(user) {
            AccessLevel::Admin
        } else if self.write().contains(user) {
            AccessLevel::Write
        } else if self.read().contains(user) {
            AccessLevel::Read
        } else {
            AccessLevel::None
        }
    }

    /// Apply `delta`, returning the resulting ACL stamped with the delta's update time.
    ///
    /// Users keep their position in a tier they already held. A user granted a
    /// different tier moves to the end of the new one.
    pub fn apply_delta(&self, delta: &SampleAclDelta) -> Result<SampleAcl> {
        if delta.users().any(|user| user == self.owner()) {
            tracing::warn!(
                target: "sampleservice::acl",
                owner = %self.owner(),
                "rejecting ACL delta that names the owner"
            );
            return Err(SampleError::illegal(
                "the owner's access cannot be changed by an ACL delta",
            ));
        }

        let removed: HashSet<&UserId> = delta.remove().iter().collect();
        let admin = merge_tier(
            self.admin(),
            delta.admin(),
            &removed,
            &[delta.write(), delta.read()],
        );
        let write = merge_tier(
            self.write(),
            delta.write(),
            &removed,
            &[delta.admin(), delta.read()],
        );
        let read = merge_tier(
            self.read(),
            delta.read(),
            &removed,
            &[delta.admin(), delta.write()],
        );
        let public_read = delta.public_read().unwrap_or(self.public_read());

        tracing::debug!(
            target: "sampleservice::acl",
            owner = %self.owner(),
            admin = admin.len(),
            write = write.len(),
            read = read.len(),
            public_read,
            "applied ACL delta"
        );
        SampleAcl::new(
            self.owner().clone(),
            delta.last_update(),
            admin,
            write,
            read,
            public_read,
        )
    }
}

/// Existing members minus removed and re-tiered users, followed by new grants.
fn merge_tier(
    current: &[UserId],
    granted: &[UserId],
    removed: &HashSet<&UserId>,
    granted_elsewhere: &[&[UserId]],
) -> Vec<UserId> {
    current
        .iter()
        .filter(|user| !removed.contains(user))
        .filter(|user| !granted_elsewhere.iter().any(|tier| tier.contains(user)))
        .chain(granted)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn users(names: &[&str]) -> Vec<UserId> {
        names.iter().map(|n| UserId::new(n).unwrap()).collect()
    }

    fn user(name: &str) -> UserId {
        UserId::new(name).unwrap()
    }

    fn dt(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn acl(public_read: bool) -> SampleAcl {
        SampleAcl::new(
            user("own"),
            dt(10),
            users(&["a1", "a2"]),
            users(&["w1"]),
            users(&["r1", "r2"]),
            public_read,
        )
        .unwrap()
    }

    #[test]
    fn access_level_by_tier() {
        let acl = acl(false);
        assert_eq!(acl.access_level(Some(&user("own"))), AccessLevel::Owner);
        assert_eq!(acl.access_level(Some(&user("a2"))), AccessLevel::Admin);
        assert_eq!(acl.access_level(Some(&user("w1"))), AccessLevel::Write);
        assert_eq!(acl.access_level(Some(&user("r1"))), AccessLevel::Read);
        assert_eq!(acl.access_level(Some(&user("x"))), AccessLevel::None);
        assert_eq!(acl.access_level(None), AccessLevel::None);
    }

    #[test]
    fn public_read_grants_read_to_everyone() {
        let acl = acl(true);
        assert_eq!(acl.access_level(None), AccessLevel::Read);
        assert_eq!(acl.access_level(Some(&user("x"))), AccessLevel::Read);
        assert_eq!(acl.access_level(Some(&user("w1"))), AccessLevel::Write);
    }

    #[test]
    fn apply_delta_moves_removes_and_adds() {
        let delta = SampleAclDelta::builder(dt(20))
            .admin(users(&["r1", "new_admin"]))
            .write(users(&["a1"]))
            .remove(users(&["r2", "nobody"]))
            .public_read(true)
            .build()
            .unwrap();
        let updated = acl(false).apply_delta(&delta).unwrap();

        let expected = SampleAcl::new(
            user("own"),
            dt(20),
            users(&["a2", "r1", "new_admin"]),
            users(&["w1", "a1"]),
            Vec::new(),
            true,
        )
        .unwrap();
        assert_eq!(updated, expected);
    }

    #[test]
    fn apply_delta_keeps_existing_positions() {
        let delta = SampleAclDelta::builder(dt(20))
            .admin(users(&["a1"]))
            .build()
            .unwrap();
        let original = acl(true);
        let updated = original.apply_delta(&delta).unwrap();
        assert_eq!(updated.admin(), users(&["a1", "a2"]).as_slice());
        assert!(updated.public_read());
        assert_eq!(updated.last_update(), dt(20));
        assert_eq!(original.last_update(), dt(10));
    }

    #[test]
    fn apply_delta_rejects_owner() {
        for delta in [
            SampleAclDelta::builder(dt(20)).read(users(&["own"])),
            SampleAclDelta::builder(dt(20)).remove(users(&["own"])),
        ] {
            let err = acl(false).apply_delta(&delta.build().unwrap()).unwrap_err();
            assert!(err.is_illegal_parameter());
        }
    }

    #[test]
    fn noop_delta_only_restamps() {
        let delta = SampleAclDelta::builder(dt(30)).build().unwrap();
        let updated = acl(true).apply_delta(&delta).unwrap();
        assert_eq!(updated.tiers(), acl(true).tiers());
        assert_eq!(updated.last_update(), dt(30));
    }
}
