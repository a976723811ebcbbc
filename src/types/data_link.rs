//! Links between sample nodes and workspace data units.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::common::{TimestampInput, epoch_seconds};
use super::sample::SampleNodeAddress;
use super::user::UserId;
use super::workspace::DataUnitId;
use crate::validate::{check_timestamp, require};
use crate::{Result, SampleError};

/// A link from a sample node to a data unit.
///
/// Links are never edited. Expiring a link yields a new `DataLink` carrying the
/// expiry time; the original value stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DataLink {
    id: Uuid,
    duid: DataUnitId,
    sample_node_address: SampleNodeAddress,
    created: DateTime<Utc>,
    created_by: UserId,
    expired: Option<DateTime<Utc>>,
}

impl DataLink {
    /// Build and validate a link in one call.
    ///
    /// `expired` is a plain `Option<TimestampInput>` so that `None` needs no
    /// type annotation; wrap a timestamp with `Some(ts.into())`. Use
    /// [`DataLink::builder`] to set an expiry without the conversion.
    pub fn new(
        id: Uuid,
        duid: DataUnitId,
        sample_node_address: SampleNodeAddress,
        created: impl Into<TimestampInput>,
        created_by: &str,
        expired: Option<TimestampInput>,
    ) -> Result<Self> {
        let mut builder = Self::builder()
            .id(id)
            .duid(duid)
            .sample_node_address(sample_node_address)
            .created(created)
            .created_by(created_by);
        if let Some(expired) = expired {
            builder = builder.expired(expired);
        }
        builder.build()
    }

    #[must_use]
    pub fn builder() -> DataLinkBuilder {
        DataLinkBuilder::default()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn duid(&self) -> &DataUnitId {
        &self.duid
    }

    pub fn sample_node_address(&self) -> &SampleNodeAddress {
        &self.sample_node_address
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    pub fn expired(&self) -> Option<DateTime<Utc>> {
        self.expired
    }

    pub fn is_expired(&self) -> bool {
        self.expired.is_some()
    }

    /// A copy of this link that expired at `at`.
    pub fn expire(&self, at: impl Into<TimestampInput>) -> Result<Self> {
        if self.is_expired() {
            tracing::warn!(target: "sampleservice::link", id = %self.id, "link is already expired");
            return Err(SampleError::illegal("link is already expired"));
        }
        let expired = check_timestamp(at.into(), "expired")?;
        check_expiry(self.created, expired)?;
        Ok(Self {
            expired: Some(expired),
            ..self.clone()
        })
    }
}

impl fmt::Display for DataLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={} duid=[{}] sample_node_address=[{}] created={:?} created_by={} expired=",
            self.id,
            self.duid,
            self.sample_node_address,
            epoch_seconds(&self.created),
            self.created_by,
        )?;
        match &self.expired {
            Some(expired) => write!(f, "{:?}", epoch_seconds(expired)),
            None => f.write_str("None"),
        }
    }
}

fn check_expiry(created: DateTime<Utc>, expired: DateTime<Utc>) -> Result<()> {
    if expired < created {
        tracing::debug!(
            target: "sampleservice::link",
            %created,
            %expired,
            "expiry precedes creation"
        );
        return Err(SampleError::illegal(
            "link cannot expire before it is created",
        ));
    }
    Ok(())
}

/// Collects the parts of a [`DataLink`]; every check runs in [`DataLinkBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct DataLinkBuilder {
    id: Option<Uuid>,
    duid: Option<DataUnitId>,
    sample_node_address: Option<SampleNodeAddress>,
    created: Option<TimestampInput>,
    created_by: Option<String>,
    expired: Option<TimestampInput>,
}

impl DataLinkBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn duid(mut self, duid: DataUnitId) -> Self {
        self.duid = Some(duid);
        self
    }

    pub fn sample_node_address(mut self, sna: SampleNodeAddress) -> Self {
        self.sample_node_address = Some(sna);
        self
    }

    pub fn created(mut self, created: impl Into<TimestampInput>) -> Self {
        self.created = Some(created.into());
        self
    }

    pub fn created_by(mut self, user: impl Into<String>) -> Self {
        self.created_by = Some(user.into());
        self
    }

    pub fn expired(mut self, expired: impl Into<TimestampInput>) -> Self {
        self.expired = Some(expired.into());
        self
    }

    pub fn build(self) -> Result<DataLink> {
        let id = require(self.id, "id")?;
        let duid = require(self.duid, "duid")?;
        let sample_node_address = require(self.sample_node_address, "sample_node_address")?;
        let created = check_timestamp(require(self.created, "created")?, "created")?;
        let created_by = match self.created_by.as_deref() {
            Some(user) => UserId::named(user, "created_by")?,
            None => return Err(SampleError::MissingParameter { name: "created_by" }),
        };
        let expired = self
            .expired
            .map(|ts| check_timestamp(ts, "expired"))
            .transpose()?;
        if let Some(expired) = expired {
            check_expiry(created, expired)?;
        }
        Ok(DataLink {
            id,
            duid,
            sample_node_address,
            created,
            created_by,
            expired,
        })
    }
}
