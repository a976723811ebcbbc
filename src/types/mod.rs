//! Public value types exposed by the `sampleservice-core` crate.

pub mod access;
pub mod acl;
pub mod common;
pub mod data_link;
pub mod sample;
pub mod user;
pub mod workspace;

pub use access::{AccessLevel, AdminPermission};
pub use acl::{OwnerlessAcl, SampleAcl, SampleAclDelta, SampleAclDeltaBuilder};
pub use common::TimestampInput;
pub use data_link::{DataLink, DataLinkBuilder};
pub use sample::{SampleAddress, SampleNodeAddress};
pub use user::UserId;
pub use workspace::{DataUnitId, Upa};
