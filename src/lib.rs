#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(
    test,
    allow(
        clippy::useless_vec,
        clippy::uninlined_format_args,
        clippy::float_cmp
    )
)]
#![allow(clippy::module_name_repetitions)]
//
// Accessors on value objects are self-documenting; public constructors carry
// their error cases in the `SampleError` docs instead.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
//
// Epoch seconds are rendered as f64 for the link string form.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)] // Builder patterns don't need must_use on every method

//! Value objects for sample ACLs and sample-to-data links.
//!
//! Every constructor validates eagerly and returns a [`SampleError`] on
//! failure. Values are immutable; changes produce new values.

/// The sampleservice-core crate version (matches `Cargo.toml`).
pub const SAMPLESERVICE_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

mod access;
pub mod constants;
pub mod error;
pub mod types;
mod validate;

pub use constants::*;
pub use error::{Result, SampleError};
pub use types::{
    AccessLevel, AdminPermission, DataLink, DataLinkBuilder, DataUnitId, OwnerlessAcl,
    SampleAcl, SampleAclDelta, SampleAclDeltaBuilder, SampleAddress, SampleNodeAddress,
    TimestampInput, Upa, UserId,
};
