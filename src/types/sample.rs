//! Addresses of samples and of nodes within a sample version.

use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;
use uuid::Uuid;

use crate::Result;
use crate::constants::MAX_NODE_NAME_LEN;
use crate::validate::check_string;

/// A specific version of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SampleAddress {
    sampleid: Uuid,
    version: NonZeroU32,
}

impl SampleAddress {
    #[must_use]
    pub fn new(sampleid: Uuid, version: NonZeroU32) -> Self {
        Self { sampleid, version }
    }

    pub fn sampleid(&self) -> Uuid {
        self.sampleid
    }

    pub fn version(&self) -> u32 {
        self.version.get()
    }
}

impl fmt::Display for SampleAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.sampleid, self.version)
    }
}

/// A named node of a sample version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SampleNodeAddress {
    sample: SampleAddress,
    node: String,
}

impl SampleNodeAddress {
    pub fn new(sample: SampleAddress, node: &str) -> Result<Self> {
        let node = check_string(Some(node), "node", Some(MAX_NODE_NAME_LEN))?;
        Ok(Self { sample, node })
    }

    pub fn sample(&self) -> &SampleAddress {
        &self.sample
    }

    pub fn node(&self) -> &str {
        &self.node
    }
}

impl fmt::Display for SampleNodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.sample, self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SampleError;

    fn sid() -> Uuid {
        Uuid::parse_str("1234567890abcdef1234567890abcdef").unwrap()
    }

    #[test]
    fn node_address_rendering() {
        let sa = SampleAddress::new(sid(), NonZeroU32::new(5).unwrap());
        let sna = SampleNodeAddress::new(sa, "foo").expect("valid node");
        assert_eq!(
            sna.to_string(),
            "12345678-90ab-cdef-1234-567890abcdef:5:foo"
        );
        assert_eq!(sna.sample().version(), 5);
        assert_eq!(sna.node(), "foo");
    }

    #[test]
    fn node_name_is_validated() {
        let sa = SampleAddress::new(sid(), NonZeroU32::MIN);
        assert_eq!(
            SampleNodeAddress::new(sa, " "),
            Err(SampleError::MissingParameter { name: "node" })
        );
        assert!(SampleNodeAddress::new(sa, "a\tb").is_err());
        assert!(SampleNodeAddress::new(sa, &"n".repeat(MAX_NODE_NAME_LEN + 1)).is_err());
    }
}
