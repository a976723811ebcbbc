//! Addresses of workspace objects that samples can be linked to.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::MAX_DATA_ID_LEN;
use crate::validate::{check_optional_string, check_string};
use crate::{Result, SampleError};

/// Unique permanent address of a workspace object version: `ws/obj/ver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Upa {
    wsid: NonZeroU64,
    objid: NonZeroU64,
    version: NonZeroU64,
}

impl Upa {
    #[must_use]
    pub fn new(wsid: NonZeroU64, objid: NonZeroU64, version: NonZeroU64) -> Self {
        Self {
            wsid,
            objid,
            version,
        }
    }

    pub fn wsid(&self) -> u64 {
        self.wsid.get()
    }

    pub fn objid(&self) -> u64 {
        self.objid.get()
    }

    pub fn version(&self) -> u64 {
        self.version.get()
    }
}

impl FromStr for Upa {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self> {
        let upa = check_string(Some(s), "upa", None)?;
        let invalid = || SampleError::illegal(format!("{upa} is not a valid UPA"));
        let parts: Vec<&str> = upa.split('/').collect();
        let [wsid, objid, version] = parts[..] else {
            return Err(invalid());
        };
        let part = |p: &str| p.parse::<NonZeroU64>().map_err(|_| invalid());
        Ok(Self::new(part(wsid)?, part(objid)?, part(version)?))
    }
}

impl fmt::Display for Upa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.wsid, self.objid, self.version)
    }
}

/// A workspace object, optionally narrowed to a unit of data inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DataUnitId {
    upa: Upa,
    #[serde(skip_serializing_if = "Option::is_none")]
    dataid: Option<String>,
}

impl DataUnitId {
    /// A blank `dataid` addresses the whole object.
    pub fn new(upa: Upa, dataid: Option<&str>) -> Result<Self> {
        let dataid = check_optional_string(dataid, "dataid", Some(MAX_DATA_ID_LEN))?;
        Ok(Self { upa, dataid })
    }

    pub fn upa(&self) -> &Upa {
        &self.upa
    }

    pub fn dataid(&self) -> Option<&str> {
        self.dataid.as_deref()
    }
}

impl From<Upa> for DataUnitId {
    fn from(upa: Upa) -> Self {
        Self { upa, dataid: None }
    }
}

impl fmt::Display for DataUnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dataid {
            Some(dataid) => write!(f, "{}:{dataid}", self.upa),
            None => write!(f, "{}", self.upa),
        }
    }
}
