use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle of a captured API object.
///
/// Ids are only ever compared and used as lookup keys into the external resource catalog. The
/// zero value ([`ResourceId::NULL`], also the `Default`) is the only way to say "nothing bound".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ResourceId(u64);

impl ResourceId {
    pub const NULL: Self = Self(0);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for ResourceId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("ResourceId::NULL")
        } else {
            write!(f, "ResourceId::{}", self.0)
        }
    }
}
