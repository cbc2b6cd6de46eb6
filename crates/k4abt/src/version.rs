//! SDK version identifiers.

use core::fmt;

use k4abt_sys as sys;
use serde::{Deserialize, Serialize};

/// Version string of the bound SDK.
pub const VERSION_STR: &str = sys::K4ABT_VERSION_STR;

/// Semantic version of the bound SDK.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// The version these bindings were written against.
    pub const CURRENT: Version = Version {
        major: sys::K4ABT_VERSION_MAJOR,
        minor: sys::K4ABT_VERSION_MINOR,
        patch: sys::K4ABT_VERSION_PATCH,
    };
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
