//! Tracked bodies and their correlation ids.

use core::fmt;

use k4abt_sys as sys;
use serde::{Deserialize, Serialize};

use crate::skeleton::Skeleton;

/// Pixel value marking background pixels in the body index map.
pub const BODY_INDEX_MAP_BACKGROUND: u8 = sys::K4ABT_BODY_INDEX_MAP_BACKGROUND;

/// Correlation id the tracker assigns to a body.
///
/// Ids let callers follow a body from frame to frame; the tracker makes no
/// stronger stability guarantee than that.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub u32);

impl BodyId {
    /// The reserved invalid id.
    pub const INVALID: BodyId = BodyId(sys::K4ABT_INVALID_BODY_ID);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != BodyId::INVALID
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tracked person: a correlation id plus a full skeleton.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub skeleton: Skeleton,
}

impl From<sys::k4abt_body_t> for Body {
    fn from(raw: sys::k4abt_body_t) -> Self {
        Body {
            id: BodyId(raw.id),
            skeleton: Skeleton::from(raw.skeleton),
        }
    }
}

impl From<Body> for sys::k4abt_body_t {
    fn from(body: Body) -> Self {
        sys::k4abt_body_t {
            id: body.id.0,
            skeleton: body.skeleton.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_is_all_ones() {
        assert_eq!(BodyId::INVALID.0, 0xFFFF_FFFF);
        assert!(!BodyId::INVALID.is_valid());
        assert!(BodyId(0).is_valid());
        assert!(BodyId(7).is_valid());
    }

    #[test]
    fn background_pixel_value() {
        assert_eq!(BODY_INDEX_MAP_BACKGROUND, 255);
    }

    #[test]
    fn raw_round_trip_keeps_id_and_skeleton() {
        let body = Body {
            id: BodyId(42),
            skeleton: Skeleton::default(),
        };
        let raw = sys::k4abt_body_t::from(body);
        assert_eq!(raw.id, 42);
        assert_eq!(Body::from(raw), body);
    }
}
