//! Quaternion value type backing joint orientations.

use core::ops::{Index, IndexMut};

use k4abt_sys as sys;
use serde::{Deserialize, Serialize};

/// Orientation quaternion in w, x, y, z component order.
///
/// The native library exposes this as a union of a named-field view and a
/// four-element array over the same storage; here a single backing array
/// carries both views, with named accessors for the components. Layout is
/// identical to [`sys::k4a_quaternion_t`], and component order follows the
/// SDK (w first), not the x,y,z,w order some math crates use.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Quaternion([f32; 4]);

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Quaternion = Quaternion([1.0, 0.0, 0.0, 0.0]);

    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Quaternion([w, x, y, z])
    }

    #[inline]
    pub const fn w(self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub const fn x(self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub const fn y(self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub const fn z(self) -> f32 {
        self.0[3]
    }

    /// Components as `[w, x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        self.0
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::IDENTITY
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from(v: [f32; 4]) -> Self {
        Quaternion(v)
    }
}

impl From<Quaternion> for [f32; 4] {
    fn from(q: Quaternion) -> Self {
        q.0
    }
}

impl Index<usize> for Quaternion {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Quaternion {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.0[index]
    }
}

impl From<sys::k4a_quaternion_t> for Quaternion {
    fn from(raw: sys::k4a_quaternion_t) -> Self {
        // Both union views are plain f32s over the same bytes, so reading the
        // array view is always defined.
        Quaternion(unsafe { raw.v })
    }
}

impl From<Quaternion> for sys::k4a_quaternion_t {
    fn from(q: Quaternion) -> Self {
        sys::k4a_quaternion_t { v: q.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_components_alias_the_array() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.w(), 1.0);
        assert_eq!(q.x(), 2.0);
        assert_eq!(q.y(), 3.0);
        assert_eq!(q.z(), 4.0);
        assert_eq!(q.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q[0], 1.0);
        assert_eq!(q[3], 4.0);
    }

    #[test]
    fn default_is_identity() {
        let q = Quaternion::default();
        assert_eq!(q, Quaternion::IDENTITY);
        assert_eq!(q.to_array(), [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn raw_round_trip_preserves_component_order() {
        let raw = sys::k4a_quaternion_t {
            wxyz: sys::k4a_quaternion_wxyz_t {
                w: 0.5,
                x: -0.5,
                y: 0.25,
                z: -0.25,
            },
        };
        let q = Quaternion::from(raw);
        assert_eq!(q, Quaternion::new(0.5, -0.5, 0.25, -0.25));

        let back = sys::k4a_quaternion_t::from(q);
        let wxyz = unsafe { back.wxyz };
        assert_eq!(wxyz.w, 0.5);
        assert_eq!(wxyz.z, -0.25);
    }
}
