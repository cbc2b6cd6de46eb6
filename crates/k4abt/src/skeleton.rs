//! Joints and the fixed 26-joint skeleton.

use core::ops::{Index, IndexMut};

use k4abt_sys as sys;
use serde::{Deserialize, Serialize};

use crate::joint_id::JointId;
use crate::quaternion::Quaternion;

/// One anatomical landmark of a tracked body.
///
/// Position and orientation together define the joint's coordinate system,
/// relative to the sensor global coordinate system.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// Joint position in millimeters.
    pub position: [f32; 3],
    /// Joint orientation as a normalized quaternion.
    pub orientation: Quaternion,
}

impl Joint {
    pub const fn new(position: [f32; 3], orientation: Quaternion) -> Self {
        Joint {
            position,
            orientation,
        }
    }
}

impl From<sys::k4abt_joint_t> for Joint {
    fn from(raw: sys::k4abt_joint_t) -> Self {
        Joint {
            position: unsafe { raw.position.v },
            orientation: Quaternion::from(raw.orientation),
        }
    }
}

impl From<Joint> for sys::k4abt_joint_t {
    fn from(joint: Joint) -> Self {
        sys::k4abt_joint_t {
            position: sys::k4a_float3_t { v: joint.position },
            orientation: joint.orientation.into(),
        }
    }
}

/// The full joint set for one tracked body, indexed by [`JointId`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skeleton {
    /// Joints in [`JointId`] ordinal order.
    pub joints: [Joint; JointId::COUNT],
}

impl Skeleton {
    #[inline]
    pub fn joint(&self, id: JointId) -> &Joint {
        &self.joints[id.index()]
    }

    #[inline]
    pub fn joint_mut(&mut self, id: JointId) -> &mut Joint {
        &mut self.joints[id.index()]
    }

    /// Iterate joints in ordinal order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (JointId, &Joint)> {
        JointId::ALL.into_iter().zip(self.joints.iter())
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Skeleton {
            joints: [Joint::default(); JointId::COUNT],
        }
    }
}

impl Index<JointId> for Skeleton {
    type Output = Joint;

    fn index(&self, id: JointId) -> &Joint {
        self.joint(id)
    }
}

impl IndexMut<JointId> for Skeleton {
    fn index_mut(&mut self, id: JointId) -> &mut Joint {
        self.joint_mut(id)
    }
}

impl From<sys::k4abt_skeleton_t> for Skeleton {
    fn from(raw: sys::k4abt_skeleton_t) -> Self {
        Skeleton {
            joints: raw.joints.map(Joint::from),
        }
    }
}

impl From<Skeleton> for sys::k4abt_skeleton_t {
    fn from(skeleton: Skeleton) -> Self {
        sys::k4abt_skeleton_t {
            joints: skeleton.joints.map(sys::k4abt_joint_t::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_holds_one_joint_per_id() {
        let skeleton = Skeleton::default();
        assert_eq!(skeleton.joints.len(), JointId::COUNT);
        assert_eq!(skeleton.iter().count(), 26);
    }

    #[test]
    fn indexing_by_joint_id_hits_the_ordinal_slot() {
        let mut skeleton = Skeleton::default();
        skeleton[JointId::Head].position = [10.0, 20.0, 30.0];
        assert_eq!(skeleton.joints[20].position, [10.0, 20.0, 30.0]);
        assert_eq!(skeleton.joint(JointId::Head).position, [10.0, 20.0, 30.0]);
    }

    #[test]
    fn default_joints_are_at_origin_with_identity_orientation() {
        let skeleton = Skeleton::default();
        for (_, joint) in skeleton.iter() {
            assert_eq!(joint.position, [0.0, 0.0, 0.0]);
            assert_eq!(joint.orientation, Quaternion::IDENTITY);
        }
    }

    #[test]
    fn raw_round_trip_preserves_every_joint() {
        let mut skeleton = Skeleton::default();
        for (i, id) in JointId::ALL.into_iter().enumerate() {
            skeleton[id] = Joint::new(
                [i as f32, i as f32 * 2.0, i as f32 * 3.0],
                Quaternion::new(1.0, 0.0, i as f32, 0.0),
            );
        }
        let raw = sys::k4abt_skeleton_t::from(skeleton);
        assert_eq!(Skeleton::from(raw), skeleton);
    }
}
