//! Joint identifiers for the 26-landmark body model.

use k4abt_sys as sys;
use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// Identifier of one anatomical landmark in a tracked skeleton.
///
/// Ordinals are fixed by the native library's ABI and double as indices into
/// [`Skeleton::joints`](crate::Skeleton). The order must never change.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum JointId {
    Pelvis = 0,
    SpineNaval = 1,
    SpineChest = 2,
    Neck = 3,
    ClavicleLeft = 4,
    ShoulderLeft = 5,
    ElbowLeft = 6,
    WristLeft = 7,
    ClavicleRight = 8,
    ShoulderRight = 9,
    ElbowRight = 10,
    WristRight = 11,
    HipLeft = 12,
    KneeLeft = 13,
    AnkleLeft = 14,
    FootLeft = 15,
    HipRight = 16,
    KneeRight = 17,
    AnkleRight = 18,
    FootRight = 19,
    Head = 20,
    Nose = 21,
    EyeLeft = 22,
    EarLeft = 23,
    EyeRight = 24,
    EarRight = 25,
}

impl JointId {
    /// Number of joints in the body model (the ABI's count sentinel).
    pub const COUNT: usize = sys::K4ABT_JOINT_COUNT as usize;

    /// All joint ids in ordinal order.
    pub const ALL: [JointId; JointId::COUNT] = [
        JointId::Pelvis,
        JointId::SpineNaval,
        JointId::SpineChest,
        JointId::Neck,
        JointId::ClavicleLeft,
        JointId::ShoulderLeft,
        JointId::ElbowLeft,
        JointId::WristLeft,
        JointId::ClavicleRight,
        JointId::ShoulderRight,
        JointId::ElbowRight,
        JointId::WristRight,
        JointId::HipLeft,
        JointId::KneeLeft,
        JointId::AnkleLeft,
        JointId::FootLeft,
        JointId::HipRight,
        JointId::KneeRight,
        JointId::AnkleRight,
        JointId::FootRight,
        JointId::Head,
        JointId::Nose,
        JointId::EyeLeft,
        JointId::EarLeft,
        JointId::EyeRight,
        JointId::EarRight,
    ];

    /// Bone connections as (parent, child) pairs, pelvis-rooted. Useful for
    /// drawing skeleton overlays or walking the kinematic chain.
    pub const BONES: [(JointId, JointId); 25] = [
        // Spine
        (JointId::Pelvis, JointId::SpineNaval),
        (JointId::SpineNaval, JointId::SpineChest),
        (JointId::SpineChest, JointId::Neck),
        // Left arm
        (JointId::SpineChest, JointId::ClavicleLeft),
        (JointId::ClavicleLeft, JointId::ShoulderLeft),
        (JointId::ShoulderLeft, JointId::ElbowLeft),
        (JointId::ElbowLeft, JointId::WristLeft),
        // Right arm
        (JointId::SpineChest, JointId::ClavicleRight),
        (JointId::ClavicleRight, JointId::ShoulderRight),
        (JointId::ShoulderRight, JointId::ElbowRight),
        (JointId::ElbowRight, JointId::WristRight),
        // Left leg
        (JointId::Pelvis, JointId::HipLeft),
        (JointId::HipLeft, JointId::KneeLeft),
        (JointId::KneeLeft, JointId::AnkleLeft),
        (JointId::AnkleLeft, JointId::FootLeft),
        // Right leg
        (JointId::Pelvis, JointId::HipRight),
        (JointId::HipRight, JointId::KneeRight),
        (JointId::KneeRight, JointId::AnkleRight),
        (JointId::AnkleRight, JointId::FootRight),
        // Head
        (JointId::Neck, JointId::Head),
        (JointId::Head, JointId::Nose),
        (JointId::Head, JointId::EyeLeft),
        (JointId::Head, JointId::EarLeft),
        (JointId::Head, JointId::EyeRight),
        (JointId::Head, JointId::EarRight),
    ];

    /// The ordinal as an array index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parent joint in the kinematic chain, or `None` for the pelvis root.
    pub fn parent(self) -> Option<JointId> {
        JointId::BONES
            .iter()
            .find(|(_, child)| *child == self)
            .map(|(parent, _)| *parent)
    }
}

impl TryFrom<sys::k4abt_joint_id_t> for JointId {
    type Error = ConversionError;

    fn try_from(value: sys::k4abt_joint_id_t) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| JointId::ALL.get(i).copied())
            .ok_or(ConversionError::InvalidJointId(value as i32))
    }
}

impl From<JointId> for sys::k4abt_joint_id_t {
    fn from(id: JointId) -> Self {
        id as sys::k4abt_joint_id_t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_dense_and_fixed() {
        assert_eq!(JointId::COUNT, 26);
        for (i, id) in JointId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
        assert_eq!(JointId::Pelvis.index(), 0);
        assert_eq!(JointId::EarRight.index(), 25);
    }

    #[test]
    fn raw_conversion_round_trips() {
        for id in JointId::ALL {
            let raw = sys::k4abt_joint_id_t::from(id);
            assert_eq!(JointId::try_from(raw), Ok(id));
        }
    }

    #[test]
    fn raw_conversion_rejects_out_of_range() {
        assert_eq!(
            JointId::try_from(sys::K4ABT_JOINT_COUNT),
            Err(ConversionError::InvalidJointId(26))
        );
        assert_eq!(JointId::try_from(-1), Err(ConversionError::InvalidJointId(-1)));
    }

    #[test]
    fn every_joint_except_pelvis_has_a_parent() {
        assert_eq!(JointId::Pelvis.parent(), None);
        for id in JointId::ALL.into_iter().skip(1) {
            let parent = id.parent().unwrap();
            // Parents always precede children in ordinal order.
            assert!(parent.index() < id.index(), "{parent:?} -> {id:?}");
        }
        assert_eq!(JointId::BONES.len(), JointId::COUNT - 1);
    }

    #[test]
    fn wrist_chain_reaches_pelvis() {
        let mut cursor = JointId::WristLeft;
        let mut hops = 0;
        while let Some(parent) = cursor.parent() {
            cursor = parent;
            hops += 1;
        }
        assert_eq!(cursor, JointId::Pelvis);
        assert_eq!(hops, 6);
    }
}
