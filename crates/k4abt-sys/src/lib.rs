//! Raw type and constant declarations for the Azure Kinect Body Tracking SDK
//! (k4abt) version 0.9.2.
//!
//! Everything here mirrors the C ABI exactly: field order, sizes, and enum
//! ordinals are a binary contract with the native library and must not be
//! rearranged. Enumerations are exposed bindgen-style as a `c_int` alias plus
//! named constants so that every ordinal stays visible at the declaration
//! site. No functions are declared in this crate; the SDK's function surface
//! lives in separate headers that are bound elsewhere.
//!
//! The safe, idiomatic layer over these types lives in the `k4abt` crate.

#![allow(non_camel_case_types)]

use core::ffi::c_int;

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Instance backing a [`k4abt_tracker_t`]. Never constructed from Rust; the
/// empty-struct shape only gives the handle pointer a distinct pointee type.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _k4abt_tracker_t {
    _unused: [u8; 0],
}

/// Handle to a body tracking session.
///
/// Created and destroyed by the native library; invalid handles are null.
pub type k4abt_tracker_t = *mut _k4abt_tracker_t;

/// Instance backing a [`k4abt_frame_t`].
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _k4abt_frame_t {
    _unused: [u8; 0],
}

/// Handle to one body tracking result frame.
///
/// Produced by polling the tracker and released by the caller; the native
/// library reference-counts it internally. Invalid handles are null.
pub type k4abt_frame_t = *mut _k4abt_frame_t;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Model fitting joint identifier.
///
/// Ordinals are array indices into [`k4abt_skeleton_t::joints`].
pub type k4abt_joint_id_t = c_int;

pub const K4ABT_JOINT_PELVIS: k4abt_joint_id_t = 0;
pub const K4ABT_JOINT_SPINE_NAVAL: k4abt_joint_id_t = 1;
pub const K4ABT_JOINT_SPINE_CHEST: k4abt_joint_id_t = 2;
pub const K4ABT_JOINT_NECK: k4abt_joint_id_t = 3;
pub const K4ABT_JOINT_CLAVICLE_LEFT: k4abt_joint_id_t = 4;
pub const K4ABT_JOINT_SHOULDER_LEFT: k4abt_joint_id_t = 5;
pub const K4ABT_JOINT_ELBOW_LEFT: k4abt_joint_id_t = 6;
pub const K4ABT_JOINT_WRIST_LEFT: k4abt_joint_id_t = 7;
pub const K4ABT_JOINT_CLAVICLE_RIGHT: k4abt_joint_id_t = 8;
pub const K4ABT_JOINT_SHOULDER_RIGHT: k4abt_joint_id_t = 9;
pub const K4ABT_JOINT_ELBOW_RIGHT: k4abt_joint_id_t = 10;
pub const K4ABT_JOINT_WRIST_RIGHT: k4abt_joint_id_t = 11;
pub const K4ABT_JOINT_HIP_LEFT: k4abt_joint_id_t = 12;
pub const K4ABT_JOINT_KNEE_LEFT: k4abt_joint_id_t = 13;
pub const K4ABT_JOINT_ANKLE_LEFT: k4abt_joint_id_t = 14;
pub const K4ABT_JOINT_FOOT_LEFT: k4abt_joint_id_t = 15;
pub const K4ABT_JOINT_HIP_RIGHT: k4abt_joint_id_t = 16;
pub const K4ABT_JOINT_KNEE_RIGHT: k4abt_joint_id_t = 17;
pub const K4ABT_JOINT_ANKLE_RIGHT: k4abt_joint_id_t = 18;
pub const K4ABT_JOINT_FOOT_RIGHT: k4abt_joint_id_t = 19;
pub const K4ABT_JOINT_HEAD: k4abt_joint_id_t = 20;
pub const K4ABT_JOINT_NOSE: k4abt_joint_id_t = 21;
pub const K4ABT_JOINT_EYE_LEFT: k4abt_joint_id_t = 22;
pub const K4ABT_JOINT_EAR_LEFT: k4abt_joint_id_t = 23;
pub const K4ABT_JOINT_EYE_RIGHT: k4abt_joint_id_t = 24;
pub const K4ABT_JOINT_EAR_RIGHT: k4abt_joint_id_t = 25;
/// Count sentinel, one past the last valid joint id.
pub const K4ABT_JOINT_COUNT: k4abt_joint_id_t = 26;

/// Sensor mounting orientation, defined while facing the camera.
///
/// Passing the correct orientation at tracker creation helps the native
/// tracker interpret input frames.
pub type k4abt_sensor_orientation_t = c_int;

/// Sensor mounted at its default orientation.
pub const K4ABT_SENSOR_ORIENTATION_DEFAULT: k4abt_sensor_orientation_t = 0;
/// Sensor rotated 90 degrees clockwise.
pub const K4ABT_SENSOR_ORIENTATION_CLOCKWISE90: k4abt_sensor_orientation_t = 1;
/// Sensor rotated 90 degrees counter-clockwise.
pub const K4ABT_SENSOR_ORIENTATION_COUNTERCLOCKWISE90: k4abt_sensor_orientation_t = 2;
/// Sensor mounted upside-down.
pub const K4ABT_SENSOR_ORIENTATION_FLIP180: k4abt_sensor_orientation_t = 3;

// ---------------------------------------------------------------------------
// Structures
// ---------------------------------------------------------------------------

/// Configuration parameters for a body tracker, passed at creation.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct k4abt_tracker_configuration_t {
    /// The sensor mounting orientation type.
    pub sensor_orientation: k4abt_sensor_orientation_t,
}

/// Named-field view of [`k4a_float3_t`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct k4a_float3_xyz_t {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Three dimensional floating point vector from the base k4a SDK.
///
/// Both views alias the same 12 bytes of storage.
#[repr(C)]
#[derive(Copy, Clone)]
pub union k4a_float3_t {
    /// X, Y, Z representation of the vector.
    pub xyz: k4a_float3_xyz_t,
    /// Array representation of the vector.
    pub v: [f32; 3],
}

/// Named-field view of [`k4a_quaternion_t`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct k4a_quaternion_wxyz_t {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Quaternion, addressable by named component or by index.
///
/// Both views alias the same 16 bytes of storage.
#[repr(C)]
#[derive(Copy, Clone)]
pub union k4a_quaternion_t {
    /// W, X, Y, Z representation of the quaternion.
    pub wxyz: k4a_quaternion_wxyz_t,
    /// Array representation of the quaternion.
    pub v: [f32; 4],
}

/// A single joint of a tracked skeleton.
///
/// Position and orientation together define the joint's coordinate system,
/// relative to the sensor global coordinate system.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct k4abt_joint_t {
    /// The position of the joint specified in millimeters.
    pub position: k4a_float3_t,
    /// The orientation of the joint specified as a normalized quaternion.
    pub orientation: k4a_quaternion_t,
}

/// The full set of joints for one tracked body, indexed by joint id.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct k4abt_skeleton_t {
    pub joints: [k4abt_joint_t; K4ABT_JOINT_COUNT as usize],
}

/// One tracked body.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct k4abt_body_t {
    /// An id for the body that can be used for frame-to-frame correlation.
    pub id: u32,
    /// The skeleton information for the body.
    pub skeleton: k4abt_skeleton_t,
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// Pixel value marking background pixels in the body index map.
pub const K4ABT_BODY_INDEX_MAP_BACKGROUND: u8 = 255;

/// The invalid body id value.
pub const K4ABT_INVALID_BODY_ID: u32 = 0xFFFF_FFFF;

/// The default tracker temporal smoothing factor.
pub const K4ABT_DEFAULT_TRACKER_SMOOTHING_FACTOR: f32 = 0.5;

/// Default configuration setting for a k4abt tracker.
pub const K4ABT_TRACKER_CONFIG_DEFAULT: k4abt_tracker_configuration_t =
    k4abt_tracker_configuration_t {
        sensor_orientation: K4ABT_SENSOR_ORIENTATION_DEFAULT,
    };

// ---------------------------------------------------------------------------
// Version
// ---------------------------------------------------------------------------

pub const K4ABT_VERSION_MAJOR: u32 = 0;
pub const K4ABT_VERSION_MINOR: u32 = 9;
pub const K4ABT_VERSION_PATCH: u32 = 2;
pub const K4ABT_VERSION_PRERELEASE: &str = "";
pub const K4ABT_VERSION_BUILD_METADATA: &str = "";

pub const K4ABT_VERSION_STR: &str = "0.9.2";
