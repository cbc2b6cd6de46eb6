//! Typed data model for Azure Kinect Body Tracking (k4abt) skeletal results.
//!
//! The raw ABI declarations live in `k4abt-sys`; this crate layers rustified
//! enums, checked conversions, and serde-ready value types over them. Every
//! type here converts losslessly to and from its `k4abt-sys` counterpart, so
//! results coming out of the native library can be indexed, recorded, and
//! replayed without touching unions or raw ordinals.

pub mod body;
pub mod config;
pub mod error;
pub mod joint_id;
pub mod quaternion;
pub mod skeleton;
pub mod version;

// Re-exports for consumers
pub use body::{Body, BodyId, BODY_INDEX_MAP_BACKGROUND};
pub use config::{SensorOrientation, TrackerConfiguration, DEFAULT_SMOOTHING_FACTOR};
pub use error::ConversionError;
pub use joint_id::JointId;
pub use quaternion::Quaternion;
pub use skeleton::{Joint, Skeleton};
pub use version::{Version, VERSION_STR};
