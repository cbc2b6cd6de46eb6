//! Errors for checked conversions from raw ABI values.

use thiserror::Error;

/// Raised when a raw value read from the native library does not map onto a
/// known enumeration variant.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("joint id {0} is out of range (valid ids are 0..26)")]
    InvalidJointId(i32),
    #[error("sensor orientation {0} is out of range (valid values are 0..=3)")]
    InvalidSensorOrientation(i32),
}
