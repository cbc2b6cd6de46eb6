//! Tracker creation configuration.

use k4abt_sys as sys;
use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// The default temporal smoothing factor the tracker applies to joint data.
pub const DEFAULT_SMOOTHING_FACTOR: f32 = sys::K4ABT_DEFAULT_TRACKER_SMOOTHING_FACTOR;

/// Physical mounting rotation of the depth sensor, defined while facing the
/// camera. Passing the correct orientation at tracker creation helps the
/// tracker interpret input frames.
///
/// Ordinals are fixed by the native library's ABI.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum SensorOrientation {
    /// Sensor mounted at its default orientation.
    #[default]
    Default = 0,
    /// Sensor rotated 90 degrees clockwise.
    Clockwise90 = 1,
    /// Sensor rotated 90 degrees counter-clockwise.
    CounterClockwise90 = 2,
    /// Sensor mounted upside-down.
    Flip180 = 3,
}

impl TryFrom<sys::k4abt_sensor_orientation_t> for SensorOrientation {
    type Error = ConversionError;

    fn try_from(value: sys::k4abt_sensor_orientation_t) -> Result<Self, Self::Error> {
        match value {
            sys::K4ABT_SENSOR_ORIENTATION_DEFAULT => Ok(SensorOrientation::Default),
            sys::K4ABT_SENSOR_ORIENTATION_CLOCKWISE90 => Ok(SensorOrientation::Clockwise90),
            sys::K4ABT_SENSOR_ORIENTATION_COUNTERCLOCKWISE90 => {
                Ok(SensorOrientation::CounterClockwise90)
            }
            sys::K4ABT_SENSOR_ORIENTATION_FLIP180 => Ok(SensorOrientation::Flip180),
            other => Err(ConversionError::InvalidSensorOrientation(other as i32)),
        }
    }
}

impl From<SensorOrientation> for sys::k4abt_sensor_orientation_t {
    fn from(orientation: SensorOrientation) -> Self {
        orientation as sys::k4abt_sensor_orientation_t
    }
}

/// Configuration passed when creating a tracker. Value type; the caller owns
/// its storage and copies it into the creation call.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfiguration {
    /// The sensor mounting orientation type.
    pub sensor_orientation: SensorOrientation,
}

impl TryFrom<sys::k4abt_tracker_configuration_t> for TrackerConfiguration {
    type Error = ConversionError;

    fn try_from(raw: sys::k4abt_tracker_configuration_t) -> Result<Self, Self::Error> {
        Ok(TrackerConfiguration {
            sensor_orientation: SensorOrientation::try_from(raw.sensor_orientation)?,
        })
    }
}

impl From<TrackerConfiguration> for sys::k4abt_tracker_configuration_t {
    fn from(config: TrackerConfiguration) -> Self {
        sys::k4abt_tracker_configuration_t {
            sensor_orientation: config.sensor_orientation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_abi_default() {
        let raw = sys::k4abt_tracker_configuration_t::from(TrackerConfiguration::default());
        assert_eq!(raw, sys::K4ABT_TRACKER_CONFIG_DEFAULT);
        assert_eq!(raw.sensor_orientation, 0);
    }

    #[test]
    fn orientation_ordinals_round_trip() {
        for orientation in [
            SensorOrientation::Default,
            SensorOrientation::Clockwise90,
            SensorOrientation::CounterClockwise90,
            SensorOrientation::Flip180,
        ] {
            let raw = sys::k4abt_sensor_orientation_t::from(orientation);
            assert_eq!(SensorOrientation::try_from(raw), Ok(orientation));
        }
    }

    #[test]
    fn unknown_orientation_is_rejected() {
        assert_eq!(
            SensorOrientation::try_from(4),
            Err(ConversionError::InvalidSensorOrientation(4))
        );
    }

    #[test]
    fn default_smoothing_factor() {
        assert_eq!(DEFAULT_SMOOTHING_FACTOR, 0.5);
    }
}
