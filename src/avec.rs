//! Stateful decoding for transport integration.
//!
//! A [`Decoder`] owns the calibration state for one device session. Feed it
//! buffers through its per-channel entry points, or hand every notification
//! to [`Decoder::decode`] along with a [`FromNotifications`] receiver.
//!
//! Length anomalies are recovered locally and reported as `warn`-level
//! records through the `log` facade.

#[cfg(feature = "std")]
pub mod shared;

#[cfg(feature = "std")]
pub use shared::SharedDecoder;

use log::{trace, warn};

use crate::sans::{
    anomaly::{Channel, LengthAnomaly},
    battery,
    calibration::{Calibration, CalibrationVector},
    real_time::{self, Posture},
};

/// Derive [`FromNotifications`] for a struct collecting decoded values.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// Add the `notification(kind)` attribute to a struct field, where `kind` is
/// one of `battery`, `posture`, `calibration` or `anomaly`. An `Option<T>`
/// field keeps the latest value of that kind, and a `Vec<T>` field collects
/// all of them.
///
/// ```
/// #[derive(Debug, Default, FromNotifications)]
/// struct Session {
///     #[notification(battery)]
///     battery: Option<u8>,
///     #[notification(posture)]
///     postures: Vec<Posture>,
/// }
/// ```
///
/// For other field types, supply an accumulator closure with a typed second
/// argument.
///
/// ```
/// #[derive(Debug, Default, FromNotifications)]
/// struct Slouching {
///     #[notification(posture, |n, p: Posture| *n += (p.angles[0] > 0.5) as usize)]
///     count: usize,
/// }
/// ```
#[cfg(feature = "derive")]
pub use posture_sense_derive::FromNotifications;

/// Receive values decoded from device notifications.
///
/// The default implementation of each method ignores received values.
///
/// See the [`FromNotifications`](macro@FromNotifications) derive macro for an
/// automatic implementation of this trait.
#[allow(unused_variables)]
pub trait FromNotifications {
    /// Add a battery level, as a percentage.
    fn add_battery_level(&mut self, level: u8) {}
    /// Add a calibrated measurement snapshot.
    fn add_posture(&mut self, posture: Posture) {}
    /// Add the full calibration state after one of its vectors was updated.
    fn add_calibration(&mut self, calibration: Calibration) {}
    /// Add a length anomaly recovered while decoding.
    fn add_anomaly(&mut self, anomaly: LengthAnomaly) {}
}

/// Decoder owning the calibration state of one device session.
#[derive(Debug, Default, Clone)]
pub struct Decoder {
    calibration: Calibration,
}

impl Decoder {
    /// Create a decoder with the protocol's default calibration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calibration(calibration: Calibration) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Route a notification to its channel's decoder, publishing to a
    /// receiver.
    pub fn decode(&mut self, channel: Channel, r: &[u8], o: &mut impl FromNotifications) {
        let anomaly = match channel {
            Channel::BatteryLevel => {
                let (level, anomaly) = battery::decode(r);
                o.add_battery_level(level);
                anomaly
            }
            Channel::SensorOffsets => self.update(CalibrationVector::SensorOffsets, r, o),
            Channel::SensorCoefficients => self.update(CalibrationVector::SensorCoefficients, r, o),
            Channel::AccelerometerOffsets => {
                self.update(CalibrationVector::AccelerometerOffsets, r, o)
            }
            Channel::RealTimeData => {
                let (posture, anomaly) = real_time::decode(r, &self.calibration);
                o.add_posture(posture);
                anomaly
            }
        };

        if let Some(anomaly) = anomaly {
            report(&anomaly);
            o.add_anomaly(anomaly);
        }
    }

    fn update(
        &mut self,
        vector: CalibrationVector,
        r: &[u8],
        o: &mut impl FromNotifications,
    ) -> Option<LengthAnomaly> {
        let anomaly = self.calibration.update(vector, r);
        trace!("Updated {vector:?}: {:?}.", self.calibration);

        o.add_calibration(self.calibration);
        anomaly
    }

    /// Replace one calibration vector from a raw buffer.
    pub fn set_calibration(&mut self, vector: CalibrationVector, r: &[u8]) {
        if let Some(anomaly) = self.update(vector, r, &mut ()) {
            report(&anomaly);
        }
    }

    /// Replace the sensor offsets from 6 little-endian `i16` words.
    pub fn set_sensor_offsets(&mut self, r: &[u8]) {
        self.set_calibration(CalibrationVector::SensorOffsets, r);
    }

    /// Replace the sensor coefficients from 6 little-endian `i16` words.
    pub fn set_sensor_coefficients(&mut self, r: &[u8]) {
        self.set_calibration(CalibrationVector::SensorCoefficients, r);
    }

    /// Replace the accelerometer offsets from 6 little-endian `i16` words:
    /// the bottom accelerometer's xyz, then the top's.
    pub fn set_accelerometer_offsets(&mut self, r: &[u8]) {
        self.set_calibration(CalibrationVector::AccelerometerOffsets, r);
    }

    /// Decode a battery level as a percentage.
    pub fn decode_battery_level(&self, r: &[u8]) -> u8 {
        let (level, anomaly) = battery::decode(r);
        if let Some(anomaly) = anomaly {
            report(&anomaly);
        }
        level
    }

    /// Decode 6 little-endian `i16` sensor words and 2 packed accelerometer
    /// words into a calibrated snapshot.
    pub fn decode_real_time_data(&self, r: &[u8]) -> Posture {
        let (posture, anomaly) = real_time::decode(r, &self.calibration);
        if let Some(anomaly) = anomaly {
            report(&anomaly);
        }
        posture
    }
}

/// Discards every value.
impl FromNotifications for () {}

fn report(anomaly: &LengthAnomaly) {
    warn!("{anomaly}");
}
