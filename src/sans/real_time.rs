//! Real-time flex and acceleration samples.

use crate::{ACCELEROMETER_COUNT, AXIS_COUNT, SENSOR_COUNT};

use super::{
    anomaly::{Channel, LengthAnomaly},
    calibration::Calibration,
    triplet::{self, Acceleration},
    word,
};

/// Sensor bend angle in radians. 0 is straight, positive is bending forward.
pub type FlexAngle = f32;

/// Bytes of raw sensor words at the start of a real-time buffer.
const SENSOR_DATA_LEN: usize = SENSOR_COUNT * 2;

/// A calibrated measurement snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Posture {
    /// Flex angles, numbered from bottom to top.
    pub angles: [FlexAngle; SENSOR_COUNT],
    /// Accelerometer readings, numbered from bottom to top.
    pub accelerations: [Acceleration; ACCELEROMETER_COUNT],
}

/// Decode a real-time buffer and normalize it against a calibration.
///
/// Missing sensor words read as 0 and missing accelerometer words as
/// `(0, 0, 0)`. Only whole 4-byte accelerometer words are decoded; collection
/// stops at the first incomplete one.
///
/// A zero sensor coefficient produces an infinite or NaN angle.
pub fn decode(r: &[u8], c: &Calibration) -> (Posture, Option<LengthAnomaly>) {
    let sensor_data = &r[..r.len().min(SENSOR_DATA_LEN)];
    let raw: [i16; SENSOR_COUNT] = word::resize(word::decode(sensor_data), 0);

    let mut accelerations = [Acceleration::default(); ACCELEROMETER_COUNT];

    let words = r.get(SENSOR_DATA_LEN..).unwrap_or_default().chunks_exact(4);
    for (slot, w) in accelerations.iter_mut().zip(words) {
        *slot = triplet::decode([w[0], w[1], w[2], w[3]]);
    }

    let mut posture = Posture::default();

    let sensors = raw
        .iter()
        .zip(c.sensor_offsets())
        .zip(c.sensor_coefficients());

    for (angle, ((&reading, &offset), &coefficient)) in posture.angles.iter_mut().zip(sensors) {
        *angle = (i32::from(reading) - i32::from(offset)) as FlexAngle / FlexAngle::from(coefficient);
    }

    let offsets = c.accelerometer_offsets().chunks_exact(AXIS_COUNT);

    for ((out, &reading), offset) in posture
        .accelerations
        .iter_mut()
        .zip(&accelerations)
        .zip(offsets)
    {
        *out = reading.wrapping_sub(Acceleration::new(offset[0], offset[1], offset[2]));
    }

    (posture, Channel::RealTimeData.check(r.len()))
}
