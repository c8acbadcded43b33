//! Calibration vectors.

use crate::{ACCELEROMETER_COUNT, AXIS_COUNT, SENSOR_COUNT};

use super::{
    anomaly::{Channel, LengthAnomaly},
    word,
};

pub const DEFAULT_SENSOR_OFFSET: i16 = 2048;
pub const DEFAULT_SENSOR_COEFFICIENT: i16 = -767;
pub const DEFAULT_ACCELEROMETER_OFFSET: i16 = 0;

/// One of the three calibration vectors held by a [`Calibration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalibrationVector {
    SensorOffsets,
    SensorCoefficients,
    AccelerometerOffsets,
}

impl CalibrationVector {
    /// The channel this vector is delivered on.
    pub const fn channel(self) -> Channel {
        match self {
            Self::SensorOffsets => Channel::SensorOffsets,
            Self::SensorCoefficients => Channel::SensorCoefficients,
            Self::AccelerometerOffsets => Channel::AccelerometerOffsets,
        }
    }
}

/// Per-channel constants normalizing raw readings into physical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    sensor_offsets: [i16; SENSOR_COUNT],
    sensor_coefficients: [i16; SENSOR_COUNT],
    accelerometer_offsets: [i16; ACCELEROMETER_COUNT * AXIS_COUNT],
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            sensor_offsets: [DEFAULT_SENSOR_OFFSET; SENSOR_COUNT],
            sensor_coefficients: [DEFAULT_SENSOR_COEFFICIENT; SENSOR_COUNT],
            accelerometer_offsets: [DEFAULT_ACCELEROMETER_OFFSET; ACCELEROMETER_COUNT * AXIS_COUNT],
        }
    }
}

impl Calibration {
    pub const fn new(
        sensor_offsets: [i16; SENSOR_COUNT],
        sensor_coefficients: [i16; SENSOR_COUNT],
        accelerometer_offsets: [i16; ACCELEROMETER_COUNT * AXIS_COUNT],
    ) -> Self {
        Self {
            sensor_offsets,
            sensor_coefficients,
            accelerometer_offsets,
        }
    }

    /// Raw reading of each flex sensor when straight.
    pub const fn sensor_offsets(&self) -> &[i16; SENSOR_COUNT] {
        &self.sensor_offsets
    }

    /// Raw units per radian of each flex sensor.
    pub const fn sensor_coefficients(&self) -> &[i16; SENSOR_COUNT] {
        &self.sensor_coefficients
    }

    /// Offsets of the bottom accelerometer's axes, then the top's.
    pub const fn accelerometer_offsets(&self) -> &[i16; ACCELEROMETER_COUNT * AXIS_COUNT] {
        &self.accelerometer_offsets
    }

    /// Replace a vector with the words decoded from a raw buffer.
    ///
    /// A short buffer keeps the vector's previous last value for the missing
    /// trailing entries. Extra words are discarded.
    pub fn update(&mut self, vector: CalibrationVector, r: &[u8]) -> Option<LengthAnomaly> {
        match vector {
            CalibrationVector::SensorOffsets => replace(&mut self.sensor_offsets, r),
            CalibrationVector::SensorCoefficients => replace(&mut self.sensor_coefficients, r),
            CalibrationVector::AccelerometerOffsets => replace(&mut self.accelerometer_offsets, r),
        }

        vector.channel().check(r.len())
    }
}

fn replace<const N: usize>(values: &mut [i16; N], r: &[u8]) {
    let filler = values.last().copied().unwrap_or(0);
    *values = word::resize(word::decode(r), filler);
}
