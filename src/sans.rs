//! Pure decoding primitives.
//!
//! Nothing in this module allocates, logs, or keeps state beyond the
//! [`calibration::Calibration`] passed in by the caller. Each decoding
//! function returns its result along with an optional
//! [`anomaly::LengthAnomaly`] describing how the input buffer differed from
//! its nominal length. Decoding always succeeds: short buffers are padded and
//! long ones truncated, following a policy specific to each channel.
//!
//! # Channels
//!
//! | Channel | Nominal length | Layout |
//! |---|---|---|
//! | Sensor offsets | 12 | 6 little-endian `i16` |
//! | Sensor coefficients | 12 | 6 little-endian `i16` |
//! | Accelerometer offsets | 12 | 6 little-endian `i16` (bottom xyz, top xyz) |
//! | Battery level | 1 | `u8` percent |
//! | Real-time data | 20 | 6 little-endian `i16`, then 2 packed triplets |
//!
//! See [`crate::avec`] for a stateful decoder wrapping these functions.

pub mod anomaly;
pub mod battery;
pub mod calibration;
pub mod real_time;
pub mod triplet;
pub mod word;
