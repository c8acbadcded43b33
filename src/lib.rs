#![no_std]

//! A decoder for the PostureSense wearable's wireless telemetry protocol.
//!
//! The device delivers fixed-width buffers on five logical channels: battery
//! level, three calibration vectors, and real-time flex/acceleration samples.
//! This crate turns those buffers into calibrated physical measurements.
//! It never touches the radio; a transport layer hands it bytes together with
//! the channel they arrived on.
//!
//! Most users should begin with [`avec::Decoder`], which owns the calibration
//! state and reports length anomalies through the `log` facade. The pure
//! primitives underneath live in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros (default).
//! - `std`: enable the lock-guarded shared decoder (default).

pub mod avec;
pub mod sans;

/// Number of flex sensors on the device, numbered from bottom to top.
pub const SENSOR_COUNT: usize = 6;
/// Number of accelerometers on the device, numbered from bottom to top.
pub const ACCELEROMETER_COUNT: usize = 2;
/// Number of axes reported by each accelerometer.
pub const AXIS_COUNT: usize = 3;
