//! Lock-guarded decoder for concurrent notification callbacks.
//!
//! _Requires Cargo feature `std`._

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::sans::{
    anomaly::Channel,
    calibration::{Calibration, CalibrationVector},
    real_time::Posture,
};

use super::{Decoder, FromNotifications};

extern crate std;

/// A [`Decoder`] behind a mutex, for transports delivering each channel from
/// its own callback or thread.
///
/// Each calibration update replaces a whole vector while holding the lock, so
/// a real-time decode never observes a partially written vector.
#[derive(Debug, Default)]
pub struct SharedDecoder(Mutex<Decoder>);

impl SharedDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calibration(calibration: Calibration) -> Self {
        Self(Mutex::new(Decoder::with_calibration(calibration)))
    }

    /// A copy of the current calibration state.
    pub fn calibration(&self) -> Calibration {
        *self.lock().calibration()
    }

    /// See [`Decoder::decode`].
    pub fn decode(&self, channel: Channel, r: &[u8], o: &mut impl FromNotifications) {
        self.lock().decode(channel, r, o);
    }

    /// See [`Decoder::set_calibration`].
    pub fn set_calibration(&self, vector: CalibrationVector, r: &[u8]) {
        self.lock().set_calibration(vector, r);
    }

    pub fn decode_battery_level(&self, r: &[u8]) -> u8 {
        self.lock().decode_battery_level(r)
    }

    pub fn decode_real_time_data(&self, r: &[u8]) -> Posture {
        self.lock().decode_real_time_data(r)
    }

    pub fn into_inner(self) -> Decoder {
        self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // A panicking holder cannot leave a vector half-written, so the state
    // behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Decoder> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Decoder> for SharedDecoder {
    fn from(decoder: Decoder) -> Self {
        Self(Mutex::new(decoder))
    }
}
