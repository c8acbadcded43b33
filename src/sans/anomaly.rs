//! Logical channels and recoverable length anomalies.

use thiserror::Error;

/// A logical channel the device delivers buffers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    BatteryLevel,
    SensorOffsets,
    SensorCoefficients,
    AccelerometerOffsets,
    RealTimeData,
}

impl Channel {
    /// The length in bytes of a well-formed buffer on this channel.
    pub const fn nominal_len(self) -> usize {
        match self {
            Self::BatteryLevel => 1,
            Self::SensorOffsets | Self::SensorCoefficients | Self::AccelerometerOffsets => 12,
            Self::RealTimeData => 20,
        }
    }

    pub(crate) fn check(self, found: usize) -> Option<LengthAnomaly> {
        let expected = self.nominal_len();

        (found != expected).then_some(LengthAnomaly {
            channel: self,
            expected,
            found,
        })
    }
}

/// A buffer whose length differed from its channel's nominal length.
///
/// Not fatal. The buffer was still decoded into a full, correctly shaped
/// result by padding or truncating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{channel:?} buffer is {found} bytes instead of {expected}.")]
pub struct LengthAnomaly {
    pub channel: Channel,
    pub expected: usize,
    pub found: usize,
}
