//! Battery level.

use super::anomaly::{Channel, LengthAnomaly};

/// Decode a battery level buffer into a percentage.
///
/// Any buffer other than a single byte decodes to 0.
pub fn decode(r: &[u8]) -> (u8, Option<LengthAnomaly>) {
    match *r {
        [level] => (level, None),
        _ => (0, Channel::BatteryLevel.check(r.len())),
    }
}
