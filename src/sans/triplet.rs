//! Packed accelerometer triplets.
//!
//! Each accelerometer reading arrives as a 4-byte word holding three signed
//! 10-bit axis values, most significant bits first:
//!
//! ```text
//! byte:  |    0     |    1     |    2     |    3     |
//! bits:  |xxxxxxxx  |xx yyyyyy |yyyy zzzz |zzzzzz -- |
//! ```

use tartan_bitfield::bitfield;
use zerocopy::byteorder::big_endian::U32;

/// Accelerometer reading in units of g/256.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Acceleration {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Acceleration {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Component-wise difference, wrapping on overflow.
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self {
            x: self.x.wrapping_sub(rhs.x),
            y: self.y.wrapping_sub(rhs.y),
            z: self.z.wrapping_sub(rhs.z),
        }
    }
}

/// Decode a packed 4-byte word into a three-axis reading.
pub fn decode(r: [u8; 4]) -> Acceleration {
    bitfield! {
        struct PackedWord(u32) {
            [2..12] z: u16,
            [12..22] y: u16,
            [22..32] x: u16,
        }
    }

    let word: U32 = zerocopy::transmute!(r);
    let word = PackedWord(word.get());

    Acceleration {
        x: extend_sign(word.x()),
        y: extend_sign(word.y()),
        z: extend_sign(word.z()),
    }
}

/// Convert a 10-bit two's-complement field to a signed 16-bit integer.
///
/// Bits above bit 9 of the input are ignored.
pub const fn extend_sign(n: u16) -> i16 {
    const SIGN: u16 = 1 << 9;

    let n = (n & 0x3FF) as i16;

    if n as u16 & SIGN != 0 { n | (-1 << 9) } else { n }
}
