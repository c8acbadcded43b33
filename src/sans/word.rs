//! Little-endian signed 16-bit words.

use zerocopy::byteorder::little_endian::I16;

/// Decode a buffer into little-endian signed 16-bit integers.
///
/// Yields one value per pair of bytes. A trailing odd byte is ignored, so an
/// empty or single-byte buffer yields nothing.
pub fn decode(r: &[u8]) -> impl ExactSizeIterator<Item = i16> + '_ {
    r.chunks_exact(2).map(|pair| {
        let word: I16 = zerocopy::transmute!([pair[0], pair[1]]);
        word.get()
    })
}

/// Collect exactly `N` values, truncating extras and padding with `filler`.
pub fn resize<const N: usize>(values: impl IntoIterator<Item = i16>, filler: i16) -> [i16; N] {
    let mut out = [filler; N];

    out.iter_mut()
        .zip(values)
        .for_each(|(slot, value)| *slot = value);

    out
}

