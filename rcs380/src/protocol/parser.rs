// rcs380-rs/rcs380/src/protocol/parser.rs

//! Bounds-checked readers over received bytes. Every fixed-offset access in
//! the crate goes through these so a short response yields `InvalidLength`
//! instead of a panic.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a little-endian u16 at given index, with bounds checking.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    let [lo, hi] = array_at::<2>(data, idx)?;
    Ok(u16::from_le_bytes([lo, hi]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Copy `N` bytes starting at `idx` into a fixed-size array.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    out.copy_from_slice(slice_at(data, idx, N)?);
    Ok(out)
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    data.get(idx).copied().ok_or(Error::InvalidLength {
        expected: idx + 1,
        actual: data.len(),
    })
}

/// Parse a fixed-size field (e.g. `Idm`, `Nfcid`) at `start`.
pub fn field_at<'a, T>(data: &'a [u8], start: usize, len: usize) -> Result<T>
where
    T: TryFrom<&'a [u8], Error = Error>,
{
    T::try_from(slice_at(data, start, len)?)
}
