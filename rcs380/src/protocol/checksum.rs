// rcs380-rs/rcs380/src/protocol/checksum.rs

/// Compute the Length Checksum (LCS) over the two little-endian LEN bytes.
/// LCS = 0x100 - (len_low + len_high) (mod 256)
pub fn lcs(len: u16) -> u8 {
    let [lo, hi] = len.to_le_bytes();
    0u8.wrapping_sub(lo.wrapping_add(hi))
}

/// Compute the Data Checksum (DCS) for a frame.
/// The direction byte is part of the checksummed data:
/// DCS = 0x100 - ((direction + sum(payload)) & 0xff)
pub fn checksum(direction: u8, payload: &[u8]) -> u8 {
    let sum = payload.iter().fold(direction, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
