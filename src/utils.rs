//! Little-endian field helpers
//!
//! Every structural pointer, length field, and size counter in a reserve
//! body is a 4-byte little-endian integer at a known absolute offset.

/// Read the u32 stored at `offset`.
pub(crate) fn read_u32_at(body: &[u8], offset: usize) -> u32 {
    let bytes: [u8; 4] = body[offset..offset + 4]
        .try_into()
        .expect("slice of length 4");
    u32::from_le_bytes(bytes)
}

/// Write `value` at `offset`, overwriting the 4 bytes there.
pub(crate) fn write_u32_at(body: &mut [u8], offset: usize, value: u32) {
    body[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Add a signed delta to the u32 field at `offset` and write it back.
pub(crate) fn shift_u32_at(body: &mut [u8], offset: usize, delta: i64) {
    let shifted = (i64::from(read_u32_at(body, offset)) + delta) as u32;
    write_u32_at(body, offset, shifted);
}
