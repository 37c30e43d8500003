//! Types for compressed reserve containers

/// Size of the outer (compressed-file) header in bytes.
pub const OUTER_HEADER_SIZE: usize = 32;

/// Size of the inner header preceding the structural body, in bytes.
pub const INNER_HEADER_SIZE: usize = 5;

/// Byte ranges inside the outer header holding the decompressed size.
/// The format stores the same little-endian u32 twice.
pub(crate) const SIZE_FIELD_OFFSETS: [usize; 2] = [8, 24];

/// An editable, decompressed reserve file.
///
/// Owned exclusively by one splice operation at a time; rebuilt from disk
/// on every load and discarded after save.
#[derive(Debug, Clone)]
pub struct Payload {
    /// Source file name, reused as the output file name so a mod output
    /// can shadow the original from a different search root.
    pub(crate) basename: String,
    /// Mutable copy of the archive's 32-byte outer header.
    pub(crate) outer_header: [u8; OUTER_HEADER_SIZE],
    /// Opaque sub-header preceding the body; passed through unchanged.
    pub(crate) inner_header: [u8; INNER_HEADER_SIZE],
    /// The structural payload that profile and array offsets index into.
    pub body: Vec<u8>,
    /// Decompressed size recorded when the file was decoded.
    pub(crate) original_size: u32,
}

impl Payload {
    /// Source file name, reused for the written output.
    #[must_use]
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// Current decompressed size: inner header plus body.
    #[must_use]
    pub fn decompressed_size(&self) -> u32 {
        (INNER_HEADER_SIZE + self.body.len()) as u32
    }

    /// The size currently recorded in both outer-header size fields.
    #[must_use]
    pub fn recorded_size(&self) -> u32 {
        let off = SIZE_FIELD_OFFSETS[0];
        u32::from_le_bytes(self.outer_header[off..off + 4].try_into().unwrap())
    }
}
