//! Structural profile: the size-dependent fields of a reserve body

use crate::utils::shift_u32_at;

/// Absolute byte offsets of every field in the body whose stored value
/// depends on the total payload size, paired with the values read at
/// discovery time.
///
/// Rebuilt from a fresh parse on every splice call; stale the moment the
/// body changes size.
#[derive(Debug, Clone)]
pub struct StructuralProfile {
    /// Offset of the field holding the instance-table pointer.
    pub instance_pointer_offset: usize,
    /// Offset of the field holding the type-table pointer.
    pub typedef_pointer_offset: usize,
    /// Offset of the field holding the name-table pointer.
    pub nametable_pointer_offset: usize,
    /// Offset of the total-size field.
    pub total_size_offset: usize,
    /// Start of the instance/array region header. The running byte total
    /// of the region's content sits 12 bytes in.
    pub instance_header_start: usize,
}

impl StructuralProfile {
    /// Offset of the instance-region byte counter.
    #[must_use]
    pub fn instance_size_offset(&self) -> usize {
        self.instance_header_start + 12
    }

    /// Add `delta` to every size-dependent field and write each back.
    ///
    /// These fields represent totals over the whole instance region, so
    /// they move unconditionally regardless of which array was edited.
    /// Metadata only; no bytes are moved.
    pub fn apply_size_delta(&self, body: &mut [u8], delta: i64) {
        for offset in [
            self.instance_pointer_offset,
            self.typedef_pointer_offset,
            self.nametable_pointer_offset,
            self.total_size_offset,
            self.instance_size_offset(),
        ] {
            shift_u32_at(body, offset, delta);
        }
    }
}
