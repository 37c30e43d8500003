//! Offset cascade: re-anchoring arrays after an edit point

use crate::structure::RecordArray;
use crate::utils::write_u32_at;

/// Shift every array physically after the pivot by `delta`.
///
/// An array is affected when its current start offset lies at or beyond
/// `pivot_end` and it is not a placeholder. Its start/end offsets and its
/// relative start offset all move by `delta`, and the new relative start
/// is written back to the array's header pointer field. The pivot itself
/// is never affected (its start precedes its own end); its geometry is
/// maintained by the insert/remove primitive that owns the edit.
///
/// Metadata repair only: no byte in any record range moves here.
pub(crate) fn cascade_arrays(
    body: &mut [u8],
    arrays: &mut [RecordArray],
    pivot_end: usize,
    delta: i64,
) {
    for array in arrays.iter_mut() {
        if array.is_placeholder() || array.start_offset < pivot_end {
            continue;
        }
        array.start_offset = (array.start_offset as i64 + delta) as usize;
        array.end_offset = (array.end_offset as i64 + delta) as usize;
        array.relative_start_offset = (i64::from(array.relative_start_offset) + delta) as u32;
        write_u32_at(body, array.header_pointer_offset, array.relative_start_offset);
    }
}
