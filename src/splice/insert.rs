//! Inserting animal records into population arrays

use super::cascade_arrays;
use crate::animal::{AnimalRecord, RECORD_SIZE};
use crate::structure::{RecordArray, StructuralProfile};
use crate::utils::shift_u32_at;

/// Splice `animals` into the arrays of `population`, spreading them as
/// evenly as possible across every array the population owns.
///
/// `arrays` must be the full cascade target set (population arrays plus
/// all other arrays in the region). Eligible arrays are processed from
/// the highest start offset downward: an insertion into one array then
/// never invalidates the still-pending original end boundary of an array
/// at a lower offset, and the cascade transfers the shift to arrays
/// already processed without revisiting them.
///
/// Empty `animals` is a no-op. A population with no matching arrays is a
/// caller error; the buffer is left untouched in that case.
pub fn insert_animals(
    body: &mut Vec<u8>,
    profile: &StructuralProfile,
    arrays: &mut [RecordArray],
    population: u32,
    animals: &[AnimalRecord],
) {
    if animals.is_empty() {
        return;
    }

    let mut eligible: Vec<usize> = (0..arrays.len())
        .filter(|&i| arrays[i].population_index == Some(population))
        .collect();
    if eligible.is_empty() {
        tracing::warn!(population, "no arrays for population, nothing inserted");
        return;
    }
    eligible.sort_by(|&a, &b| arrays[b].start_offset.cmp(&arrays[a].start_offset));

    // The global size fields track totals over the whole region; they
    // move once regardless of which arrays receive the records.
    let total_size = (RECORD_SIZE * animals.len()) as i64;
    profile.apply_size_delta(body, total_size);

    tracing::debug!(
        population,
        count = animals.len(),
        arrays = eligible.len(),
        "inserting animals"
    );

    let per_array = animals.len().div_ceil(eligible.len());
    for (chunk, &target) in animals.chunks(per_array).zip(&eligible) {
        for animal in chunk {
            let pivot_end = arrays[target].end_offset;
            cascade_arrays(body, arrays, pivot_end, RECORD_SIZE as i64);

            // Splice at the end boundary recorded at discovery time; the
            // descending processing order keeps it valid.
            let at = arrays[target].original_end_offset;
            body.splice(at..at, animal.to_bytes());
            shift_u32_at(body, arrays[target].length_field_offset, 1);

            arrays[target].record_count += 1;
            arrays[target].end_offset += RECORD_SIZE;
        }
    }
}
