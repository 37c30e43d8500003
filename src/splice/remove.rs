//! Removing animal records from population arrays

use super::cascade_arrays;
use crate::animal::{Gender, RECORD_SIZE};
use crate::error::{Error, Result};
use crate::structure::{RecordArray, StructuralProfile};
use crate::utils::shift_u32_at;

/// One array's contribution to a removal plan.
struct Removal {
    array: usize,
    count: u32,
}

/// Remove `count` animals of `gender` from the arrays of `population`.
///
/// The plan is accumulated greedily over eligible arrays in descending
/// start-offset order; no array ever gives up its last animal of the
/// requested gender. If the plan comes up short the operation fails with
/// [`Error::InsufficientSubjects`] before a single byte of the buffer has
/// been touched.
///
/// A zero `count` is a no-op.
pub fn remove_animals(
    body: &mut Vec<u8>,
    profile: &StructuralProfile,
    arrays: &mut [RecordArray],
    population: u32,
    count: u32,
    gender: Gender,
) -> Result<()> {
    if count == 0 {
        return Ok(());
    }

    let mut eligible: Vec<usize> = (0..arrays.len())
        .filter(|&i| {
            arrays[i].population_index == Some(population)
                && arrays[i].gender_tally(gender).count > 0
        })
        .collect();
    eligible.sort_by(|&a, &b| arrays[b].start_offset.cmp(&arrays[a].start_offset));

    // Planning pass: reads only, so a shortfall aborts with the buffer
    // byte-for-byte intact.
    let mut plan = Vec::new();
    let mut remaining = count;
    for &i in &eligible {
        if remaining == 0 {
            break;
        }
        let spare = arrays[i].gender_tally(gender).count.saturating_sub(1);
        let take = spare.min(remaining);
        if take > 0 {
            plan.push(Removal { array: i, count: take });
            remaining -= take;
        }
    }
    if remaining > 0 {
        return Err(Error::InsufficientSubjects {
            requested: count,
            available: count - remaining,
        });
    }

    tracing::debug!(
        population,
        count,
        gender = gender.as_str(),
        arrays = plan.len(),
        "removing animals"
    );

    // Re-anchor everything after each edited array before bytes move.
    for removal in &plan {
        let pivot_end = arrays[removal.array].end_offset;
        cascade_arrays(
            body,
            arrays,
            pivot_end,
            -((RECORD_SIZE as i64) * i64::from(removal.count)),
        );
    }
    profile.apply_size_delta(body, -((RECORD_SIZE as i64) * i64::from(count)));

    // Delete highest record indices first so the offsets of lower,
    // not-yet-deleted records in the same array stay valid.
    for removal in &plan {
        let array = &mut arrays[removal.array];
        let mut indices = array.gender_tally(gender).indices.clone();
        indices.sort_unstable();
        for &record_index in indices.iter().rev().take(removal.count as usize) {
            let at = array.original_record_offset(record_index);
            body.drain(at..at + RECORD_SIZE);
            shift_u32_at(body, array.length_field_offset, -1);

            array.record_count -= 1;
            array.end_offset -= RECORD_SIZE;
        }
    }

    Ok(())
}
