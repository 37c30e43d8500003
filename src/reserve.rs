//! High-level reserve operations
//!
//! File-to-file entry points: open a compressed reserve archive, let the
//! structural collaborator locate its arrays, splice, and write the
//! result next to nothing the game owns. The output file keeps the source
//! base name so a mod search root can shadow the original.

use std::path::{Path, PathBuf};

use crate::animal::{AnimalRecord, Gender};
use crate::archive::Payload;
use crate::error::Result;
use crate::splice;
use crate::structure::{RecordArray, StructureProvider};

/// Per-array population counts, as shown to a user browsing a reserve.
#[derive(Debug, Clone)]
pub struct PopulationSummary {
    /// Population slot the array belongs to.
    pub population_index: u32,
    /// Total records in the array.
    pub record_count: u32,
    /// Records tallied as male.
    pub males: u32,
    /// Records tallied as female.
    pub females: u32,
}

/// Add `animals` to `population` in the archive at `source`, writing the
/// modded archive into `destination`.
///
/// Returns the path written, or `Ok(None)` when `animals` is empty (no
/// file is produced for a no-op).
pub fn add_animals_to_reserve<P: StructureProvider>(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    provider: &P,
    population: u32,
    animals: &[AnimalRecord],
) -> Result<Option<PathBuf>> {
    if animals.is_empty() {
        return Ok(None);
    }

    let mut payload = Payload::open(source)?;
    let profile = provider.profile(&payload.body)?;
    let mut arrays = combined_arrays(provider, &profile, &payload.body)?;

    splice::insert_animals(&mut payload.body, &profile, &mut arrays, population, animals);

    payload.save(destination).map(Some)
}

/// Remove `count` animals of `gender` from `population` in the archive at
/// `source`, writing the modded archive into `destination`.
///
/// Returns the path written, or `Ok(None)` when `count` is zero. Fails
/// with [`Error::InsufficientSubjects`](crate::Error::InsufficientSubjects)
/// without writing anything if the population cannot spare that many.
pub fn remove_animals_from_reserve<P: StructureProvider>(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    provider: &P,
    population: u32,
    count: u32,
    gender: Gender,
) -> Result<Option<PathBuf>> {
    if count == 0 {
        return Ok(None);
    }

    let mut payload = Payload::open(source)?;
    let profile = provider.profile(&payload.body)?;
    let mut arrays = combined_arrays(provider, &profile, &payload.body)?;

    splice::remove_animals(
        &mut payload.body,
        &profile,
        &mut arrays,
        population,
        count,
        gender,
    )?;

    payload.save(destination).map(Some)
}

/// Produce the collaborator's diagnostic text dump for the archive at
/// `source`. Returned as a value; persisting it is the caller's call.
pub fn examine_reserve<P: StructureProvider>(
    source: impl AsRef<Path>,
    provider: &P,
) -> Result<String> {
    let payload = Payload::open(source)?;
    provider.dump(&payload.body)
}

/// Summarize the population arrays of the archive at `source`.
pub fn population_summary<P: StructureProvider>(
    source: impl AsRef<Path>,
    provider: &P,
) -> Result<Vec<PopulationSummary>> {
    let payload = Payload::open(source)?;
    let profile = provider.profile(&payload.body)?;
    let (animal_arrays, _) = provider.arrays(&profile, &payload.body)?;

    Ok(animal_arrays
        .iter()
        .filter_map(|array| {
            array.population_index.map(|population_index| PopulationSummary {
                population_index,
                record_count: array.record_count,
                males: array.males.count,
                females: array.females.count,
            })
        })
        .collect())
}

/// Population arrays and other structural arrays merged into the single
/// cascade target set the splice engine works over.
fn combined_arrays<P: StructureProvider>(
    provider: &P,
    profile: &crate::structure::StructuralProfile,
    body: &[u8],
) -> Result<Vec<RecordArray>> {
    let (animal_arrays, other_arrays) = provider.arrays(profile, body)?;
    Ok(animal_arrays.into_iter().chain(other_arrays).collect())
}
