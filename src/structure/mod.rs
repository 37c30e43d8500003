//! Structural collaborator seam
//!
//! Locating the size-dependent fields and record arrays inside a reserve
//! body requires a full structural parser for the archive grammar. That
//! parser lives outside this crate; the splice engine only needs the
//! lookups it produces. [`StructureProvider`] is the seam: any
//! implementation that can dump, profile, and scan a body plugs in.

mod arrays;
mod profile;

pub use arrays::{GenderTally, RecordArray};
pub use profile::StructuralProfile;

use crate::error::Result;

/// Capability contract for the external structural parser.
///
/// Implementations surface parse failures as
/// [`Error::CorruptArchive`](crate::Error::CorruptArchive). Profile and
/// array discovery are assumed to succeed whenever parsing succeeds.
pub trait StructureProvider {
    /// Produce a diagnostic text dump of the parsed body.
    fn dump(&self, body: &[u8]) -> Result<String>;

    /// Locate the size-dependent structural fields of the body.
    fn profile(&self, body: &[u8]) -> Result<StructuralProfile>;

    /// Discover the record arrays the profile points at.
    ///
    /// Returns `(population_arrays, other_arrays)`: arrays holding animal
    /// records, and every other fixed-stride array in the same region.
    /// Both collections jointly form the cascade target set, ordered by
    /// ascending start offset within each collection.
    fn arrays(
        &self,
        profile: &StructuralProfile,
        body: &[u8],
    ) -> Result<(Vec<RecordArray>, Vec<RecordArray>)>;
}
