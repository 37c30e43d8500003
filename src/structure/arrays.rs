//! Record array descriptors

use std::ops::Range;

use crate::animal::{Gender, RECORD_SIZE};

/// Per-gender bookkeeping for one array: how many records carry the
/// gender, and which record indices they are (ascending).
#[derive(Debug, Clone, Default)]
pub struct GenderTally {
    /// Number of records with this gender.
    pub count: u32,
    /// Record indices with this gender, ascending.
    pub indices: Vec<u32>,
}

/// Descriptor of one fixed-stride array of 32-byte records in the body.
///
/// Derived from a fresh scan on every splice call and discarded after;
/// current offsets are re-anchored by the cascade before any byte moves,
/// while the `original_*` offsets stay frozen at their discovery values
/// and mark where splices physically happen.
#[derive(Debug, Clone)]
pub struct RecordArray {
    /// Which population (species slot) the array belongs to, or `None`
    /// for structural arrays that hold no animal records.
    pub population_index: Option<u32>,
    /// Number of records; mirrors the on-disk length field.
    pub record_count: u32,
    /// Absolute offset of the 4-byte record count.
    pub length_field_offset: usize,
    /// Absolute start of the record range (current, cascaded).
    pub start_offset: usize,
    /// Absolute end of the record range (current, cascaded).
    pub end_offset: usize,
    /// Start offset frozen at discovery time.
    pub original_start_offset: usize,
    /// End offset frozen at discovery time.
    pub original_end_offset: usize,
    /// Value stored at the array's own header pointer: start offset
    /// relative to the instance-table base. Kept in sync with
    /// `start_offset` by the cascade.
    pub relative_start_offset: u32,
    /// Absolute offset of the 4-byte field holding `relative_start_offset`.
    pub header_pointer_offset: usize,
    /// Records tallied as male.
    pub males: GenderTally,
    /// Records tallied as female.
    pub females: GenderTally,
}

impl RecordArray {
    /// The current byte range holding this array's records.
    #[must_use]
    pub fn record_range(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }

    /// A zero start offset denotes a placeholder descriptor with no
    /// backing storage; the cascade skips these.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.start_offset == 0
    }

    /// Tally for one gender.
    #[must_use]
    pub fn gender_tally(&self, gender: Gender) -> &GenderTally {
        match gender {
            Gender::Male => &self.males,
            Gender::Female => &self.females,
        }
    }

    /// Absolute offset of record `index` within the original (discovery
    /// time) layout.
    #[must_use]
    pub fn original_record_offset(&self, index: u32) -> usize {
        self.original_start_offset + index as usize * RECORD_SIZE
    }
}
