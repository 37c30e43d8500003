//! Synthetic reserve fixtures
//!
//! The production structural parser is an external collaborator, so the
//! tests bring their own: a tiny fixed layout that exercises every field
//! the splice engine cascades.
//!
//! Body layout:
//!
//! ```text
//! [ 0..16)  four global size-dependent fields
//! [16..32)  instance region header (array count at +4, byte counter at +12)
//! [32..  )  one 16-byte header per array: rel_start, count, population
//! data_base = 32 + 16 * n_arrays; records follow, contiguous
//! ```

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::ZlibEncoder;
use flate2::Compression;

use wildpop::prelude::*;

pub const INSTANCE_PTR_OFFSET: usize = 0;
pub const TYPEDEF_PTR_OFFSET: usize = 4;
pub const NAMETABLE_PTR_OFFSET: usize = 8;
pub const TOTAL_SIZE_OFFSET: usize = 12;
pub const INSTANCE_HEADER_START: usize = 16;
pub const ARRAY_COUNT_OFFSET: usize = INSTANCE_HEADER_START + 4;
pub const INSTANCE_COUNTER_OFFSET: usize = INSTANCE_HEADER_START + 12;
pub const ARRAY_HEADERS_START: usize = 32;
pub const ARRAY_HEADER_SIZE: usize = 16;

/// Population tag marking a structural (non-animal) array.
const NO_POPULATION: u32 = u32::MAX;

fn read_u32(body: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(body[offset..offset + 4].try_into().unwrap())
}

fn write_u32(body: &mut [u8], offset: usize, value: u32) {
    body[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

pub fn animal(gender: Gender, seed: u32) -> AnimalRecord {
    AnimalRecord {
        gender,
        weight: 80.0,
        score: 150.0,
        great_one: false,
        visual_seed: seed,
    }
}

/// One array in the synthetic reserve.
pub enum FixtureArray {
    /// A population array holding real animal records.
    Population { population: u32, genders: Vec<Gender> },
    /// A structural array of opaque 32-byte records.
    Other { records: usize },
}

impl FixtureArray {
    fn record_count(&self) -> usize {
        match self {
            FixtureArray::Population { genders, .. } => genders.len(),
            FixtureArray::Other { records } => *records,
        }
    }

    fn population_tag(&self) -> u32 {
        match self {
            FixtureArray::Population { population, .. } => *population,
            FixtureArray::Other { .. } => NO_POPULATION,
        }
    }
}

/// Route the engine's tracing output through the test harness so it
/// shows up with `--nocapture`. Safe to call from every test; only the
/// first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Builder for a synthetic reserve body/archive.
pub struct Fixture {
    pub arrays: Vec<FixtureArray>,
}

impl Fixture {
    pub fn new(arrays: Vec<FixtureArray>) -> Self {
        init_tracing();
        Self { arrays }
    }

    /// Assemble the structural body.
    pub fn body(&self) -> Vec<u8> {
        let n = self.arrays.len();
        let data_base = ARRAY_HEADERS_START + n * ARRAY_HEADER_SIZE;
        let data_bytes: usize = self.arrays.iter().map(|a| a.record_count() * RECORD_SIZE).sum();

        let mut body = vec![0u8; data_base];
        write_u32(&mut body, ARRAY_COUNT_OFFSET, n as u32);
        write_u32(&mut body, INSTANCE_COUNTER_OFFSET, data_bytes as u32);

        // Arbitrary but distinct pointer values; the cascade only ever
        // adds deltas to them.
        write_u32(&mut body, INSTANCE_PTR_OFFSET, 0x1000);
        write_u32(&mut body, TYPEDEF_PTR_OFFSET, 0x2000);
        write_u32(&mut body, NAMETABLE_PTR_OFFSET, 0x3000);

        let mut rel = 0u32;
        for (j, array) in self.arrays.iter().enumerate() {
            let header = ARRAY_HEADERS_START + j * ARRAY_HEADER_SIZE;
            write_u32(&mut body, header, rel);
            write_u32(&mut body, header + 4, array.record_count() as u32);
            write_u32(&mut body, header + 8, array.population_tag());

            match array {
                FixtureArray::Population { genders, .. } => {
                    for (i, &gender) in genders.iter().enumerate() {
                        body.extend_from_slice(&animal(gender, (j * 100 + i) as u32).to_bytes());
                    }
                }
                FixtureArray::Other { records } => {
                    let grown = body.len() + records * RECORD_SIZE;
                    body.resize(grown, 0xEE);
                }
            }
            rel += (array.record_count() * RECORD_SIZE) as u32;
        }

        let total = body.len() as u32;
        write_u32(&mut body, TOTAL_SIZE_OFFSET, total);
        body
    }

    /// Wrap the body into a full compressed archive (outer header, zlib
    /// stream, 5-byte inner header).
    pub fn archive_bytes(&self) -> Vec<u8> {
        let mut decompressed = vec![0xA5; 5];
        decompressed.extend_from_slice(&self.body());

        let mut outer = [0u8; 32];
        outer[..4].copy_from_slice(b"POP\0");
        let size = decompressed.len() as u32;
        outer[8..12].copy_from_slice(&size.to_le_bytes());
        outer[24..28].copy_from_slice(&size.to_le_bytes());

        let mut encoder = ZlibEncoder::new(outer.to_vec(), Compression::default());
        encoder.write_all(&decompressed).unwrap();
        encoder.finish().unwrap()
    }

    /// Write the archive to `dir/animal_population_1` and return the path.
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("animal_population_1");
        std::fs::write(&path, self.archive_bytes()).unwrap();
        path
    }
}

/// A [`StructureProvider`] over the fixture layout.
pub struct FixtureProvider;

impl StructureProvider for FixtureProvider {
    fn dump(&self, body: &[u8]) -> wildpop::Result<String> {
        let n = read_u32(body, ARRAY_COUNT_OFFSET) as usize;
        let mut out = format!("fixture reserve: {n} arrays\n");
        for j in 0..n {
            let header = ARRAY_HEADERS_START + j * ARRAY_HEADER_SIZE;
            out.push_str(&format!(
                "array {j}: rel_start={} count={} population={:#x}\n",
                read_u32(body, header),
                read_u32(body, header + 4),
                read_u32(body, header + 8),
            ));
        }
        Ok(out)
    }

    fn profile(&self, _body: &[u8]) -> wildpop::Result<StructuralProfile> {
        Ok(StructuralProfile {
            instance_pointer_offset: INSTANCE_PTR_OFFSET,
            typedef_pointer_offset: TYPEDEF_PTR_OFFSET,
            nametable_pointer_offset: NAMETABLE_PTR_OFFSET,
            total_size_offset: TOTAL_SIZE_OFFSET,
            instance_header_start: INSTANCE_HEADER_START,
        })
    }

    fn arrays(
        &self,
        _profile: &StructuralProfile,
        body: &[u8],
    ) -> wildpop::Result<(Vec<RecordArray>, Vec<RecordArray>)> {
        let n = read_u32(body, ARRAY_COUNT_OFFSET) as usize;
        let data_base = ARRAY_HEADERS_START + n * ARRAY_HEADER_SIZE;

        let mut population_arrays = Vec::new();
        let mut other_arrays = Vec::new();

        for j in 0..n {
            let header = ARRAY_HEADERS_START + j * ARRAY_HEADER_SIZE;
            let rel = read_u32(body, header);
            let count = read_u32(body, header + 4);
            let population = read_u32(body, header + 8);

            let start = data_base + rel as usize;
            let end = start + count as usize * RECORD_SIZE;

            let mut males = GenderTally::default();
            let mut females = GenderTally::default();
            if population != NO_POPULATION {
                for i in 0..count {
                    let at = start + i as usize * RECORD_SIZE;
                    let record = AnimalRecord::from_bytes(&body[at..at + RECORD_SIZE]);
                    let tally = match record.gender {
                        Gender::Male => &mut males,
                        Gender::Female => &mut females,
                    };
                    tally.count += 1;
                    tally.indices.push(i);
                }
            }

            let array = RecordArray {
                population_index: (population != NO_POPULATION).then_some(population),
                record_count: count,
                length_field_offset: header + 4,
                start_offset: start,
                end_offset: end,
                original_start_offset: start,
                original_end_offset: end,
                relative_start_offset: rel,
                header_pointer_offset: header,
                males,
                females,
            };
            if array.population_index.is_some() {
                population_arrays.push(array);
            } else {
                other_arrays.push(array);
            }
        }

        Ok((population_arrays, other_arrays))
    }
}

/// Assert that the arrays tile their region: ascending, non-overlapping,
/// each spanning exactly `record_count * RECORD_SIZE` bytes.
pub fn assert_tiling(arrays: &[RecordArray]) {
    let mut sorted: Vec<&RecordArray> = arrays.iter().filter(|a| !a.is_placeholder()).collect();
    sorted.sort_by_key(|a| a.start_offset);
    let mut previous_end = 0;
    for array in sorted {
        let range = array.record_range();
        assert_eq!(
            range.len(),
            array.record_count as usize * RECORD_SIZE,
            "array span must match record count"
        );
        assert!(range.start >= previous_end, "array ranges must not overlap");
        previous_end = range.end;
    }
}
