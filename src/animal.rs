//! Animal record model
//!
//! A population array stores one fixed-stride record per animal. The
//! record is 32 bytes on the wire: the fields the editor cares about in
//! the first 20 bytes, followed by 12 reserved bytes that are written as
//! zero and ignored when reading.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

/// On-wire size of one animal record, in bytes.
pub const RECORD_SIZE: usize = 32;

const GENDER_MALE: u32 = 1;
const GENDER_FEMALE: u32 = 2;

/// Gender of an animal, as stored in its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a gender from its on-wire tag. Unknown tags read as male,
    /// matching how the game tolerates stale seeds.
    #[must_use]
    pub fn from_tag(tag: u32) -> Self {
        if tag == GENDER_FEMALE {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    /// On-wire tag for this gender.
    #[must_use]
    pub fn to_tag(self) -> u32 {
        match self {
            Gender::Male => GENDER_MALE,
            Gender::Female => GENDER_FEMALE,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// One animal as spliced into or out of a population array.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalRecord {
    /// Gender of the animal.
    pub gender: Gender,
    /// Body weight in kilograms.
    pub weight: f32,
    /// Trophy score.
    pub score: f32,
    /// Whether this is a "great one" rare spawn.
    pub great_one: bool,
    /// Seed driving the animal's visual variation (fur pattern).
    pub visual_seed: u32,
}

impl AnimalRecord {
    /// Serialize to the fixed 32-byte wire form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut buf = Vec::with_capacity(RECORD_SIZE);
        // Writes to a Vec cannot fail.
        buf.write_u32::<LittleEndian>(self.gender.to_tag()).unwrap();
        buf.write_f32::<LittleEndian>(self.weight).unwrap();
        buf.write_f32::<LittleEndian>(self.score).unwrap();
        buf.write_u32::<LittleEndian>(u32::from(self.great_one))
            .unwrap();
        buf.write_u32::<LittleEndian>(self.visual_seed).unwrap();
        buf.resize(RECORD_SIZE, 0);
        buf.try_into().expect("record is exactly 32 bytes")
    }

    /// Deserialize from a 32-byte record slice.
    ///
    /// # Panics
    /// Panics if `bytes` is shorter than [`RECORD_SIZE`].
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut cursor = Cursor::new(&bytes[..RECORD_SIZE]);
        // Reads within the fixed 32-byte window cannot fail.
        let gender = Gender::from_tag(cursor.read_u32::<LittleEndian>().unwrap());
        let weight = cursor.read_f32::<LittleEndian>().unwrap();
        let score = cursor.read_f32::<LittleEndian>().unwrap();
        let great_one = cursor.read_u32::<LittleEndian>().unwrap() != 0;
        let visual_seed = cursor.read_u32::<LittleEndian>().unwrap();

        Self {
            gender,
            weight,
            score,
            great_one,
            visual_seed,
        }
    }
}
