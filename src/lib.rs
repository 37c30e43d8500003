//! # wildpop
//!
//! A library for editing the compressed population save-archives of
//! wildlife simulation games: add or remove animal records without going
//! through the game engine.
//!
//! The hard part of the job is the splice engine. A reserve file is a
//! zlib-compressed buffer full of fixed-stride record arrays, and every
//! table pointer, length field, and size counter in it is an absolute or
//! relative byte offset. Splicing a 32-byte record into one array means
//! cascading the size delta through every offset that points past the
//! edit, in the right order, before any byte moves.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wildpop::prelude::*;
//!
//! # struct MyParser;
//! # impl StructureProvider for MyParser {
//! #     fn dump(&self, _: &[u8]) -> Result<String> { unimplemented!() }
//! #     fn profile(&self, _: &[u8]) -> Result<StructuralProfile> { unimplemented!() }
//! #     fn arrays(&self, _: &StructuralProfile, _: &[u8])
//! #         -> Result<(Vec<RecordArray>, Vec<RecordArray>)> { unimplemented!() }
//! # }
//! let provider = MyParser; // your structural parser
//! let doe = AnimalRecord {
//!     gender: Gender::Female,
//!     weight: 72.5,
//!     score: 180.0,
//!     great_one: false,
//!     visual_seed: 0xBEEF,
//! };
//!
//! // Add two does to population 3 and write the modded archive.
//! add_animals_to_reserve(
//!     "saves/animal_population_1",
//!     "mods/",
//!     &provider,
//!     3,
//!     &[doe.clone(), doe],
//! )?;
//! # Ok::<(), wildpop::Error>(())
//! ```
//!
//! Structural parsing (locating the arrays inside the buffer) is a
//! collaborator concern: implement [`StructureProvider`] over your parser
//! and the engine takes it from there.

pub mod animal;
pub mod archive;
pub mod error;
pub mod reserve;
pub mod splice;
pub mod structure;

mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::animal::{AnimalRecord, Gender, RECORD_SIZE};
    pub use crate::archive::Payload;
    pub use crate::error::{Error, Result};
    pub use crate::reserve::{
        add_animals_to_reserve, examine_reserve, population_summary,
        remove_animals_from_reserve, PopulationSummary,
    };
    pub use crate::structure::{
        GenderTally, RecordArray, StructuralProfile, StructureProvider,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
