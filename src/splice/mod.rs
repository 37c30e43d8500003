//! Splice engine
//!
//! The core of the crate: fixed-stride records are inserted into or
//! removed from arrays embedded in the body, and every structural offset
//! that depends on where those bytes sit is repaired in lockstep. The
//! discipline is strict: for each edit, all offset metadata is cascaded
//! first, then bytes move, so a lookup made between the two steps never
//! sees a half-updated buffer.

mod cascade;
mod insert;
mod remove;

pub(crate) use cascade::cascade_arrays;
pub use insert::insert_animals;
pub use remove::remove_animals;
