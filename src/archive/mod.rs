//! Compressed container handling
//!
//! A reserve population file on disk is a 32-byte outer header followed by
//! a zlib-compressed stream. Inflating the stream yields a 5-byte inner
//! header and the structural body that all splicing mutates. This module
//! round-trips between the two forms and keeps the outer header's
//! redundant size fields consistent with the body.

mod codec;
mod types;

pub use types::{Payload, INNER_HEADER_SIZE, OUTER_HEADER_SIZE};
