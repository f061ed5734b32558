//! Stream codec for Keyfold.
//!
//! Reads the count-prefixed pair format -- a count `m`, then `m` pairs of
//! whitespace-separated `key value` integers, twice over -- and writes
//! merged pairs back out one per line.
//!
//! Malformed input is rejected here with [`InputError`]; nothing malformed
//! reaches the merge engine.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{InputError, InputResult};
pub use reader::read_pair_streams;
pub use writer::write_pairs;
