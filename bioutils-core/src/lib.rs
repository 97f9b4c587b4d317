//! # Core file utilities for bioutils
//!
//! Small helpers shared by the other bioutils crates: opening plain or gzipped
//! files behind one reader type, unpacking gzipped files to an explicit location,
//! and a couple of path conveniences.
//!
pub mod consts;
pub mod utils;

pub use utils::*;
