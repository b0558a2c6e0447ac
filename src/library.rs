//! Track model and folder import.
//!
//! A `Track` is a playable file identified by its path; `scan_folder` lists
//! the immediate entries of a directory and keeps the ones whose extension
//! matches the configured audio extensions.

mod model;
mod scan;

pub use model::*;
pub use scan::*;
