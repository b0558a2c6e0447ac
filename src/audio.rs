//! Audio backend seam and its `rodio` implementation.
//!
//! The player controller talks to sound output exclusively through the
//! [`AudioBackend`] trait, so playback logic can be exercised without an
//! audio device.

mod backend;
mod output;

pub use backend::*;
pub use output::*;
