//! Playback control: the state machine between UI actions and the backend.
//!
//! The [`Player`] owns the playlist, the current index and the playing flag,
//! and is the only place backend calls are issued from.

mod controller;
mod time;

pub use controller::*;
pub use time::*;
