//! egui rendering for the main window and the playlist window.
//!
//! Widgets never mutate playback state directly; they return [`Action`]
//! values the app shell applies afterwards.

mod controls;
mod playlist;

pub use controls::*;
pub use playlist::*;
