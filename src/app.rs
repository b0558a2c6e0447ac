//! Application shell: owns the controller, dispatches UI actions and drives
//! the periodic position poll.

mod model;

pub use model::*;
