//! The backend contract used by the player controller.
//!
//! Every interaction that can fail returns a named [`AudioError`] instead of
//! being swallowed inside the backend; the controller decides which failures
//! to ignore.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    /// No usable audio output device could be opened.
    #[error("no audio output device available: {0}")]
    NoOutput(String),
    /// The file could not be opened for playback.
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file was opened but the decoder rejected it.
    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    /// The backend refused to seek (unsupported format or position).
    #[error("seek rejected: {0}")]
    Seek(String),
    /// The duration probe could not read the file's audio properties.
    #[error("could not probe {path}: {reason}")]
    Probe { path: PathBuf, reason: String },
    /// An operation that needs a loaded track was called without one.
    #[error("no track loaded")]
    NoTrack,
}

/// Synchronous, best-effort playback primitives.
///
/// `load` replaces whatever was loaded before and leaves the backend paused
/// at position zero; `play`/`pause`/`stop` are unconditional and quietly do
/// nothing without a loaded track.
pub trait AudioBackend {
    fn load(&mut self, path: &Path) -> Result<(), AudioError>;
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    /// Apply a volume in `[0.0, 1.0]`. Takes effect immediately and persists
    /// across subsequent loads.
    fn set_volume(&mut self, volume: f32);
    /// Elapsed playback time of the loaded track.
    fn position(&self) -> Result<Duration, AudioError>;
    /// Jump to an absolute position in the loaded track. May fail for
    /// formats without seek support.
    fn seek_to(&mut self, position: Duration) -> Result<(), AudioError>;
    /// Total duration of the file at `path`, independent of what is loaded.
    fn probe_duration(&self, path: &Path) -> Result<Duration, AudioError>;
}
