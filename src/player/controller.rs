use std::path::Path;
use std::time::Duration;

use crate::audio::AudioBackend;
use crate::config::LibrarySettings;
use crate::library::{self, Track};

use super::time::{format_mmss, position_percent};

/// What the position widgets currently show.
///
/// Updated by `poll_tick` and `seek`; a failed backend read leaves the
/// previous values in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    /// `"MM:SS / MM:SS"`, elapsed against total.
    pub clock: String,
    /// Position slider value, `0..=100`.
    pub percent: u8,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            clock: "00:00 / 00:00".to_string(),
            percent: 0,
        }
    }
}

/// The playback state machine.
///
/// Owns the playlist and mediates every backend call. All index uses are
/// bounds-guarded; `playing == true` implies `current` is in range and the
/// backend holds a loaded track.
pub struct Player<B: AudioBackend> {
    backend: B,
    tracks: Vec<Track>,
    current: usize,
    playing: bool,
    duration: Duration,
    progress: Progress,
}

impl<B: AudioBackend> Player<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            tracks: Vec::new(),
            current: 0,
            playing: false,
            duration: Duration::ZERO,
            progress: Progress::default(),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// The track at the current index, if the playlist has one.
    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// Append a single file to the playlist. The file is not validated here;
    /// a broken path surfaces later as a load failure on `play`.
    pub fn add_track(&mut self, path: &Path) -> &Track {
        self.tracks.push(Track::from_path(path));
        self.tracks.last().expect("just pushed")
    }

    /// Import the immediate audio files of `dir` and return how many were
    /// added. Directory-listing order is preserved; duplicates are kept.
    pub fn add_folder(&mut self, dir: &Path, settings: &LibrarySettings) -> usize {
        let found = library::scan_folder(dir, settings);
        let count = found.len();
        self.tracks.extend(found);
        log::info!("imported {count} tracks from {}", dir.display());
        count
    }

    /// Start playback of the current track. No-op when the playlist is empty
    /// or something is already playing; a re-click of Play never restarts.
    pub fn play(&mut self) {
        if self.playing || self.tracks.is_empty() {
            return;
        }

        let track = &self.tracks[self.current];
        if let Err(err) = self.backend.load(&track.path) {
            log::warn!("cannot play {}: {err}", track.path.display());
            return;
        }
        self.backend.play();

        // Best-effort probe; an unreadable file plays with an unknown total.
        self.duration = match self.backend.probe_duration(&track.path) {
            Ok(d) => d,
            Err(err) => {
                log::debug!("duration probe failed: {err}");
                Duration::ZERO
            }
        };

        self.playing = true;
        self.poll_tick();
    }

    /// Pause playback. No-op when nothing is playing.
    pub fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.backend.pause();
        self.playing = false;
    }

    /// Stop playback unconditionally and reset the displayed position.
    pub fn stop(&mut self) {
        self.backend.stop();
        self.playing = false;
        self.progress = Progress::default();
    }

    /// Advance to the next track, wrapping past the end, and restart
    /// playback there. No-op on an empty playlist.
    pub fn next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.tracks.len();
        self.stop();
        self.play();
    }

    /// Step back to the previous track, wrapping before the start, and
    /// restart playback there. No-op on an empty playlist.
    pub fn previous(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.current = (self.current + self.tracks.len() - 1) % self.tracks.len();
        self.stop();
        self.play();
    }

    /// Jump to `index` and restart playback there. Out-of-range indices
    /// leave the player untouched.
    pub fn select_track(&mut self, index: usize) {
        if index >= self.tracks.len() {
            return;
        }
        self.current = index;
        self.stop();
        self.play();
    }

    /// Apply a volume in percent (0-100), effective immediately and
    /// independent of playback state.
    pub fn set_volume(&mut self, percent: u8) {
        let volume = f32::from(percent.min(100)) / 100.0;
        self.backend.set_volume(volume);
    }

    /// Jump to `percent` of the current track. Only effective while playing;
    /// a backend refusal is ignored and leaves the position untouched.
    pub fn seek(&mut self, percent: u8) {
        if !self.playing {
            return;
        }
        let target = self.duration.mul_f64(f64::from(percent.min(100)) / 100.0);
        match self.backend.seek_to(target) {
            Ok(()) => self.poll_tick(),
            Err(err) => log::debug!("seek ignored: {err}"),
        }
    }

    /// Refresh the displayed clock and position from the backend. A failed
    /// position read keeps whatever was displayed before.
    pub fn poll_tick(&mut self) {
        if !self.playing {
            return;
        }

        let elapsed = match self.backend.position() {
            Ok(p) => p,
            Err(err) => {
                log::debug!("position read failed: {err}");
                return;
            }
        };

        self.progress.clock = format!(
            "{} / {}",
            format_mmss(elapsed),
            format_mmss(self.duration)
        );
        if !self.duration.is_zero() {
            self.progress.percent = position_percent(elapsed, self.duration);
        }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
