//! `rodio`-backed implementation of [`AudioBackend`].
//!
//! A fresh `Sink` is created per loaded track; the stored volume is
//! re-applied to each new sink so the volume slider survives track changes.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::backend::{AudioBackend, AudioError};

pub struct RodioBackend {
    stream: OutputStream,
    sink: Option<Sink>,
    volume: f32,
}

impl RodioBackend {
    pub fn new() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::NoOutput(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped; noisy on exit.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            volume: 1.0,
        })
    }
}

impl AudioBackend for RodioBackend {
    fn load(&mut self, path: &Path) -> Result<(), AudioError> {
        if let Some(old) = self.sink.take() {
            old.stop();
        }

        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        sink.pause();
        self.sink = Some(sink);
        Ok(())
    }

    fn play(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = &self.sink {
            sink.set_volume(volume);
        }
    }

    fn position(&self) -> Result<Duration, AudioError> {
        self.sink
            .as_ref()
            .map(|sink| sink.get_pos())
            .ok_or(AudioError::NoTrack)
    }

    fn seek_to(&mut self, position: Duration) -> Result<(), AudioError> {
        let sink = self.sink.as_ref().ok_or(AudioError::NoTrack)?;
        sink.try_seek(position)
            .map_err(|e| AudioError::Seek(e.to_string()))
    }

    fn probe_duration(&self, path: &Path) -> Result<Duration, AudioError> {
        let tagged = lofty::read_from_path(path).map_err(|e| AudioError::Probe {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(tagged.properties().duration())
    }
}
