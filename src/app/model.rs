use std::time::{Duration, Instant};

use eframe::egui;

use crate::audio::AudioBackend;
use crate::config::Settings;
use crate::player::Player;
use crate::ui::{Action, ControlValues, PlaylistView, controls_panel};

/// The main window. Everything runs on the UI thread; the poll tick is
/// cooperative and fires between frames, at most once per frame.
pub struct PlayerApp<B: AudioBackend> {
    pub(crate) player: Player<B>,
    pub(crate) settings: Settings,
    pub(crate) playlist: PlaylistView,
    pub(crate) values: ControlValues,
    pub(crate) status: String,
    last_tick: Option<Instant>,
}

impl<B: AudioBackend> PlayerApp<B> {
    pub fn new(backend: B, settings: Settings) -> Self {
        let mut player = Player::new(backend);
        let volume = settings.audio.initial_volume_percent.min(100);
        player.set_volume(volume);

        Self {
            player,
            settings,
            playlist: PlaylistView::new(),
            values: ControlValues {
                volume,
                position: 0,
            },
            status: String::new(),
            last_tick: None,
        }
    }

    fn refresh_now_playing(&mut self) {
        if self.player.is_playing() {
            if let Some(track) = self.player.current_track() {
                self.status = format!("Now Playing: {}", track.display);
            }
        }
    }

    /// Apply one user action to the controller and update the status line.
    pub(crate) fn apply(&mut self, action: Action) {
        match action {
            Action::Play => {
                self.player.play();
                self.refresh_now_playing();
            }
            Action::Pause => {
                if self.player.is_playing() {
                    self.player.pause();
                    self.status = "Music Paused".to_string();
                }
            }
            Action::Stop => {
                self.player.stop();
                self.status = "Music Stopped".to_string();
            }
            Action::Next => {
                self.player.next();
                self.refresh_now_playing();
            }
            Action::Previous => {
                self.player.previous();
                self.refresh_now_playing();
            }
            Action::Select(index) => {
                self.player.select_track(index);
                self.refresh_now_playing();
            }
            Action::AddTrack(path) => {
                let track = self.player.add_track(&path);
                self.status = format!("Added: {}", track.display);
            }
            Action::AddFolder(dir) => {
                let count = self.player.add_folder(&dir, &self.settings.library);
                self.status = if count > 0 {
                    format!("Added {count} songs from folder")
                } else {
                    "No audio files found in selected folder".to_string()
                };
            }
            Action::SetVolume(percent) => self.player.set_volume(percent),
            Action::Seek(percent) => self.player.seek(percent),
            Action::ShowPlaylist => self.playlist.open = true,
            // Resolved into AddTrack/AddFolder by the dialog glue in `update`.
            Action::PickTrack | Action::PickFolder => {}
        }

        self.values.position = self.player.progress().percent;
    }

    /// Run a poll tick when one is due. Late ticks are skipped, not queued;
    /// the cadence restarts whenever playback does.
    pub(crate) fn maybe_tick(&mut self, now: Instant) {
        if !self.player.is_playing() {
            self.last_tick = None;
            return;
        }

        let interval = Duration::from_millis(self.settings.ui.poll_interval_ms);
        if let Some(last) = self.last_tick {
            if now.duration_since(last) < interval {
                return;
            }
        }

        self.last_tick = Some(now);
        self.player.poll_tick();
        self.values.position = self.player.progress().percent;
    }

    fn pick_track(&mut self) {
        let extensions: Vec<&str> = self
            .settings
            .library
            .extensions
            .iter()
            .map(String::as_str)
            .collect();
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Audio", &extensions)
            .pick_file()
        {
            self.apply(Action::AddTrack(path));
        }
    }

    fn pick_folder(&mut self) {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            self.apply(Action::AddFolder(dir));
        }
    }
}

impl<B: AudioBackend> eframe::App for PlayerApp<B> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let status = self.status.clone();
        let clock = self.player.progress().clock.clone();

        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(controls_panel(ui, &mut self.values, &status, &clock));
        });

        if let Some(index) =
            self.playlist
                .show(ctx, self.player.tracks(), self.player.current_index())
        {
            actions.push(Action::Select(index));
        }

        for action in actions {
            match action {
                Action::PickTrack => self.pick_track(),
                Action::PickFolder => self.pick_folder(),
                other => self.apply(other),
            }
        }

        self.maybe_tick(Instant::now());
        if self.player.is_playing() {
            // Wake up well within the poll interval so ticks keep arriving
            // without user input.
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}
