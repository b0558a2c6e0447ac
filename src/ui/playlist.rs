use eframe::egui;

use crate::library::Track;

/// The playlist window. Renders a read-only snapshot of the playlist each
/// frame and reports the row the user asked to play; it holds no playback
/// state of its own.
pub struct PlaylistView {
    pub open: bool,
    selected: Option<usize>,
}

impl PlaylistView {
    pub fn new() -> Self {
        Self {
            open: false,
            selected: None,
        }
    }

    /// Show the window when open. Returns the index to play when the user
    /// double-clicks a row or presses "Play Selected".
    pub fn show(&mut self, ctx: &egui::Context, tracks: &[Track], current: usize) -> Option<usize> {
        if !self.open {
            return None;
        }

        let mut picked: Option<usize> = None;
        let mut open = self.open;

        egui::Window::new("Current Playlist")
            .open(&mut open)
            .default_size([400.0, 300.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label("Double-click a song to play");
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .max_height(ui.available_height() - 30.0)
                    .show(ui, |ui| {
                        if tracks.is_empty() {
                            ui.label("Playlist is empty");
                        }
                        for (i, track) in tracks.iter().enumerate() {
                            let chosen = self.selected == Some(i);
                            let label = if i == current {
                                format!("▶ {}", track.display)
                            } else {
                                track.display.clone()
                            };
                            let response = ui.selectable_label(chosen, label);
                            if response.clicked() {
                                self.selected = Some(i);
                            }
                            if response.double_clicked() {
                                picked = Some(i);
                            }
                        }
                    });

                if ui.button("Play Selected").clicked() {
                    picked = self.selected;
                }
            });

        self.open = open;
        picked
    }
}

impl Default for PlaylistView {
    fn default() -> Self {
        Self::new()
    }
}
