use std::path::PathBuf;

use eframe::egui;

/// One user intention, produced by a widget and applied by the app shell.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Play,
    Pause,
    Stop,
    Next,
    Previous,
    /// Open the playlist window.
    ShowPlaylist,
    /// Open the file chooser; resolved into `AddTrack` by the shell.
    PickTrack,
    /// Open the folder chooser; resolved into `AddFolder` by the shell.
    PickFolder,
    AddTrack(PathBuf),
    AddFolder(PathBuf),
    Select(usize),
    SetVolume(u8),
    Seek(u8),
}

/// Slider values owned by the shell and edited in place by the widgets.
pub struct ControlValues {
    pub volume: u8,
    pub position: u8,
}

/// Render the transport buttons, status labels and both sliders.
pub fn controls_panel(
    ui: &mut egui::Ui,
    values: &mut ControlValues,
    status: &str,
    clock: &str,
) -> Vec<Action> {
    let mut actions = Vec::new();

    ui.vertical_centered_justified(|ui| {
        ui.add_space(10.0);
        if ui.button("Play").clicked() {
            actions.push(Action::Play);
        }
        if ui.button("Pause").clicked() {
            actions.push(Action::Pause);
        }
        if ui.button("Stop").clicked() {
            actions.push(Action::Stop);
        }
        if ui.button("Show Playlist").clicked() {
            actions.push(Action::ShowPlaylist);
        }
        if ui.button("Import Folder").clicked() {
            actions.push(Action::PickFolder);
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let half = ui.available_width() / 2.0;
            if ui.add_sized([half, 0.0], egui::Button::new("Back")).clicked() {
                actions.push(Action::Previous);
            }
            if ui
                .add_sized([ui.available_width(), 0.0], egui::Button::new("Forward"))
                .clicked()
            {
                actions.push(Action::Next);
            }
        });

        ui.add_space(10.0);
        if ui.button("Choose Song").clicked() {
            actions.push(Action::PickTrack);
        }

        ui.add_space(15.0);
        ui.label(status);
        ui.label(clock);

        ui.add_space(10.0);
        ui.label("Volume:");
        if ui
            .add(egui::Slider::new(&mut values.volume, 0..=100).show_value(false))
            .changed()
        {
            actions.push(Action::SetVolume(values.volume));
        }

        ui.label("Position:");
        if ui
            .add(egui::Slider::new(&mut values.position, 0..=100).show_value(false))
            .changed()
        {
            actions.push(Action::Seek(values.position));
        }
    });

    actions
}
