use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/quaver/config.toml` or `~/.config/quaver/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `QUAVER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio: AudioSettings::default(),
            ui: UiSettings::default(),
            library: LibrarySettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume applied at startup, in percent (0-100).
    pub initial_volume_percent: u8,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume_percent: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Initial window width in logical points.
    pub window_width: f32,
    /// Initial window height in logical points.
    pub window_height: f32,
    /// How often the displayed position refreshes while playing (milliseconds).
    pub poll_interval_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: 400.0,
            window_height: 300.0,
            poll_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks when importing a folder.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
        }
    }
}
