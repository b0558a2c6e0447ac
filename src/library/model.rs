use std::path::{Path, PathBuf};

/// One playable audio file. Immutable once added to the playlist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    /// File name with the directory stripped; what lists and labels show.
    pub display: String,
}

impl Track {
    pub fn from_path(path: &Path) -> Self {
        let display = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();

        Self {
            path: path.to_path_buf(),
            display,
        }
    }
}
