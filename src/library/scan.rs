use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// List the immediate files of `dir` that carry a configured audio extension.
///
/// Non-recursive. Entries come back in directory-listing order, which is
/// OS-dependent; no sorting or deduplication happens here.
pub fn scan_folder(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file() && is_audio_file(path, settings) {
            tracks.push(Track::from_path(path));
        }
    }

    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.flac"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.wav"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));
    }

    #[test]
    fn is_audio_file_accepts_dotted_and_padded_config_entries() {
        let settings = LibrarySettings {
            extensions: vec![".mp3".into(), " ogg ".into(), String::new()],
            ..LibrarySettings::default()
        };
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.wav"), &settings));
    }

    #[test]
    fn scan_folder_keeps_matching_files_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.mp3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("two.OGG"), b"not a real ogg").unwrap();
        fs::write(dir.path().join("notes.txt"), b"ignore me").unwrap();
        fs::write(dir.path().join("cover.jpg"), b"ignore me too").unwrap();

        let tracks = scan_folder(dir.path(), &LibrarySettings::default());
        let mut names: Vec<&str> = tracks.iter().map(|t| t.display.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["one.mp3", "two.OGG"]);
    }

    #[test]
    fn scan_folder_is_not_recursive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let tracks = scan_folder(dir.path(), &LibrarySettings::default());
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].display, "root.mp3");
    }

    #[test]
    fn scan_folder_skips_subdirectories_named_like_audio() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("fake.mp3")).unwrap();
        fs::write(dir.path().join("real.mp3"), b"not real").unwrap();

        let tracks = scan_folder(dir.path(), &LibrarySettings::default());
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].display, "real.mp3");
    }

    #[test]
    fn scan_folder_on_empty_dir_returns_nothing() {
        let dir = tempdir().unwrap();
        assert!(scan_folder(dir.path(), &LibrarySettings::default()).is_empty());
    }
}
