use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "highscore.txt";

/// Returns the platform-correct high score file path.
#[must_use]
pub fn high_score_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the high score from disk.
///
/// The file holds a free-standing integer in text form. Returns `Ok(0)`
/// when it does not yet exist (first run); returns `Err` when it exists but
/// cannot be read or parsed, so the caller can surface a warning before
/// entering raw terminal mode.
pub fn load_high_score() -> io::Result<u32> {
    load_high_score_from_path(&high_score_path())
}

/// Saves the high score to disk, creating parent directories when needed.
pub fn save_high_score(score: u32) -> io::Result<()> {
    save_high_score_to_path(&high_score_path(), score)
}

/// Persists `score` when it beats the value already on disk.
///
/// Returns the value now persisted: `score` after a successful save,
/// `saved` when there was nothing to beat. Callers use this both on the
/// game-over transition and once more at shutdown, so a record beaten
/// mid-run is never lost to a quit.
pub fn save_high_score_if_beaten(score: u32, saved: u32) -> io::Result<u32> {
    save_high_score_if_beaten_to_path(&high_score_path(), score, saved)
}

fn save_high_score_if_beaten_to_path(path: &Path, score: u32, saved: u32) -> io::Result<u32> {
    if score <= saved {
        return Ok(saved);
    }
    save_high_score_to_path(path, score)?;
    Ok(score)
}

fn load_high_score_from_path(path: &Path) -> io::Result<u32> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    raw.trim()
        .parse::<u32>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn save_high_score_to_path(path: &Path, score: u32) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, format!("{score}\n"))
}
