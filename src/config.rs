use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use ratatui::style::Color;
use serde::Deserialize;

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Logical grid dimensions passed through the game as a named type.
///
/// Width and height count the full grid *including* the wall ring: the
/// playable interior spans `x in 1..=width-2`, `y in 1..=height-2`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// Default grid width, wall ring included.
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default grid height, wall ring included.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Default score awarded per fruit.
pub const DEFAULT_POINTS_PER_FRUIT: u32 = 1;

/// Render/input loop cadence in milliseconds (ticks run on their own clock).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Gameplay speed presets mapping to a fixed simulation tick interval.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the wall-clock interval between simulation ticks.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        let millis = match self {
            Self::Easy => 150,
            Self::Medium => 100,
            Self::Hard => 50,
        };
        Duration::from_millis(millis)
    }

    /// Returns the label shown in the HUD.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Optional user settings file; every field may be omitted.
///
/// Command-line flags take precedence over these values, which in turn take
/// precedence over the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player_name: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub points_per_fruit: Option<u32>,
    pub theme: Option<String>,
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

impl Settings {
    /// Loads settings from the default path.
    ///
    /// A missing file yields `Settings::default()`; a present-but-malformed
    /// file is an error so the caller can warn before entering raw mode.
    pub fn load() -> io::Result<Self> {
        Self::load_from_path(&settings_path())
    }

    fn load_from_path(path: &Path) -> io::Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e),
        };

        serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub fruit: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
}

/// Classic green-on-dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    fruit: Color::Red,
    border_fg: Color::White,
    hud_fg: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Green,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    fruit: Color::Yellow,
    border_fg: Color::Cyan,
    hud_fg: Color::Cyan,
    hud_muted: Color::DarkGray,
    menu_title: Color::Cyan,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    fruit: Color::Yellow,
    border_fg: Color::Magenta,
    hud_fg: Color::Magenta,
    hud_muted: Color::DarkGray,
    menu_title: Color::Magenta,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Returns the index of the named theme, if it exists.
#[must_use]
pub fn theme_index(name: &str) -> Option<usize> {
    THEMES
        .iter()
        .position(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Snake head glyph per heading.
pub const GLYPH_SNAKE_HEAD_UP: &str = "^";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "v";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "<";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = ">";

/// Snake body glyph.
pub const GLYPH_SNAKE_BODY: &str = "o";

/// Fruit glyph.
pub const GLYPH_FRUIT: &str = "*";

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{theme_index, Difficulty, Settings, THEMES};

    #[test]
    fn difficulty_maps_to_expected_tick_intervals() {
        assert_eq!(Difficulty::Easy.tick_interval(), Duration::from_millis(150));
        assert_eq!(
            Difficulty::Medium.tick_interval(),
            Duration::from_millis(100)
        );
        assert_eq!(Difficulty::Hard.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn settings_parse_with_partial_fields() {
        let settings: Settings =
            serde_json::from_str(r#"{"difficulty": "hard", "points_per_fruit": 10}"#)
                .expect("partial settings should parse");

        assert_eq!(settings.difficulty, Some(Difficulty::Hard));
        assert_eq!(settings.points_per_fruit, Some(10));
        assert!(settings.player_name.is_none());
        assert!(settings.theme.is_none());
    }

    #[test]
    fn theme_lookup_is_case_insensitive() {
        assert_eq!(theme_index("Ocean"), Some(1));
        assert_eq!(theme_index("nope"), None);
        assert!(!THEMES.is_empty());
    }
}
