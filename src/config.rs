use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level, used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: i32,
    #[serde(default = "default_window_height")]
    pub height: i32,
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            fps: default_fps(),
            title: default_title(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Root of the numbered deck (`<assets_dir>/cards/card{i}.png`)
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// Browse every image of this directory instead of the numbered deck
    #[serde(default)]
    pub card_dir: Option<PathBuf>,
    #[serde(default = "default_card_count")]
    pub card_count: u32,
    /// Card width in pixels; the page column width when unset
    #[serde(default)]
    pub card_width: Option<f32>,
    #[serde(default = "default_card_height")]
    pub card_height: f32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            card_dir: None,
            card_count: default_card_count(),
            card_width: None,
            card_height: default_card_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,
    #[serde(default = "default_velocity_threshold")]
    pub velocity_threshold: f32,
    #[serde(default)]
    pub exit: ExitMode,
    #[serde(default = "default_exit_delay_ms")]
    pub exit_delay_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            velocity_threshold: default_velocity_threshold(),
            exit: ExitMode::default(),
            exit_delay_ms: default_exit_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub travel: Travel,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default = "default_true")]
    pub show_buttons: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            travel: Travel::default(),
            variant: Variant::default(),
            show_buttons: default_true(),
        }
    }
}

/// What ends the exit animation of a committed card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExitMode {
    /// The exit spring comes to rest
    #[default]
    Spring,
    /// A fixed delay elapses
    Timer,
}

/// How a leftward input moves the cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Travel {
    /// Leftward input goes back one card
    #[default]
    TwoWay,
    /// Every input goes forward; the deck only loops one way
    OneWay,
}

/// Card decoration and touch behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// LIKE / NOPE badges fade in while dragging
    #[default]
    Badges,
    /// No badges; taps on the outer thirds of the card step the deck
    TapZones,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_width() -> i32 {
    WINDOW_WIDTH
}

fn default_window_height() -> i32 {
    WINDOW_HEIGHT
}

fn default_fps() -> u32 {
    FPS
}

fn default_title() -> String {
    "EL5 BTC - Swipe Cards".to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_card_count() -> u32 {
    10
}

fn default_card_height() -> f32 {
    CARD_HEIGHT
}

fn default_swipe_threshold() -> f32 {
    SWIPE_THRESHOLD
}

fn default_velocity_threshold() -> f32 {
    VELOCITY_THRESHOLD
}

fn default_exit_delay_ms() -> u64 {
    EXIT_DELAY_MS
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from the given file, or the default location.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// `~/.config/swipe-deck/config.toml` on Linux, the platform config dir elsewhere
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("swipe-deck")
            .join("config.toml")
    }
}
