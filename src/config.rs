//! Application-level configuration constants.

// Timer behavior
pub const TICK_MS: u32 = 1_000;
pub const CHIME_SRC: &str = "assets/sounds/wind-chimes-a.wav";

// Default values for the settings panel
pub const DEFAULT_HOURS: u32 = 0;
pub const DEFAULT_MINUTES: u32 = 10;
pub const DEFAULT_SECONDS: u32 = 0;
pub const DEFAULT_THEME: usize = 0;

// SVG constants
pub const ICON_VIEW_BOX: &str = "0 0 100 100";
