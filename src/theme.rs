//! Color theme presets.
//!
//! The presets ship as `themes.csv` inside the binary and are parsed once on
//! first use. Columns: `label,background_color,foreground_color`.

use log::{error, info};
use once_cell::sync::Lazy;
use serde::Deserialize;

pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_FOREGROUND: &str = "#000000";

const THEMES_CSV: &str = include_str!("themes.csv");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    pub label: String,
    pub background_color: String,
    pub foreground_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            label: "Light".to_string(),
            background_color: DEFAULT_BACKGROUND.to_string(),
            foreground_color: DEFAULT_FOREGROUND.to_string(),
        }
    }
}

/// Parse theme rows from CSV content with a header line.
pub fn read_themes_from_csv_string(csv_content: &str) -> Result<Vec<Theme>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());
    let themes = reader
        .deserialize::<Theme>()
        .collect::<Result<Vec<_>, _>>()?;
    info!("Loaded {} themes", themes.len());
    Ok(themes)
}

/// Bundled presets. Falls back to the light theme alone if the table is broken.
pub static THEMES: Lazy<Vec<Theme>> = Lazy::new(|| match read_themes_from_csv_string(THEMES_CSV) {
    Ok(themes) if !themes.is_empty() => themes,
    Ok(_) => {
        error!("Theme table is empty, using the default theme");
        vec![Theme::default()]
    }
    Err(e) => {
        error!("Failed to parse theme table: {}", e);
        vec![Theme::default()]
    }
});

/// Theme at `index`, or the first preset when out of range.
pub fn theme_at(index: usize) -> &'static Theme {
    THEMES.get(index).unwrap_or(&THEMES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_has_seven_presets() {
        let labels: Vec<&str> = THEMES.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Light", "Dark", "Red", "Blue", "Green", "Orange", "Pink"]
        );
    }

    #[test]
    fn first_theme_is_the_default() {
        assert_eq!(theme_at(0), &Theme::default());
    }

    #[test]
    fn lookup_by_index() {
        let blue = theme_at(3);
        assert_eq!(blue.background_color, "#ffffff");
        assert_eq!(blue.foreground_color, "#0061ff");
        assert_eq!(theme_at(1).background_color, "#000000");
        assert_eq!(theme_at(99), theme_at(0));
    }

    #[test]
    fn rejects_short_rows() {
        let bad = "label,background_color,foreground_color\nBroken,#ffffff\n";
        assert!(read_themes_from_csv_string(bad).is_err());
    }
}
