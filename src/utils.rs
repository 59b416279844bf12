use donut_timer::{validate_segment, TimeUnit, SEGMENT_MAX};
use once_cell::sync::Lazy;

/// One entry of an H/M/S dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOption {
    pub label: String,
    pub value: u32,
}

/// `00`..`59`, shared by all three time segments.
pub static TIME_SEGMENT_OPTIONS: Lazy<Vec<SegmentOption>> = Lazy::new(|| {
    (0..=SEGMENT_MAX)
        .map(|value| SegmentOption {
            label: format!("{:02}", value),
            value,
        })
        .collect()
});

/// Parse a trimmed `<select>` value as a number.
fn parse_number<T: std::str::FromStr>(input: &str, field_name: &str) -> Result<T, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }
    trimmed
        .parse()
        .map_err(|_| format!("{} must be a valid number", field_name))
}

/// Parse the value of an H/M/S `<select>`.
pub fn parse_segment(input: &str, unit: TimeUnit) -> Result<u32, String> {
    let raw: i64 = parse_number(input, &unit.to_string())?;
    validate_segment(unit, raw).map_err(|e| e.to_string())
}

/// Parse the value of the theme `<select>` against the number of presets.
pub fn parse_theme_index(input: &str, theme_count: usize) -> Result<usize, String> {
    if theme_count == 0 {
        return Err("No themes available".to_string());
    }
    let index: usize = parse_number(input, "Theme")?;
    if index >= theme_count {
        return Err(format!("Theme cannot exceed {}", theme_count - 1));
    }
    Ok(index)
}
