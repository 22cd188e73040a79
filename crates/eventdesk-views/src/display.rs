//! Presentation helpers shared by the screens: tag colours and date formats.

use eventdesk_models::parse_timestamp;

/// Colour of a status or visibility tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagColor {
    Green,
    Red,
    Orange,
    Blue,
    Default,
}

impl TagColor {
    /// Colour name as used by the UI kit.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagColor::Green => "green",
            TagColor::Red => "red",
            TagColor::Orange => "orange",
            TagColor::Blue => "blue",
            TagColor::Default => "default",
        }
    }
}

/// Maps a free-form status to its tag colour, ignoring case.
pub fn status_color(status: &str) -> TagColor {
    match status.to_lowercase().as_str() {
        "active" => TagColor::Green,
        "inactive" => TagColor::Red,
        "draft" => TagColor::Orange,
        _ => TagColor::Default,
    }
}

/// Label and colour of a visibility tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityTag {
    pub text: &'static str,
    pub color: TagColor,
}

/// Tag for an event's effective visibility.
pub fn visibility_tag(is_public: bool) -> VisibilityTag {
    if is_public {
        VisibilityTag {
            text: "Public",
            color: TagColor::Blue,
        }
    } else {
        VisibilityTag {
            text: "Private",
            color: TagColor::Orange,
        }
    }
}

fn format_with(timestamp: &str, pattern: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(dt) => dt.format(pattern).to_string(),
        None => timestamp.to_string(),
    }
}

/// Short date, e.g. `1/10/2025`. Unreadable input is returned as-is.
pub fn format_date(timestamp: &str) -> String {
    format_with(timestamp, "%-m/%-d/%Y")
}

/// Short date and time, e.g. `1/10/2025, 6:00:00 PM`.
pub fn format_date_time(timestamp: &str) -> String {
    format_with(timestamp, "%-m/%-d/%Y, %-I:%M:%S %p")
}

/// Long date, e.g. `January 10, 2025`.
pub fn format_long_date(timestamp: &str) -> String {
    format_with(timestamp, "%B %-d, %Y")
}

/// Time of day, e.g. `06:00 PM`.
pub fn format_time(timestamp: &str) -> String {
    format_with(timestamp, "%I:%M %p")
}

/// Long date and time, e.g. `January 10, 2025 at 06:00 PM`.
pub fn format_long_date_time(timestamp: &str) -> String {
    format_with(timestamp, "%B %-d, %Y at %I:%M %p")
}
