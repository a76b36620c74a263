use crate::snapshot::Highlight;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,         // Untouched element
    pub out_of_range: Color, // Element outside the active window
    pub sorted: Color,
    pub comparing: Color,
    pub swapped: Color,
    pub pivot: Color,
    pub found: Color,
    pub checking: Color,
    pub mid: Color,
}

impl Theme {
    /// Bar color for a resolved highlight
    pub fn highlight(&self, highlight: Highlight) -> Color {
        match highlight {
            Highlight::Sorted => self.sorted,
            Highlight::Comparing => self.comparing,
            Highlight::Swapped => self.swapped,
            Highlight::Pivot => self.pivot,
            Highlight::Found => self.found,
            Highlight::Checking => self.checking,
            Highlight::Mid => self.mid,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for the status bar
    bar: Color::Rgb(137, 180, 250),
    out_of_range: Color::Rgb(69, 71, 90),
    sorted: Color::Rgb(166, 227, 161),    // Green
    comparing: Color::Rgb(249, 226, 175), // Yellow
    swapped: Color::Rgb(243, 139, 168),   // Red
    pivot: Color::Rgb(203, 166, 247),     // Mauve
    found: Color::Rgb(148, 226, 213),     // Teal
    checking: Color::Rgb(250, 179, 135),  // Orange
    mid: Color::Rgb(245, 194, 231),       // Pink
};
