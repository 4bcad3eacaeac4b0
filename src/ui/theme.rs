use ratatui::style::Color;

use crate::engine::SpotColor;

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            surface: Color::Rgb(36, 40, 59),    // #24283B
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Terminal colour for a pivot highlight.
pub fn spot_color(spot: SpotColor) -> Color {
    match spot {
        SpotColor::Red => Color::Rgb(247, 118, 142),    // #F7768E Coral Red
        SpotColor::Orange => Color::Rgb(255, 158, 100), // #FF9E64
        SpotColor::Green => Color::Rgb(158, 206, 106),  // #9ECE6A
        SpotColor::Blue => Color::Rgb(122, 162, 247),   // #7AA2F7
        SpotColor::Purple => Color::Rgb(187, 154, 247), // #BB9AF7
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn surface() -> Color {
        Theme::current().surface
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}
