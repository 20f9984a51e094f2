//! Colours for each theme.

use ratatui::style::Color;

use crate::models::Theme;


/// Colours used by the dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub selected: Color,
    pub drop_target: Color,
    /// Colours for the first and second data series.
    pub series: [Color; 2],
}


impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::White,
                muted: Color::DarkGray,
                border: Color::Gray,
                accent: Color::Cyan,
                selected: Color::Yellow,
                drop_target: Color::LightGreen,
                series: [Color::Cyan, Color::Magenta],
            },
            Theme::Light => Self {
                text: Color::Black,
                muted: Color::Gray,
                border: Color::DarkGray,
                accent: Color::Blue,
                selected: Color::Magenta,
                drop_target: Color::Green,
                series: [Color::Blue, Color::Red],
            },
            // Follow the terminal's own foreground and background
            Theme::System => Self {
                text: Color::Reset,
                muted: Color::DarkGray,
                border: Color::Reset,
                accent: Color::Cyan,
                selected: Color::Yellow,
                drop_target: Color::Green,
                series: [Color::Cyan, Color::LightRed],
            },
        }
    }
}
