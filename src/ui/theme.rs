use ratatui::style::Color;

use crate::counter::DisplayColor;

pub const WARNING_ORANGE: Color = Color::Rgb(0xe9, 0x8a, 0x15);
pub const DANGER_RED: Color = Color::Rgb(0xdb, 0x25, 0x2b);
pub const ELECTRIC_GREEN: Color = Color::Rgb(0x4a, 0xe0, 0x5c);
pub const FUTURE_BLUE: Color = Color::Rgb(0x41, 0xb6, 0xe6);
pub const WONDER_PURPLE: Color = Color::Rgb(0x7b, 0x4b, 0xc4);

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BUTTON_BG: Color = Color::Rgb(0x1e, 0x40, 0x7c);
pub const BUTTON_FG: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const BUTTON_DISABLED: Color = Color::Rgb(0x6b, 0x72, 0x80);

pub const CONFETTI: [Color; 5] = [
    WARNING_ORANGE,
    DANGER_RED,
    ELECTRIC_GREEN,
    FUTURE_BLUE,
    WONDER_PURPLE,
];

pub fn display_color(color: DisplayColor) -> Color {
    match color {
        DisplayColor::BoundaryLow => WARNING_ORANGE,
        DisplayColor::BoundaryHigh => DANGER_RED,
        DisplayColor::MilestoneA => ELECTRIC_GREEN,
        DisplayColor::MilestoneB => FUTURE_BLUE,
        DisplayColor::Default => WONDER_PURPLE,
    }
}
