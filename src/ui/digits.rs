//! 3x5 block font for the count.

use ratatui::text::Line;

pub const GLYPH_WIDTH: u16 = 3;
pub const GLYPH_HEIGHT: u16 = 5;

fn glyph(ch: char) -> Option<[&'static str; 5]> {
    let rows = match ch {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        '-' => ["   ", "   ", "███", "   ", "   "],
        _ => return None,
    };
    Some(rows)
}

/// Width in cells of `value` rendered in the block font, one space between glyphs.
pub fn block_width(value: i64) -> u16 {
    let chars = value.to_string().chars().count() as u16;
    chars * GLYPH_WIDTH + chars.saturating_sub(1)
}

/// Renders `value` as five lines of block glyphs.
pub fn block_lines(value: i64) -> Vec<Line<'static>> {
    let text = value.to_string();
    (0..usize::from(GLYPH_HEIGHT))
        .map(|row| {
            let line = text
                .chars()
                .filter_map(glyph)
                .map(|rows| rows[row])
                .collect::<Vec<_>>()
                .join(" ");
            Line::from(line)
        })
        .collect()
}
