use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::ui::theme::CONFETTI;

use super::CelebrationEffect;

/// Ticks a burst stays on screen after `pop`.
pub const BURST_TICKS: u16 = 24;

const PARTICLES: u16 = 48;
const GLYPHS: [&str; 5] = ["*", "+", "•", "✦", "o"];

/// Confetti falling through the target area.
///
/// Particle positions are a pure function of the particle index and the
/// frame, so a burst looks the same every time it pops.
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    target: Option<Rect>,
    frame: u16,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> u16 {
        self.frame
    }

    fn particle(index: u16, frame: u16, area: Rect) -> Option<(u16, u16)> {
        if area.is_empty() {
            return None;
        }
        let width = i32::from(area.width);
        let height = i32::from(area.height);
        let index = i32::from(index);
        let frame = i32::from(frame);

        let speed = 1 + index % 3;
        let delay = index % 5;
        let y = frame * speed - delay;
        if !(0..height).contains(&y) {
            return None;
        }
        let drift = if index % 2 == 0 { frame / 2 } else { -(frame / 2) };
        let x = (index * 37 + 11 + drift).rem_euclid(width);
        Some((area.x + x as u16, area.y + y as u16))
    }
}

impl CelebrationEffect for Confetti {
    fn pop(&mut self, target: Rect) {
        self.target = Some(target);
        self.frame = 0;
    }

    fn tick(&mut self) {
        if self.target.is_none() {
            return;
        }
        self.frame += 1;
        if self.frame >= BURST_TICKS {
            self.target = None;
            self.frame = 0;
        }
    }

    fn is_active(&self) -> bool {
        self.target.is_some()
    }

    fn render(&self, buf: &mut Buffer) {
        let Some(target) = self.target else {
            return;
        };
        let area = target.intersection(buf.area);
        for index in 0..PARTICLES {
            let Some((x, y)) = Self::particle(index, self.frame, area) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                let glyph = GLYPHS[usize::from(index) % GLYPHS.len()];
                let color = CONFETTI[usize::from(index) % CONFETTI.len()];
                cell.set_symbol(glyph).set_fg(color);
            }
        }
    }
}
