use crate::i18n::Strings;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    strings: &'a Strings,
}

impl<'a> Footer<'a> {
    pub fn new(strings: &'a Strings) -> Self {
        Self { strings }
    }

    pub fn hints(&self) -> String {
        format!(
            " +: {} │ -: {} │ ←/→: {} │ q: {}",
            self.strings.increase, self.strings.decrease, self.strings.focus, self.strings.quit
        )
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let hints = Span::styled(hints, text_style);
        let version = Span::styled(version, text_style);

        // Display width, not char count: CJK labels take two cells per glyph.
        let hints_width = hints.width();
        let version_width = version.width();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            hints,
            Span::styled(" ".repeat(padding), text_style),
            version,
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
