use crate::counter::CounterSnapshot;
use crate::ui::app::{App, ControlFocus};
use crate::ui::counter::CounterIntent;
use crate::ui::digits::{block_lines, block_width, GLYPH_HEIGHT};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    display_color, BUTTON_BG, BUTTON_DISABLED, BUTTON_FG, GLOBAL_BORDER, HEADER_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.counter().title()).widget(), header);
    frame.render_widget(Clear, body);
    draw_body(frame, app, body);
    frame.render_widget(Footer::new(app.strings()).widget(footer), footer);

    app.celebration().render(frame.buffer_mut());
}

fn draw_body(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let snapshot = app.snapshot();
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.strings().controls),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(body);
    frame.render_widget(block, body);
    if inner.is_empty() {
        return;
    }

    let value_style = Style::default()
        .fg(display_color(snapshot.color))
        .add_modifier(Modifier::BOLD);

    // Block digits need the glyph rows plus a spacer and the controls row.
    let fits_block = inner.width >= block_width(snapshot.count) && inner.height >= GLYPH_HEIGHT + 2;
    let mut lines: Vec<Line<'static>> = if fits_block {
        block_lines(snapshot.count)
            .into_iter()
            .map(|line| line.style(value_style))
            .collect()
    } else {
        vec![Line::styled(snapshot.count.to_string(), value_style)]
    };
    if inner.height > lines.len() as u16 {
        lines.push(Line::from(""));
    }
    lines.push(controls_line(app, &snapshot));

    let height = lines.len() as u16;
    let area = centered_rect_by_size(inner, inner.width, height);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn controls_line(app: &App, snapshot: &CounterSnapshot) -> Line<'static> {
    let strings = app.strings();
    let focus = app.focus();
    Line::from(vec![
        button(
            format!(" − {} ", strings.decrease),
            !snapshot.at_min,
            focus == ControlFocus::Decrease && app.is_enabled(CounterIntent::Decrease),
        ),
        Span::raw("  "),
        button(
            format!(" + {} ", strings.increase),
            !snapshot.at_max,
            focus == ControlFocus::Increase && app.is_enabled(CounterIntent::Increase),
        ),
    ])
}

fn button(label: String, enabled: bool, focused: bool) -> Span<'static> {
    let style = if !enabled {
        Style::default()
            .fg(BUTTON_DISABLED)
            .add_modifier(Modifier::DIM)
    } else if focused {
        Style::default()
            .fg(BUTTON_BG)
            .bg(BUTTON_FG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BUTTON_FG).bg(BUTTON_BG)
    };
    Span::styled(label, style)
}
