use crate::ui::app::App;
use crate::ui::counter::CounterIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            app.activate(CounterIntent::Increase);
        }
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => {
            app.activate(CounterIntent::Decrease);
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => app.move_focus(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_focused();
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
