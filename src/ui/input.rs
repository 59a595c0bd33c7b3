use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            return;
        }
        _ => {}
    }

    if app.is_error_view() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R')) {
            app.retry();
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_home(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_end(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
