use crate::ui::app::App;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route one terminal event: global quit keys first, then the demo.
pub fn handle_input(app: &mut App, event: &Event) {
    if let Event::Key(key) = event {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if is_ctrl_char(*key, 'q') || is_ctrl_char(*key, 'c') {
            app.request_quit();
            return;
        }
    }

    app.on_input(event);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
