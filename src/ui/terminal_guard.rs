//! Raw-mode terminal setup with guaranteed restore.

use crossterm::cursor::Show;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

pub type DemoTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back the way it was, exactly once: on drop, or from
/// the panic hook before the panic message is printed.
pub struct TerminalGuard {
    armed: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let armed = Arc::new(Mutex::new(true));
        let hook_armed = Arc::clone(&armed);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            disarm(&hook_armed);
            default_hook(info);
        }));
        Self { armed }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disarm(&self.armed);
    }
}

fn disarm(armed: &Mutex<bool>) {
    let mut armed = armed.lock();
    if std::mem::replace(&mut *armed, false) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
}

/// Enter raw mode and the alternate screen with mouse and paste events on.
pub fn setup_terminal() -> io::Result<(DemoTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    // Arm before anything else can fail so raw mode is undone on error.
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture,
        Clear(ClearType::All)
    )?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    Ok((terminal, guard))
}
