use crate::cli::DemoCommand;
use crate::config::Config;
use crate::ui::app::{App, Demo};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_input;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Run the selected demo until the user quits.
pub async fn run(config: Config, command: DemoCommand) -> anyhow::Result<()> {
    let directory = config
        .directory
        .build()
        .context("Failed to set up the employee directory")?;

    let (mut terminal, guard) = setup_terminal().context("Failed to set up the terminal")?;
    let tick_rate = Duration::from_millis(250);
    let mut events = EventHandler::new(tick_rate);

    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let demo = Demo::from_command(&command, &config, directory, events.search_sink());
    let mut app = App::new(demo, Rect::new(0, 0, cols, rows));
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Input(event)) => handle_input(&mut app, &event),
            Some(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Some(AppEvent::Tick) => app.on_tick(Instant::now()),
            Some(AppEvent::Search(event)) => app.on_search_event(event),
            None => break,
        }
    }

    drop(guard);
    Ok(())
}
