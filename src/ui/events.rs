use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::search::{EventSink, SearchEvent};

pub enum AppEvent {
    /// Key, mouse, paste or focus event from the terminal.
    Input(Event),
    Resize(u16, u16),
    Tick,
    /// Debounce timer or lookup completion for the active widget.
    Search(SearchEvent),
}

/// Merges terminal input (read on a dedicated thread) and widget events
/// (sent from tokio tasks) into one channel.
pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: UnboundedSender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));

        let event_tx = tx.clone();
        let stop_flag = Arc::clone(&stop);
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            while !stop_flag.load(Ordering::Relaxed) {
                // Short poll so the stop flag is noticed promptly.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(event) => {
                            if event_tx.send(AppEvent::Input(event)).is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            tracing::error!("Failed to read terminal event: {}", err);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("Failed to poll terminal events: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx, stop }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Sink handed to widgets so their timers and lookups land on this
    /// loop.
    pub fn search_sink(&self) -> EventSink {
        let tx = self.tx.clone();
        Arc::new(move |event| {
            let _ = tx.send(AppEvent::Search(event));
        })
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
