//! Shared test utilities and mock directories.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use staffpick::directory::{sample_roster, Employee, EmployeeDirectory, MockDirectory, SearchError};
use staffpick::search::{EventSink, SearchEvent};
use tokio::sync::{mpsc, oneshot};

/// Sink that collects widget events into a channel the test drains.
pub fn event_channel() -> (EventSink, mpsc::UnboundedReceiver<SearchEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sink: EventSink = Arc::new(move |event| {
        let _ = tx.send(event);
    });
    (sink, rx)
}

/// Wait for the next widget event.
pub async fn next_event(rx: &mut mpsc::UnboundedReceiver<SearchEvent>) -> SearchEvent {
    rx.recv().await.expect("event channel closed")
}

/// Let spawned tasks run, then report whether any event is waiting.
pub async fn has_pending_event(rx: &mut mpsc::UnboundedReceiver<SearchEvent>) -> bool {
    tokio::time::sleep(Duration::from_millis(1)).await;
    !rx.is_empty()
}

/// A lookup held open until the test resolves it.
pub struct PendingSearch {
    pub query: String,
    reply: oneshot::Sender<Result<Vec<Employee>, SearchError>>,
}

impl PendingSearch {
    pub fn resolve(self, result: Result<Vec<Employee>, SearchError>) {
        let _ = self.reply.send(result);
    }
}

/// Directory whose lookups only complete when the test says so, in
/// whatever order it chooses.
pub struct GatedDirectory {
    tx: mpsc::UnboundedSender<PendingSearch>,
}

impl GatedDirectory {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<PendingSearch>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

#[async_trait]
impl EmployeeDirectory for GatedDirectory {
    async fn search(&self, query: &str) -> Result<Vec<Employee>, SearchError> {
        let (reply, wait) = oneshot::channel();
        let _ = self.tx.send(PendingSearch {
            query: query.to_string(),
            reply,
        });
        wait.await.unwrap_or(Err(SearchError::Unknown))
    }
}

/// Sample-roster directory that records every query it is asked.
pub struct CountingDirectory {
    inner: MockDirectory,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl CountingDirectory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: MockDirectory::new(sample_roster(), Duration::ZERO),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl EmployeeDirectory for CountingDirectory {
    async fn search(&self, query: &str) -> Result<Vec<Employee>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().push(query.to_string());
        self.inner.search(query).await
    }
}

pub fn employee(id: &str, name: &str) -> Employee {
    Employee::new(id, name).with_emp_no(format!("E{id}"))
}

/// Flatten a rendered buffer into lines with spaces removed, so wide
/// glyphs and padding do not matter when matching text.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text.replace(' ', "")
}
