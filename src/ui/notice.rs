//! Short-lived status messages shown in the demo header.

use std::time::{Duration, Instant};

use crate::directory::Employee;
use crate::ui::user_picker::PickerValue;

pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
struct Notice {
    message: String,
    shown_at: Instant,
}

/// Holds at most one message and drops it once it is older than the TTL.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    current: Option<Notice>,
    ttl: Duration,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Replace whatever is showing.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Notice {
            message: message.into(),
            shown_at: now,
        });
    }

    pub fn expire(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|notice| now.duration_since(notice.shown_at) >= self.ttl)
        {
            self.current = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|notice| notice.message.as_str())
    }
}

pub fn employee_selected(employee: &Employee) -> String {
    format!(
        "선택됨: {} ({})",
        employee.name,
        employee.department.as_deref().unwrap_or("-")
    )
}

pub fn picker_changed(value: &PickerValue) -> String {
    format!("선택됨: {} / {}", value.emp_no, value.name)
}
