use std::time::Duration;

use async_trait::async_trait;

use super::{Employee, EmployeeDirectory, SearchError};

/// Directory behind [`EmployeeSearchModal::without_directory`]: every
/// lookup finds nobody.
///
/// [`EmployeeSearchModal::without_directory`]: crate::ui::employee_search::EmployeeSearchModal::without_directory
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyDirectory;

#[async_trait]
impl EmployeeDirectory for EmptyDirectory {
    async fn search(&self, _query: &str) -> Result<Vec<Employee>, SearchError> {
        Ok(Vec::new())
    }
}

/// In-memory directory with simulated network latency.
#[derive(Debug, Clone)]
pub struct MockDirectory {
    roster: Vec<Employee>,
    latency: Duration,
}

impl MockDirectory {
    pub fn new(roster: Vec<Employee>, latency: Duration) -> Self {
        Self { roster, latency }
    }
}

#[async_trait]
impl EmployeeDirectory for MockDirectory {
    async fn search(&self, query: &str) -> Result<Vec<Employee>, SearchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .roster
            .iter()
            .filter(|employee| employee.matches(query))
            .cloned()
            .collect())
    }
}

/// Directory that rejects every lookup, for exercising error states.
#[derive(Debug, Clone)]
pub struct FailingDirectory {
    message: Option<String>,
    latency: Duration,
}

impl FailingDirectory {
    /// Fails with `message`, or with no reason at all when `None`.
    pub fn new(message: Option<String>, latency: Duration) -> Self {
        Self { message, latency }
    }
}

#[async_trait]
impl EmployeeDirectory for FailingDirectory {
    async fn search(&self, _query: &str) -> Result<Vec<Employee>, SearchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Err(match &self.message {
            Some(message) => SearchError::rejected(message.clone()),
            None => SearchError::Unknown,
        })
    }
}

/// Built-in roster used by the demos when no roster file is configured.
pub fn sample_roster() -> Vec<Employee> {
    vec![
        Employee::new("1", "김철수")
            .with_emp_no("10001")
            .with_department("개발1팀")
            .with_position("FE")
            .with_email("chulsoo@company.com"),
        Employee::new("2", "이영희")
            .with_emp_no("10002")
            .with_department("개발2팀")
            .with_position("BE")
            .with_email("younghee@company.com"),
        Employee::new("3", "박민수")
            .with_emp_no("20001")
            .with_department("인사팀")
            .with_position("HR")
            .with_email("minsu@company.com"),
        Employee::new("4", "최지우")
            .with_emp_no("30001")
            .with_department("재무팀")
            .with_position("Finance")
            .with_email("jiwoo@company.com"),
    ]
}
