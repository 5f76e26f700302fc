use std::sync::Arc;

use crate::directory::{Employee, EmployeeDirectory, SearchError};

use super::guard::{RequestGuard, Ticket};

/// Result of one directory lookup, tagged with the ticket it was issued
/// under.
#[derive(Debug, Clone)]
pub struct SearchCompletion {
    ticket: Ticket,
    query: String,
    result: Result<Vec<Employee>, SearchError>,
}

impl SearchCompletion {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Receives completions from search tasks.
pub type CompletionSink = Arc<dyn Fn(SearchCompletion) + Send + Sync>;

/// Issues directory lookups and filters their completions so that only the
/// most recently issued one is ever handed back.
pub struct SearchOrchestrator {
    directory: Arc<dyn EmployeeDirectory>,
    guard: RequestGuard,
    sink: CompletionSink,
}

impl SearchOrchestrator {
    pub fn new(directory: Arc<dyn EmployeeDirectory>, sink: CompletionSink) -> Self {
        Self {
            directory,
            guard: RequestGuard::new(),
            sink,
        }
    }

    /// Start a lookup for `query`, superseding any outstanding one.
    ///
    /// The task is not aborted when superseded; its completion is simply
    /// refused by [`accept`](Self::accept). Must be called from within a
    /// tokio runtime.
    pub fn start(&mut self, query: String) -> Ticket {
        let ticket = self.guard.issue();
        tracing::debug!(
            "Issuing search #{} for {:?}",
            ticket.generation(),
            query
        );

        let directory = Arc::clone(&self.directory);
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            let result = directory.search(&query).await;
            sink(SearchCompletion {
                ticket,
                query,
                result,
            });
        });
        ticket
    }

    /// Forget any outstanding lookup.
    pub fn cancel(&mut self) {
        if self.guard.has_outstanding() {
            tracing::debug!("Invalidating outstanding search");
        }
        self.guard.invalidate();
    }

    pub fn is_loading(&self) -> bool {
        self.guard.has_outstanding()
    }

    /// Hand back the outcome of `completion` if it is still the latest
    /// request; stale completions yield `None`.
    pub fn accept(
        &mut self,
        completion: SearchCompletion,
    ) -> Option<Result<Vec<Employee>, SearchError>> {
        if !self.guard.settle(completion.ticket) {
            tracing::debug!(
                "Dropping stale search #{} for {:?}",
                completion.ticket.generation(),
                completion.query
            );
            return None;
        }

        if let Err(err) = &completion.result {
            tracing::warn!("Search for {:?} failed: {}", completion.query, err);
        }
        Some(completion.result)
    }
}
