use std::future::Future;

use async_trait::async_trait;

use super::{Employee, EmployeeDirectory, SearchError};

/// Adapts an async closure `Fn(String) -> Future<Output = Result<..>>` into
/// an [`EmployeeDirectory`].
pub struct FnDirectory<F> {
    search: F,
}

impl<F> FnDirectory<F> {
    pub fn new(search: F) -> Self {
        Self { search }
    }
}

#[async_trait]
impl<F, Fut> EmployeeDirectory for FnDirectory<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<Employee>, SearchError>> + Send + 'static,
{
    async fn search(&self, query: &str) -> Result<Vec<Employee>, SearchError> {
        (self.search)(query.to_string()).await
    }
}
