use crate::domain::model::{Dataset, Employee, EmployeeFilter, FilterFacets};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where a directory gets its records from.
pub trait DatasetSource: Send + Sync {
    fn describe(&self) -> String;
    fn load(&self) -> impl std::future::Future<Output = Result<Dataset>> + Send;
}

/// Read-only query contract shared by the in-memory directory and any
/// remote-backed replacement.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn get_all_employees(&self) -> Result<Vec<Employee>>;
    async fn get_employee_by_code(&self, code: &str) -> Result<Option<Employee>>;
    async fn search_employees(&self, term: &str) -> Result<Vec<Employee>>;
    async fn filter_employees(&self, filters: &EmployeeFilter) -> Result<Vec<Employee>>;
    async fn get_filter_options(&self) -> Result<FilterFacets>;
}
