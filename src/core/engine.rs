use crate::core::directory::InMemoryDirectory;
use crate::core::query::name_contains;
use crate::domain::model::{Employee, EmployeeFilter, FilterFacets};
use crate::domain::ports::EmployeeDirectory;
use crate::utils::error::Result;
use serde::Serialize;

/// A single request against a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    All,
    ByCode(String),
    Search(String),
    Filter(EmployeeFilter),
    Options,
    ByName(String),
}

impl Query {
    pub fn name(&self) -> &'static str {
        match self {
            Query::All => "all",
            Query::ByCode(_) => "by_code",
            Query::Search(_) => "search",
            Query::Filter(_) => "filter",
            Query::Options => "options",
            Query::ByName(_) => "by_name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    Employees(Vec<Employee>),
    Employee(Option<Employee>),
    Facets(FilterFacets),
}

impl QueryOutcome {
    pub fn record_count(&self) -> usize {
        match self {
            QueryOutcome::Employees(records) => records.len(),
            QueryOutcome::Employee(found) => usize::from(found.is_some()),
            QueryOutcome::Facets(_) => 0,
        }
    }
}

/// Runs queries through any `EmployeeDirectory` implementation.
pub struct QueryEngine<D: EmployeeDirectory> {
    directory: D,
}

impl<D: EmployeeDirectory> QueryEngine<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub async fn run(&self, query: Query) -> Result<QueryOutcome> {
        tracing::debug!("Running {} query: {:?}", query.name(), query);

        let outcome = match query {
            Query::All => QueryOutcome::Employees(self.directory.get_all_employees().await?),
            Query::ByCode(code) => {
                QueryOutcome::Employee(self.directory.get_employee_by_code(&code).await?)
            }
            Query::Search(term) => {
                QueryOutcome::Employees(self.directory.search_employees(&term).await?)
            }
            Query::Filter(filters) => {
                QueryOutcome::Employees(self.directory.filter_employees(&filters).await?)
            }
            Query::Options => QueryOutcome::Facets(self.directory.get_filter_options().await?),
            // 名稱查詢不在共用介面上，改用搜尋結果的第一筆姓名相符者
            Query::ByName(name) => {
                let needle = name.to_lowercase();
                let found = self
                    .directory
                    .search_employees(&name)
                    .await?
                    .into_iter()
                    .find(|employee| name_contains(employee, &needle));
                QueryOutcome::Employee(found)
            }
        };

        tracing::debug!("Query returned {} records", outcome.record_count());
        Ok(outcome)
    }
}

impl QueryEngine<InMemoryDirectory> {
    pub fn dataset_size(&self) -> usize {
        self.directory.dataset().len()
    }
}
