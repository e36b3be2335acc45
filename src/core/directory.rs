use crate::core::query;
use crate::domain::model::{Dataset, Employee, EmployeeFilter, FilterFacets};
use crate::domain::ports::{DatasetSource, EmployeeDirectory};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Directory answering every query from a dataset it owns.
///
/// The dataset is fixed at construction; all operations complete
/// immediately and never return an error.
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    dataset: Dataset,
}

impl InMemoryDirectory {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub async fn from_source<S: DatasetSource>(source: &S) -> Result<Self> {
        let dataset = source.load().await?;
        tracing::info!(
            "Loaded {} employee records from {}",
            dataset.len(),
            source.describe()
        );
        Ok(Self::new(dataset))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub async fn find_employee_by_name(&self, name: &str) -> Result<Option<Employee>> {
        let found = query::find_by_name(self.dataset.records(), name).cloned();
        tracing::debug!("find_employee_by_name({:?}) -> found={}", name, found.is_some());
        Ok(found)
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryDirectory {
    async fn get_all_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.dataset.records().to_vec())
    }

    async fn get_employee_by_code(&self, code: &str) -> Result<Option<Employee>> {
        let found = query::find_by_code(self.dataset.records(), code).cloned();
        tracing::debug!("get_employee_by_code({:?}) -> found={}", code, found.is_some());
        Ok(found)
    }

    async fn search_employees(&self, term: &str) -> Result<Vec<Employee>> {
        let matched: Vec<Employee> = query::search(self.dataset.records(), term)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!("search_employees({:?}) -> {} records", term, matched.len());
        Ok(matched)
    }

    async fn filter_employees(&self, filters: &EmployeeFilter) -> Result<Vec<Employee>> {
        let matched: Vec<Employee> = query::filter(self.dataset.records(), filters)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!("filter_employees({:?}) -> {} records", filters, matched.len());
        Ok(matched)
    }

    async fn get_filter_options(&self) -> Result<FilterFacets> {
        Ok(query::facets(self.dataset.records()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedSample;
    use tokio_test::block_on;

    fn sample_directory() -> InMemoryDirectory {
        InMemoryDirectory::new(EmbeddedSample::new().dataset().unwrap())
    }

    #[test]
    fn test_sample_lookup_by_code() {
        let directory = sample_directory();

        let found = block_on(directory.get_employee_by_code("VIPL2SP24054")).unwrap();
        assert_eq!(found.unwrap().first_name, "Yuvarani");

        let missing = block_on(directory.get_employee_by_code("NOPE")).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_sample_filter_options() {
        let facets = block_on(sample_directory().get_filter_options()).unwrap();
        assert_eq!(facets.cities, vec!["Chennai"]);
        // Department 只有 "NA"，會被排除
        assert!(facets.departments.is_empty());
        assert_eq!(facets.fdc_levels, vec!["Manager"]);
        assert_eq!(facets.employee_statuses, vec!["Joined"]);
    }

    #[test]
    fn test_every_code_resolves_to_itself() {
        let directory = sample_directory();
        for employee in directory.dataset() {
            let found = block_on(directory.get_employee_by_code(&employee.user_code))
                .unwrap()
                .unwrap();
            assert_eq!(found.user_code, employee.user_code);
        }
    }

    #[test]
    fn test_queries_are_idempotent() {
        let directory = sample_directory();
        let filters = EmployeeFilter::new().with_city("Chennai");

        assert_eq!(
            block_on(directory.search_employees("sith")).unwrap(),
            block_on(directory.search_employees("sith")).unwrap()
        );
        assert_eq!(
            block_on(directory.filter_employees(&filters)).unwrap(),
            block_on(directory.filter_employees(&filters)).unwrap()
        );
        assert_eq!(
            block_on(directory.get_filter_options()).unwrap(),
            block_on(directory.get_filter_options()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_from_source_owns_loaded_dataset() {
        let directory = InMemoryDirectory::from_source(&EmbeddedSample::new())
            .await
            .unwrap();
        assert_eq!(directory.dataset().len(), 1);

        let found = directory.find_employee_by_name("YUVA").await.unwrap();
        assert_eq!(found.unwrap().user_code, "VIPL2SP24054");
    }
}
