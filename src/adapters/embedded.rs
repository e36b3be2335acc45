use crate::domain::model::Dataset;
use crate::domain::ports::DatasetSource;
use crate::utils::error::Result;

const SAMPLE_EMPLOYEES: &str = include_str!("../../data/sample_employees.json");

/// The sample dataset compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSample;

impl EmbeddedSample {
    pub fn new() -> Self {
        Self
    }

    pub fn dataset(&self) -> Result<Dataset> {
        Dataset::from_json_str(SAMPLE_EMPLOYEES)
    }
}

impl DatasetSource for EmbeddedSample {
    fn describe(&self) -> String {
        "embedded sample".to_string()
    }

    async fn load(&self) -> Result<Dataset> {
        self.dataset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_parses_with_every_column() {
        let dataset = EmbeddedSample::new().dataset().unwrap();
        assert_eq!(dataset.len(), 1);

        let employee = &dataset.records()[0];
        assert_eq!(employee.user_code, "VIPL2SP24054");
        assert_eq!(employee.city, "Chennai");
        assert_eq!(employee.department, "NA");
        assert_eq!(employee.fdc_level, "Manager");
        assert_eq!(employee.field("UserLogCount"), Some("64"));
        assert_eq!(employee.field("UpdatedBy"), Some("ExcelImport-Update"));
    }
}
