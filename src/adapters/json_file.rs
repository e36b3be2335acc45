use crate::domain::model::Dataset;
use crate::domain::ports::DatasetSource;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// A JSON array of employee records on local disk.
#[derive(Debug, Clone)]
pub struct LocalJsonFile {
    path: PathBuf,
}

impl LocalJsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for LocalJsonFile {
    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }

    async fn load(&self) -> Result<Dataset> {
        tracing::debug!("Reading employee records from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        Dataset::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DirectoryError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_reads_records_in_file_order() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"User Code": "B", "City": "Mumbai"},
                {"User Code": "A", "City": "Delhi"}
            ]"#,
        )
        .unwrap();

        let dataset = LocalJsonFile::new(file.path()).load().await.unwrap();
        let codes: Vec<_> = dataset.iter().map(|e| e.user_code.as_str()).collect();
        assert_eq!(codes, vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_load_reports_missing_and_malformed_files() {
        let missing = LocalJsonFile::new("/definitely/not/here/employees.json");
        assert!(matches!(
            missing.load().await,
            Err(DirectoryError::IoError(_))
        ));

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[{\"User Code\": ").unwrap();
        let malformed = LocalJsonFile::new(file.path());
        assert!(matches!(
            malformed.load().await,
            Err(DirectoryError::SerializationError(_))
        ));
    }
}
