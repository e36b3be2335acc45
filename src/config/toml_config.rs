use crate::adapters::{EmbeddedSample, LocalJsonFile};
use crate::config::ConfiguredSource;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::output::{OutputFormat, RenderOptions};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub directory: DirectorySection,
    pub source: SourceConfig,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorySection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Embedded,
    JsonFile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: SourceType,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub pretty: Option<bool>,
    pub all_columns: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            directory: DirectorySection {
                name: "employee-directory".to_string(),
                description: None,
            },
            source: SourceConfig {
                r#type: SourceType::Embedded,
                path: None,
            },
            output: None,
            logging: None,
        }
    }
}

impl DirectoryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EMPLOYEE_DATA})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("directory.name", &self.directory.name)?;

        if self.source.r#type == SourceType::JsonFile {
            let path = validation::validate_required_field("source.path", &self.source.path)?;
            validation::validate_path("source.path", path)?;
        }

        // 格式名稱不分大小寫，與 output_format() 的解析一致
        self.output_format()?;

        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", &level.to_ascii_lowercase(), &LOG_LEVELS)?;
        }

        Ok(())
    }

    /// 建立對應的資料來源
    pub fn source(&self) -> Result<ConfiguredSource> {
        match self.source.r#type {
            SourceType::Embedded => Ok(ConfiguredSource::Embedded(EmbeddedSample::new())),
            SourceType::JsonFile => {
                let path = validation::validate_required_field("source.path", &self.source.path)?;
                Ok(ConfiguredSource::JsonFile(LocalJsonFile::new(path)))
            }
        }
    }

    /// 改用指定的 JSON 檔案作為資料來源
    pub fn use_json_file(&mut self, path: impl Into<String>) {
        self.source = SourceConfig {
            r#type: SourceType::JsonFile,
            path: Some(path.into()),
        };
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some(format) => format.parse(),
            None => Ok(OutputFormat::default()),
        }
    }

    pub fn set_output_format(&mut self, format: impl Into<String>) {
        self.output.get_or_insert_with(OutputConfig::default).format = Some(format.into());
    }

    pub fn pretty(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.pretty)
            .unwrap_or(false)
    }

    pub fn set_pretty(&mut self, pretty: bool) {
        self.output.get_or_insert_with(OutputConfig::default).pretty = Some(pretty);
    }

    pub fn all_columns(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.all_columns)
            .unwrap_or(false)
    }

    pub fn set_all_columns(&mut self, all_columns: bool) {
        self.output.get_or_insert_with(OutputConfig::default).all_columns = Some(all_columns);
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        Ok(RenderOptions {
            format: self.output_format()?,
            pretty: self.pretty(),
            all_columns: self.all_columns(),
        })
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
