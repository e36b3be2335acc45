use crate::config::DirectoryConfig;
use crate::core::engine::Query;
use crate::domain::model::EmployeeFilter;
use crate::utils::error::Result;
use crate::utils::output::OutputFormat;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "employee-directory")]
#[command(about = "Look up, search and filter employee records")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "JSON file with employee records")]
    pub data: Option<PathBuf>,

    #[arg(long, global = true, help = "Output format: json, csv or tsv")]
    pub format: Option<String>,

    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pub pretty: bool,

    #[arg(long, global = true, help = "Append every extra field as a CSV/TSV column")]
    pub all_columns: bool,

    #[arg(long, global = true, help = "Write logs as JSON lines")]
    pub log_json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every employee
    All,
    /// Look up an employee by user code
    Get { code: String },
    /// Search first name, surname and email
    Search { term: String },
    /// Filter by exact field values
    Filter {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        fdc_level: Option<String>,
        #[arg(long)]
        employee_status: Option<String>,
    },
    /// Distinct values for each filterable field
    Options,
    /// Find the first employee whose name contains NAME
    Find { name: String },
    /// Show a readable profile for an employee
    Profile {
        code: String,
        #[arg(long, help = "Render a single paragraph for speech output")]
        voice: bool,
    },
    /// Ask the HR assistant a free-text question
    Ask {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
        #[arg(long, help = "Print the speech form of the reply")]
        voice: bool,
    },
}

impl Command {
    /// 對應的目錄查詢；`ask` 由助理處理，沒有查詢
    pub fn to_query(&self) -> Option<Query> {
        let query = match self {
            Command::All => Query::All,
            Command::Get { code } | Command::Profile { code, .. } => Query::ByCode(code.clone()),
            Command::Search { term } => Query::Search(term.clone()),
            Command::Filter {
                city,
                department,
                fdc_level,
                employee_status,
            } => Query::Filter(EmployeeFilter {
                city: city.clone(),
                department: department.clone(),
                fdc_level: fdc_level.clone(),
                employee_status: employee_status.clone(),
            }),
            Command::Options => Query::Options,
            Command::Find { name } => Query::ByName(name.clone()),
            Command::Ask { .. } => return None,
        };
        Some(query)
    }
}

impl CliConfig {
    /// 載入 TOML 配置並套用命令列覆寫
    pub fn load_settings(&self) -> Result<DirectoryConfig> {
        self.validate()?;

        let mut settings = match &self.config {
            Some(path) => DirectoryConfig::from_file(path)?,
            None => DirectoryConfig::default(),
        };

        if let Some(data) = &self.data {
            settings.use_json_file(data.to_string_lossy());
        }
        if let Some(format) = &self.format {
            settings.set_output_format(format.to_ascii_lowercase());
        }
        if self.pretty {
            settings.set_pretty(true);
        }
        if self.all_columns {
            settings.set_all_columns(true);
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("--config", &path.to_string_lossy())?;
        }
        if let Some(path) = &self.data {
            validation::validate_path("--data", &path.to_string_lossy())?;
        }
        if let Some(format) = &self.format {
            validation::validate_one_of(
                "--format",
                &format.to_ascii_lowercase(),
                &OutputFormat::ALL,
            )?;
        }
        Ok(())
    }
}
