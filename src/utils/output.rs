use crate::core::engine::QueryOutcome;
use crate::domain::model::{Employee, FilterFacets};
use crate::utils::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Typed columns written by CSV/TSV output. Columns carried in
/// `Employee::extra` are only written when `RenderOptions::all_columns` is set.
pub const CSV_COLUMNS: [&str; 16] = [
    "User Code",
    "User FirstName",
    "User SurName",
    "User Email",
    "User MobileNumber",
    "Reporting Authority Name",
    "Reporting Authority Email",
    "Gender",
    "User Date Of Jog",
    "City",
    "Department",
    "FDC Level",
    "EmployeeStatus",
    "Title",
    "Firm",
    "OFFICE",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub const ALL: [&'static str; 3] = ["json", "csv", "tsv"];

    fn delimiter(self) -> u8 {
        match self {
            OutputFormat::Tsv => b'\t',
            _ => b',',
        }
    }
}

impl FromStr for OutputFormat {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(DirectoryError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::ALL.join(", ")),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub all_columns: bool,
}

/// 依輸出格式產生查詢結果文字
pub fn render(outcome: &QueryOutcome, options: RenderOptions) -> Result<String> {
    let delimiter = options.format.delimiter();
    match options.format {
        OutputFormat::Json if options.pretty => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
        OutputFormat::Csv | OutputFormat::Tsv => match outcome {
            QueryOutcome::Employees(records) => {
                render_records(records, delimiter, options.all_columns)
            }
            QueryOutcome::Employee(found) => {
                render_records(found.as_slice(), delimiter, options.all_columns)
            }
            QueryOutcome::Facets(facets) => render_facets(facets, delimiter),
        },
    }
}

// 額外欄位依名稱排序，接在固定欄位之後
fn columns_for(records: &[Employee], all_columns: bool) -> Vec<&str> {
    let mut columns: Vec<&str> = CSV_COLUMNS.to_vec();
    if all_columns {
        let extra: BTreeSet<&str> = records
            .iter()
            .flat_map(|employee| employee.extra.keys().map(String::as_str))
            .collect();
        columns.extend(extra);
    }
    columns
}

fn render_records(records: &[Employee], delimiter: u8, all_columns: bool) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    let columns = columns_for(records, all_columns);
    writer.write_record(&columns)?;
    for employee in records {
        writer.write_record(
            columns
                .iter()
                .map(|column| employee.field(column).unwrap_or_default()),
        )?;
    }

    finish(writer)
}

fn render_facets(facets: &FilterFacets, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["facet", "value"])?;
    let groups = [
        ("cities", &facets.cities),
        ("departments", &facets.departments),
        ("fdcLevels", &facets.fdc_levels),
        ("employeeStatuses", &facets.employee_statuses),
    ];
    for (facet, values) in groups {
        for value in values {
            writer.write_record([facet, value.as_str()])?;
        }
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| DirectoryError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| DirectoryError::DatasetError {
        message: format!("Rendered output is not UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(format: OutputFormat) -> RenderOptions {
        RenderOptions {
            format,
            ..Default::default()
        }
    }

    fn employee() -> Employee {
        Employee {
            user_code: "VIPL2SP24054".to_string(),
            first_name: "Yuvarani".to_string(),
            city: "Chennai".to_string(),
            firm: "Ernst & Young LLP".to_string(),
            office: "Chennai - Tidel Park".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("tsv".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().to_string(), "json");
    }

    #[test]
    fn test_render_csv_has_header_and_rows() {
        let outcome = QueryOutcome::Employees(vec![employee()]);
        let csv = render(&outcome, options(OutputFormat::Csv)).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("User Code,User FirstName,User SurName"));
        assert!(lines[1].starts_with("VIPL2SP24054,Yuvarani,"));
        assert!(lines[1].ends_with("Ernst & Young LLP,Chennai - Tidel Park"));
    }

    #[test]
    fn test_render_tsv_for_missing_employee_is_header_only() {
        let outcome = QueryOutcome::Employee(None);
        let tsv = render(&outcome, options(OutputFormat::Tsv)).unwrap();
        assert_eq!(tsv.lines().count(), 1);
        assert!(tsv.starts_with("User Code\tUser FirstName"));
    }

    #[test]
    fn test_render_facets() {
        let facets = FilterFacets {
            cities: vec!["Chennai".to_string()],
            fdc_levels: vec!["Manager".to_string(), "NA".to_string()],
            ..Default::default()
        };
        let outcome = QueryOutcome::Facets(facets);

        let csv = render(&outcome, options(OutputFormat::Csv)).unwrap();
        assert_eq!(
            csv,
            "facet,value\ncities,Chennai\nfdcLevels,Manager\nfdcLevels,NA\n"
        );

        let json = render(&outcome, options(OutputFormat::Json)).unwrap();
        assert_eq!(
            json,
            r#"{"cities":["Chennai"],"departments":[],"fdcLevels":["Manager","NA"],"employeeStatuses":[]}"#
        );
    }

    #[test]
    fn test_all_columns_appends_extra_fields() {
        let mut first = employee();
        first.extra.insert("UserLogCount".to_string(), "64".to_string());
        first.extra.insert("GRADE".to_string(), "1".to_string());
        let mut second = employee();
        second.user_code = "VIPL3MR25018".to_string();
        second.extra.insert("Big4".to_string(), "NA".to_string());
        let outcome = QueryOutcome::Employees(vec![first, second]);

        let typed = render(&outcome, options(OutputFormat::Csv)).unwrap();
        assert!(!typed.contains("UserLogCount"));

        let all = render(
            &outcome,
            RenderOptions {
                format: OutputFormat::Csv,
                all_columns: true,
                ..Default::default()
            },
        )
        .unwrap();
        let lines: Vec<_> = all.lines().collect();
        assert!(lines[0].ends_with(",OFFICE,Big4,GRADE,UserLogCount"));
        assert!(lines[1].ends_with(",Chennai - Tidel Park,,1,64"));
        assert!(lines[2].ends_with(",Chennai - Tidel Park,NA,,"));
    }
}
