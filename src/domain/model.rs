use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel the source data uses for "value not available".
pub const NOT_AVAILABLE: &str = "NA";

/// One employee record.
///
/// Field names on the wire are the original column headers ("User Code",
/// "FDC Level", ...). Keys the directory never reads are kept verbatim in
/// `extra`. Missing keys deserialize to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(rename = "User Code")]
    pub user_code: String,
    #[serde(rename = "User FirstName")]
    pub first_name: String,
    #[serde(rename = "User SurName")]
    pub surname: String,
    #[serde(rename = "User Email")]
    pub email: String,
    #[serde(rename = "User MobileNumber")]
    pub mobile_number: String,
    #[serde(rename = "Reporting Authority Name")]
    pub reporting_authority_name: String,
    #[serde(rename = "Reporting Authority Email")]
    pub reporting_authority_email: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "User Date Of Jog")]
    pub date_of_joining: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "FDC Level")]
    pub fdc_level: String,
    #[serde(rename = "EmployeeStatus")]
    pub employee_status: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Firm")]
    pub firm: String,
    #[serde(rename = "OFFICE")]
    pub office: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
            .trim()
            .to_string()
    }

    /// 依原始欄位名稱取值，包含 `extra` 中的欄位
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "User Code" => &self.user_code,
            "User FirstName" => &self.first_name,
            "User SurName" => &self.surname,
            "User Email" => &self.email,
            "User MobileNumber" => &self.mobile_number,
            "Reporting Authority Name" => &self.reporting_authority_name,
            "Reporting Authority Email" => &self.reporting_authority_email,
            "Gender" => &self.gender,
            "User Date Of Jog" => &self.date_of_joining,
            "City" => &self.city,
            "Department" => &self.department,
            "FDC Level" => &self.fdc_level,
            "EmployeeStatus" => &self.employee_status,
            "Title" => &self.title,
            "Firm" => &self.firm,
            "OFFICE" => &self.office,
            other => return self.extra.get(other).map(String::as_str),
        };
        Some(value.as_str())
    }
}

/// Criteria for `filter_employees`. Every present criterion must match
/// exactly; absent (or empty) criteria impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fdc_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_status: Option<String>,
}

impl EmployeeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_fdc_level(mut self, fdc_level: impl Into<String>) -> Self {
        self.fdc_level = Some(fdc_level.into());
        self
    }

    pub fn with_employee_status(mut self, status: impl Into<String>) -> Self {
        self.employee_status = Some(status.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.city,
            &self.department,
            &self.fdc_level,
            &self.employee_status,
        ]
        .iter()
        .all(|criterion| criterion.as_deref().map_or(true, str::is_empty))
    }
}

/// Distinct observed values per filterable field, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterFacets {
    pub cities: Vec<String>,
    pub departments: Vec<String>,
    pub fdc_levels: Vec<String>,
    pub employee_statuses: Vec<String>,
}

/// The immutable, ordered set of records a directory answers from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Employee>,
}

impl Dataset {
    pub fn new(records: Vec<Employee>) -> Self {
        Self { records }
    }

    /// 解析 JSON 陣列格式的員工資料
    pub fn from_json_str(content: &str) -> crate::utils::error::Result<Self> {
        let records: Vec<Employee> = serde_json::from_str(content)?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
