//! Pure, synchronous query functions over a slice of records.
//!
//! The async directory implementations delegate here so the matching rules
//! live in one place.

use crate::domain::model::{Employee, EmployeeFilter, FilterFacets, NOT_AVAILABLE};
use std::collections::HashSet;

/// First record whose code matches exactly (case-sensitive).
pub fn find_by_code<'a>(records: &'a [Employee], code: &str) -> Option<&'a Employee> {
    records.iter().find(|employee| employee.user_code == code)
}

/// Records whose first name, surname or email contains `term`, ignoring case.
/// An empty term matches every record.
pub fn search<'a>(records: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|employee| {
            [&employee.first_name, &employee.surname, &employee.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Records satisfying every criterion present in `filters`.
pub fn filter<'a>(records: &'a [Employee], filters: &EmployeeFilter) -> Vec<&'a Employee> {
    if filters.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|employee| {
            criterion_matches(&filters.city, &employee.city)
                && criterion_matches(&filters.department, &employee.department)
                && criterion_matches(&filters.fdc_level, &employee.fdc_level)
                && criterion_matches(&filters.employee_status, &employee.employee_status)
        })
        .collect()
}

// 空字串與未設定同樣不構成條件
fn criterion_matches(criterion: &Option<String>, value: &str) -> bool {
    match criterion.as_deref() {
        None | Some("") => true,
        Some(expected) => expected == value,
    }
}

/// Distinct values for the four filterable fields.
///
/// "NA" is dropped from cities and departments only; FDC levels and statuses
/// keep it.
pub fn facets(records: &[Employee]) -> FilterFacets {
    FilterFacets {
        cities: distinct(records.iter().map(|e| e.city.as_str()), true),
        departments: distinct(records.iter().map(|e| e.department.as_str()), true),
        fdc_levels: distinct(records.iter().map(|e| e.fdc_level.as_str()), false),
        employee_statuses: distinct(records.iter().map(|e| e.employee_status.as_str()), false),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>, skip_not_available: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| !(skip_not_available && *value == NOT_AVAILABLE))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// First record whose first name or surname contains `name`, ignoring case.
pub fn find_by_name<'a>(records: &'a [Employee], name: &str) -> Option<&'a Employee> {
    let needle = name.to_lowercase();
    records
        .iter()
        .find(|employee| name_contains(employee, &needle))
}

/// `needle` must already be lowercase.
pub fn name_contains(employee: &Employee, needle: &str) -> bool {
    employee.first_name.to_lowercase().contains(needle)
        || employee.surname.to_lowercase().contains(needle)
}

/// First record whose code matches `code` ignoring ASCII case.
pub fn find_by_code_ignore_case<'a>(records: &'a [Employee], code: &str) -> Option<&'a Employee> {
    records
        .iter()
        .find(|employee| employee.user_code.eq_ignore_ascii_case(code))
}

/// First record whose first name or surname appears in `message`.
///
/// `message` must already be lowercase. Blank names never match.
pub fn mentioned_in<'a>(records: &'a [Employee], message: &str) -> Option<&'a Employee> {
    records.iter().find(|employee| {
        [&employee.first_name, &employee.surname]
            .iter()
            .map(|name| name.trim().to_lowercase())
            .any(|name| !name.is_empty() && message.contains(&name))
    })
}
