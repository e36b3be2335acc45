use crate::domain::model::Employee;
use std::fmt;

/// Human-readable renderings of a single employee record.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeProfile<'a> {
    employee: &'a Employee,
}

impl<'a> EmployeeProfile<'a> {
    pub fn new(employee: &'a Employee) -> Self {
        Self { employee }
    }

    /// Multi-line card for terminals and chat front ends.
    pub fn card(&self) -> String {
        let e = self.employee;
        let mut lines = vec![
            e.full_name(),
            String::new(),
            format!("Email: {}", e.email),
            format!("Mobile: {}", e.mobile_number),
            format!("Code: {}", e.user_code),
            String::new(),
            "Work Details:".to_string(),
            format!("  Title: {}", e.title),
            format!("  Department: {}", e.department),
            format!("  Office: {}", e.office),
            format!("  City: {}", e.city),
        ];

        if !e.reporting_authority_name.is_empty() {
            lines.push(format!(
                "  Reports to: {} ({})",
                e.reporting_authority_name, e.reporting_authority_email
            ));
        }

        lines.push(format!("  Joined: {}", e.date_of_joining));
        lines.push(String::new());
        lines.push(format!("Status: {}", e.employee_status));
        lines.join("\n")
    }

    /// One paragraph suitable for speech synthesis.
    pub fn spoken(&self) -> String {
        let e = self.employee;
        format!(
            "Here's the information for {}. Email: {}. Mobile: {}. Employee Code: {}. \
             Title: {} in {}. Office: {} in {}. Reports to: {}. Joined on: {}. Status: {}.",
            e.full_name(),
            e.email,
            e.mobile_number,
            e.user_code,
            e.title,
            e.department,
            e.office,
            e.city,
            e.reporting_authority_name,
            e.date_of_joining,
            e.employee_status
        )
    }
}

impl fmt::Display for EmployeeProfile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.card())
    }
}
