//! Search and role filtering over a record sequence.

use shared::domain::{Employee, RoleFilter};

/// Case-insensitive substring match on the name; the empty query matches everything.
pub fn matches_search(employee: &Employee, search_text: &str) -> bool {
    search_text.is_empty()
        || employee
            .name
            .to_lowercase()
            .contains(&search_text.to_lowercase())
}

/// Exact, case-sensitive role match; an unset or empty constraint matches everything.
pub fn matches_role(employee: &Employee, role: Option<&str>) -> bool {
    match role {
        None | Some("") => true,
        Some(role) => employee.role == role,
    }
}

/// Keeps the records passing both predicates, in input order.
pub fn filter(records: &[Employee], search_text: &str, role: Option<&str>) -> Vec<Employee> {
    records
        .iter()
        .filter(|employee| matches_search(employee, search_text) && matches_role(employee, role))
        .cloned()
        .collect()
}

pub fn apply_filters(
    records: &[Employee],
    search_text: &str,
    role_filter: &RoleFilter,
) -> Vec<Employee> {
    filter(records, search_text, role_filter.role())
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
