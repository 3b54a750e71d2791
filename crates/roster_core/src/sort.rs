//! Stable column ordering for the filtered view.

use std::cmp::Ordering;

use shared::domain::{Employee, SortColumn, SortState};

fn compare_by(column: SortColumn, a: &Employee, b: &Employee) -> Ordering {
    match column {
        SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortColumn::Role => a.role.to_lowercase().cmp(&b.role.to_lowercase()),
        SortColumn::Score => a.score.cmp(&b.score),
    }
}

/// Returns a new sequence ordered by `column`. Equal keys keep their input order in
/// both directions; `None` leaves the input order untouched.
pub fn sort(records: &[Employee], column: Option<SortColumn>, ascending: bool) -> Vec<Employee> {
    let mut sorted = records.to_vec();
    let Some(column) = column else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ordering = compare_by(column, a, b);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    sorted
}

pub fn apply_sort(records: &[Employee], state: SortState) -> Vec<Employee> {
    sort(records, state.column, state.ascending)
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
