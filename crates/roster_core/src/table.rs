//! Display structure projected from the filtered and sorted records.

use serde::Serialize;
use shared::{
    domain::{Employee, EmployeeId, PerformanceTier, SortColumn, SortState},
    protocol::RosterCommand,
};

pub const ACTIONS_HEADER: &str = "Actions";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub label: &'static str,
    /// `None` for the non-sortable actions column.
    pub column: Option<SortColumn>,
    pub indicator: Option<&'static str>,
}

impl HeaderCell {
    pub fn text(&self) -> String {
        format!("{}{}", self.label, self.indicator.unwrap_or_default())
    }

    pub fn activate(&self) -> Option<RosterCommand> {
        self.column.map(|column| RosterCommand::SortBy { column })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 2] = [RowAction::Edit, RowAction::Delete];

    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            RowAction::Edit => "edit-btn",
            RowAction::Delete => "delete-btn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub score: u8,
    pub tier: PerformanceTier,
}

impl TableRow {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            role: employee.role.clone(),
            score: employee.score,
            tier: PerformanceTier::from_score(employee.score),
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.tier.class_name()
    }

    pub fn command_for(&self, action: RowAction) -> RosterCommand {
        match action {
            RowAction::Edit => RosterCommand::OpenEditor {
                employee_id: Some(self.id),
            },
            RowAction::Delete => RosterCommand::RequestDelete {
                employee_id: self.id,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn build(records: &[Employee], sort: SortState) -> Self {
        let mut headers: Vec<HeaderCell> = SortColumn::ALL
            .into_iter()
            .map(|column| HeaderCell {
                label: column.label(),
                column: Some(column),
                indicator: sort.indicator(column),
            })
            .collect();
        headers.push(HeaderCell {
            label: ACTIONS_HEADER,
            column: None,
            indicator: None,
        });

        Self {
            headers,
            rows: records.iter().map(TableRow::from_employee).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
