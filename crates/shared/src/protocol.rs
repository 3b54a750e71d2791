//! Commands a view adapter sends to the roster controller.

use serde::{Deserialize, Serialize};

use crate::domain::{EmployeeId, RoleFilter, SortColumn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum RosterCommand {
    SetSearch {
        text: String,
    },
    SetRoleFilter {
        filter: RoleFilter,
    },
    SortBy {
        column: SortColumn,
    },
    OpenEditor {
        employee_id: Option<EmployeeId>,
    },
    SubmitEditor {
        name: String,
        role: String,
        score: String,
    },
    CancelEditor,
    RequestDelete {
        employee_id: EmployeeId,
    },
    ConfirmDelete,
    DismissDelete,
}

impl RosterCommand {
    pub fn name(&self) -> &'static str {
        match self {
            RosterCommand::SetSearch { .. } => "set_search",
            RosterCommand::SetRoleFilter { .. } => "set_role_filter",
            RosterCommand::SortBy { .. } => "sort_by",
            RosterCommand::OpenEditor { .. } => "open_editor",
            RosterCommand::SubmitEditor { .. } => "submit_editor",
            RosterCommand::CancelEditor => "cancel_editor",
            RosterCommand::RequestDelete { .. } => "request_delete",
            RosterCommand::ConfirmDelete => "confirm_delete",
            RosterCommand::DismissDelete => "dismiss_delete",
        }
    }

    /// Whether the command can change the record store.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            RosterCommand::SubmitEditor { .. } | RosterCommand::ConfirmDelete
        )
    }
}
