//! Dashboard status and error modeling for the desktop GUI controller.

use roster_core::{CommandOutcome, EditTarget};
use shared::error::{ErrorCode, RosterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    NotFound,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Startup,
    SubmitEmployee,
    DeleteEmployee,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_roster_error(context: UiErrorContext, err: &RosterError) -> Self {
        let category = match err.code() {
            ErrorCode::Validation => UiErrorCategory::Validation,
            ErrorCode::NotFound => UiErrorCategory::NotFound,
            ErrorCode::InvalidState => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Unknown,
            context,
            message: message.into(),
        }
    }

    /// Validation failures block until acknowledged; the form stays open behind them.
    pub fn is_blocking(&self) -> bool {
        self.category == UiErrorCategory::Validation
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::NotFound => "Not found",
        UiErrorCategory::Unknown => "Error",
    }
}

pub fn context_for_command_name(command: &str) -> UiErrorContext {
    match command {
        "submit_editor" => UiErrorContext::SubmitEmployee,
        "request_delete" | "confirm_delete" => UiErrorContext::DeleteEmployee,
        _ => UiErrorContext::General,
    }
}

/// Status line text after a successful command, if the outcome is worth reporting.
pub fn status_for_outcome(outcome: &CommandOutcome) -> Option<String> {
    match outcome {
        CommandOutcome::Committed(employee) => {
            Some(format!("Saved {} (score {})", employee.name, employee.score))
        }
        CommandOutcome::Deleted(employee) => Some(format!("Deleted {}", employee.name)),
        CommandOutcome::EditorOpened(EditTarget::Existing(id)) => {
            Some(format!("Editing employee #{id}"))
        }
        CommandOutcome::DeleteDismissed => Some("Delete cancelled".to_string()),
        CommandOutcome::ViewChanged
        | CommandOutcome::EditorOpened(EditTarget::New)
        | CommandOutcome::EditorClosed
        | CommandOutcome::DeletePending(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::{Employee, EmployeeId};

    #[test]
    fn validation_errors_block() {
        let err = UiError::from_roster_error(
            UiErrorContext::SubmitEmployee,
            &RosterError::validation("Score must be between 0 and 100"),
        );
        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert!(err.is_blocking());
        assert_eq!(err.message(), "Score must be between 0 and 100");
    }

    #[test]
    fn stale_references_are_not_blocking() {
        let err = UiError::from_roster_error(
            UiErrorContext::DeleteEmployee,
            &RosterError::NotFound(EmployeeId(9)),
        );
        assert_eq!(err.category(), UiErrorCategory::NotFound);
        assert!(!err.is_blocking());
        assert_eq!(err_label(err.category()), "Not found");
    }

    #[test]
    fn maps_command_names_to_contexts() {
        assert_eq!(
            context_for_command_name("submit_editor"),
            UiErrorContext::SubmitEmployee
        );
        assert_eq!(
            context_for_command_name("confirm_delete"),
            UiErrorContext::DeleteEmployee
        );
        assert_eq!(context_for_command_name("sort_by"), UiErrorContext::General);
    }

    #[test]
    fn reports_commits_and_deletes() {
        let employee = Employee {
            id: EmployeeId(5),
            name: "Zed".to_string(),
            role: "Tester".to_string(),
            score: 80,
        };
        assert_eq!(
            status_for_outcome(&CommandOutcome::Committed(employee.clone())).as_deref(),
            Some("Saved Zed (score 80)")
        );
        assert_eq!(
            status_for_outcome(&CommandOutcome::Deleted(employee)).as_deref(),
            Some("Deleted Zed")
        );
        assert_eq!(status_for_outcome(&CommandOutcome::ViewChanged), None);
    }
}
