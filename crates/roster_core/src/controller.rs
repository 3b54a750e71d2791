//! Roster controller: owns the store plus filter/sort/edit state and applies view commands.

use shared::{
    domain::{Employee, EmployeeDraft, EmployeeId, RoleFilter, SortColumn, SortState},
    error::{RosterError, RosterResult},
    protocol::RosterCommand,
};
use tracing::{debug, info, warn};

use crate::{
    filter::apply_filters,
    sort::apply_sort,
    store::{parse_score, RecordStore},
    summary::{summarize, Summary},
    table::TableView,
};

pub const DELETE_CONFIRMATION_PROMPT: &str = "Are you sure you want to delete this employee?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(EmployeeId),
}

impl EditTarget {
    pub fn title(self) -> &'static str {
        match self {
            EditTarget::New => "Add Employee",
            EditTarget::Existing(_) => "Edit Employee",
        }
    }

    pub fn employee_id(self) -> Option<EmployeeId> {
        match self {
            EditTarget::New => None,
            EditTarget::Existing(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditContext {
    #[default]
    Idle,
    Editing {
        target: EditTarget,
        draft: EmployeeDraft,
    },
}

impl EditContext {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditContext::Editing { .. })
    }

    pub fn target(&self) -> Option<EditTarget> {
        match self {
            EditContext::Idle => None,
            EditContext::Editing { target, .. } => Some(*target),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub employee_id: EmployeeId,
    pub name: String,
}

impl PendingDelete {
    pub fn prompt(&self) -> &'static str {
        DELETE_CONFIRMATION_PROMPT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    ViewChanged,
    EditorOpened(EditTarget),
    EditorClosed,
    Committed(Employee),
    DeletePending(EmployeeId),
    Deleted(Employee),
    DeleteDismissed,
}

/// Everything a renderer needs for one frame, derived from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterView {
    pub table: TableView,
    pub summary: Summary,
    pub roles: Vec<String>,
    pub role_filter: RoleFilter,
    pub search: String,
    pub sort: SortState,
    pub edit: EditContext,
    pub pending_delete: Option<PendingDelete>,
}

#[derive(Debug, Clone)]
pub struct RosterController {
    store: RecordStore,
    search: String,
    role_filter: RoleFilter,
    sort: SortState,
    roles: Vec<String>,
    edit: EditContext,
    pending_delete: Option<PendingDelete>,
    confirm_deletes: bool,
}

impl Default for RosterController {
    fn default() -> Self {
        Self::new(RecordStore::default())
    }
}

impl RosterController {
    pub fn new(store: RecordStore) -> Self {
        let roles = store.roles();
        Self {
            store,
            search: String::new(),
            role_filter: RoleFilter::All,
            sort: SortState::default(),
            roles,
            edit: EditContext::Idle,
            pending_delete: None,
            confirm_deletes: true,
        }
    }

    /// When disabled, delete requests skip the confirmation step.
    pub fn with_delete_confirmation(mut self, enabled: bool) -> Self {
        self.confirm_deletes = enabled;
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn role_filter(&self) -> &RoleFilter {
        &self.role_filter
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn edit_context(&self) -> &EditContext {
        &self.edit
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_role_filter(&mut self, filter: RoleFilter) {
        self.role_filter = match filter {
            RoleFilter::Only(role) if role.is_empty() => RoleFilter::All,
            other => other,
        };
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort.toggle(column);
    }

    pub fn open(&mut self, record: Option<&Employee>) -> EditTarget {
        let (target, draft) = match record {
            Some(employee) => (
                EditTarget::Existing(employee.id),
                EmployeeDraft::from_employee(employee),
            ),
            None => (EditTarget::New, EmployeeDraft::default()),
        };
        self.edit = EditContext::Editing { target, draft };
        target
    }

    pub fn open_by_id(&mut self, employee_id: Option<EmployeeId>) -> RosterResult<EditTarget> {
        match employee_id {
            None => Ok(self.open(None)),
            Some(id) => {
                let employee = self.store.get(id).cloned().ok_or(RosterError::NotFound(id))?;
                Ok(self.open(Some(&employee)))
            }
        }
    }

    /// Discards the edit context. Returns whether a form was open.
    pub fn cancel(&mut self) -> bool {
        let was_editing = self.edit.is_editing();
        self.edit = EditContext::Idle;
        was_editing
    }

    /// Parses and commits form input. Validation failures leave the store untouched and the
    /// form open with the rejected input; a stale target closes the form.
    pub fn submit(
        &mut self,
        employee_id: Option<EmployeeId>,
        name: &str,
        role: &str,
        score_text: &str,
    ) -> RosterResult<Employee> {
        let result = parse_score(score_text).and_then(|score| match employee_id {
            Some(id) => self.store.update(id, name, role, score),
            None => self.store.create(name, role, score),
        });

        match result {
            Ok(employee) => {
                info!(
                    employee_id = employee.id.0,
                    updated = employee_id.is_some(),
                    "committed employee"
                );
                self.after_store_change();
                self.edit = EditContext::Idle;
                Ok(employee)
            }
            Err(err @ RosterError::NotFound(_)) => {
                warn!(%err, "submit target no longer exists");
                self.edit = EditContext::Idle;
                Err(err)
            }
            Err(err) => {
                warn!(%err, "rejected employee submission");
                if let EditContext::Editing { draft, .. } = &mut self.edit {
                    *draft = EmployeeDraft::new(name, role, score_text);
                }
                Err(err)
            }
        }
    }

    pub fn submit_current(
        &mut self,
        name: &str,
        role: &str,
        score_text: &str,
    ) -> RosterResult<Employee> {
        let target = self.edit.target().ok_or(RosterError::NoActiveEditor)?;
        self.submit(target.employee_id(), name, role, score_text)
    }

    pub fn request_delete(&mut self, employee_id: EmployeeId) -> RosterResult<CommandOutcome> {
        let name = self
            .store
            .get(employee_id)
            .map(|employee| employee.name.clone())
            .ok_or(RosterError::NotFound(employee_id))?;

        if !self.confirm_deletes {
            return self.delete(employee_id).map(CommandOutcome::Deleted);
        }

        self.pending_delete = Some(PendingDelete { employee_id, name });
        Ok(CommandOutcome::DeletePending(employee_id))
    }

    pub fn confirm_delete(&mut self) -> RosterResult<Employee> {
        let pending = self
            .pending_delete
            .take()
            .ok_or(RosterError::NoPendingDelete)?;
        self.delete(pending.employee_id)
    }

    pub fn dismiss_delete(&mut self) -> bool {
        self.pending_delete.take().is_some()
    }

    fn delete(&mut self, employee_id: EmployeeId) -> RosterResult<Employee> {
        match self.store.delete(employee_id) {
            Ok(employee) => {
                info!(employee_id = employee.id.0, "deleted employee");
                self.after_store_change();
                Ok(employee)
            }
            Err(err) => {
                warn!(%err, "delete target no longer exists");
                Err(err)
            }
        }
    }

    /// Recomputes the role set; a selected role that vanished falls back to all roles.
    fn after_store_change(&mut self) {
        self.roles = self.store.roles();
        if let Some(role) = self.role_filter.role() {
            if !self.roles.iter().any(|r| r == role) {
                debug!(role, "selected role no longer present; showing all roles");
                self.role_filter = RoleFilter::All;
            }
        }
        if let EditContext::Editing {
            target: EditTarget::Existing(id),
            ..
        } = self.edit
        {
            if self.store.get(id).is_none() {
                self.edit = EditContext::Idle;
            }
        }
    }

    /// Filtered then sorted records currently on display.
    pub fn visible_records(&self) -> Vec<Employee> {
        let filtered = apply_filters(self.store.records(), &self.search, &self.role_filter);
        apply_sort(&filtered, self.sort)
    }

    pub fn summary(&self) -> Summary {
        summarize(self.store.records())
    }

    pub fn view(&self) -> RosterView {
        RosterView {
            table: TableView::build(&self.visible_records(), self.sort),
            summary: self.summary(),
            roles: self.roles.clone(),
            role_filter: self.role_filter.clone(),
            search: self.search.clone(),
            sort: self.sort,
            edit: self.edit.clone(),
            pending_delete: self.pending_delete.clone(),
        }
    }

    pub fn apply(&mut self, command: RosterCommand) -> RosterResult<CommandOutcome> {
        debug!(command = command.name(), "applying roster command");
        match command {
            RosterCommand::SetSearch { text } => {
                self.set_search(text);
                Ok(CommandOutcome::ViewChanged)
            }
            RosterCommand::SetRoleFilter { filter } => {
                self.set_role_filter(filter);
                Ok(CommandOutcome::ViewChanged)
            }
            RosterCommand::SortBy { column } => {
                self.sort_by(column);
                Ok(CommandOutcome::ViewChanged)
            }
            RosterCommand::OpenEditor { employee_id } => self
                .open_by_id(employee_id)
                .map(CommandOutcome::EditorOpened),
            RosterCommand::SubmitEditor { name, role, score } => self
                .submit_current(&name, &role, &score)
                .map(CommandOutcome::Committed),
            RosterCommand::CancelEditor => {
                self.cancel();
                Ok(CommandOutcome::EditorClosed)
            }
            RosterCommand::RequestDelete { employee_id } => self.request_delete(employee_id),
            RosterCommand::ConfirmDelete => self.confirm_delete().map(CommandOutcome::Deleted),
            RosterCommand::DismissDelete => {
                self.dismiss_delete();
                Ok(CommandOutcome::DeleteDismissed)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
