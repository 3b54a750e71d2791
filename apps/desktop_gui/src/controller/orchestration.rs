//! Dispatch helpers from UI actions to the roster controller.

use roster_core::{CommandOutcome, RosterController};
use shared::protocol::RosterCommand;

use crate::controller::events::{context_for_command_name, status_for_outcome, UiError};

pub fn dispatch_roster_command(
    controller: &mut RosterController,
    cmd: RosterCommand,
    status: &mut String,
) -> Result<CommandOutcome, UiError> {
    let cmd_name = cmd.name();
    let mutation = cmd.is_mutation();

    match controller.apply(cmd) {
        Ok(outcome) => {
            tracing::debug!(command = cmd_name, mutation, "applied ui command");
            if let Some(text) = status_for_outcome(&outcome) {
                *status = text;
            }
            Ok(outcome)
        }
        Err(err) => {
            tracing::warn!(command = cmd_name, "ui command rejected: {err}");
            Err(UiError::from_roster_error(
                context_for_command_name(cmd_name),
                &err,
            ))
        }
    }
}
