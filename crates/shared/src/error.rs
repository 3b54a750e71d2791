use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::EmployeeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NotFound,
    InvalidState,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("{0}")]
    Validation(String),
    #[error("employee {0} not found")]
    NotFound(EmployeeId),
    #[error("invalid seed data: {0}")]
    InvalidSeed(String),
    #[error("no employee form is open")]
    NoActiveEditor,
    #[error("no delete is awaiting confirmation")]
    NoPendingDelete,
    #[error("no employee ids left to assign")]
    IdsExhausted,
}

impl RosterError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RosterError::Validation(_) | RosterError::InvalidSeed(_) => ErrorCode::Validation,
            RosterError::NotFound(_) => ErrorCode::NotFound,
            RosterError::NoActiveEditor
            | RosterError::NoPendingDelete
            | RosterError::IdsExhausted => ErrorCode::InvalidState,
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
