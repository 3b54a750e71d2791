use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(EmployeeId);

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

pub const HIGH_PERFORMANCE_THRESHOLD: u8 = 85;
pub const MEDIUM_PERFORMANCE_THRESHOLD: u8 = 70;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub score: u8,
}

/// Raw form contents as typed by the user, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub role: String,
    pub score: String,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        score: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            score: score.into(),
        }
    }

    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            role: employee.role.clone(),
            score: employee.score.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    Role,
    Score,
}

impl SortColumn {
    pub const ALL: [SortColumn; 3] = [SortColumn::Name, SortColumn::Role, SortColumn::Score];

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Role => "Role",
            SortColumn::Score => "Score",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Role => "role",
            SortColumn::Score => "score",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SortColumn {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        SortColumn::ALL
            .into_iter()
            .find(|column| column.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                RosterError::validation(format!(
                    "unknown sort column '{token}' (expected name, role or score)"
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }
}

impl SortState {
    pub fn new(column: SortColumn, ascending: bool) -> Self {
        Self {
            column: Some(column),
            ascending,
        }
    }

    /// Reselecting the active column flips direction; a new column starts ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.ascending = !self.ascending;
        } else {
            self.column = Some(column);
            self.ascending = true;
        }
    }

    pub fn is_active(&self, column: SortColumn) -> bool {
        self.column == Some(column)
    }

    pub fn indicator(&self, column: SortColumn) -> Option<&'static str> {
        if !self.is_active(column) {
            return None;
        }
        Some(if self.ascending { " ↑" } else { " ↓" })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "role", rename_all = "snake_case")]
pub enum RoleFilter {
    #[default]
    All,
    Only(String),
}

impl RoleFilter {
    pub const ALL_LABEL: &'static str = "All Roles";

    /// Maps a selector value to a filter; the empty value is the "all" sentinel.
    pub fn from_selection(value: &str) -> Self {
        if value.is_empty() {
            RoleFilter::All
        } else {
            RoleFilter::Only(value.to_string())
        }
    }

    pub fn role(&self) -> Option<&str> {
        match self {
            RoleFilter::All => None,
            RoleFilter::Only(role) => Some(role.as_str()),
        }
    }

    pub fn label(&self) -> &str {
        self.role().unwrap_or(Self::ALL_LABEL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    High,
    Medium,
    Low,
}

impl PerformanceTier {
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_PERFORMANCE_THRESHOLD {
            PerformanceTier::High
        } else if score >= MEDIUM_PERFORMANCE_THRESHOLD {
            PerformanceTier::Medium
        } else {
            PerformanceTier::Low
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            PerformanceTier::High => "high-performance",
            PerformanceTier::Medium => "medium-performance",
            PerformanceTier::Low => "low-performance",
        }
    }
}
