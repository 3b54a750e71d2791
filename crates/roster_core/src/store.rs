use std::collections::HashSet;

use shared::{
    domain::{Employee, EmployeeId, MAX_SCORE, MIN_SCORE},
    error::{RosterError, RosterResult},
};

pub const SCORE_RANGE_MESSAGE: &str = "Score must be between 0 and 100";

/// Canonical, insertion-ordered employee collection plus the id counter.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Employee>,
    next_id: i64,
}

/// Employee fields that passed validation and can be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEmployee {
    pub name: String,
    pub role: String,
    pub score: u8,
}

pub fn validate_employee(name: &str, role: &str, score: i64) -> RosterResult<ValidatedEmployee> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::validation("Name is required"));
    }
    let role = role.trim();
    if role.is_empty() {
        return Err(RosterError::validation("Role is required"));
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(RosterError::validation(SCORE_RANGE_MESSAGE));
    }
    let score = u8::try_from(score).map_err(|_| RosterError::validation(SCORE_RANGE_MESSAGE))?;

    Ok(ValidatedEmployee {
        name: name.to_string(),
        role: role.to_string(),
        score,
    })
}

/// Parses form text into a score. Non-numeric input is reported with the range message.
pub fn parse_score(raw: &str) -> RosterResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| RosterError::validation(SCORE_RANGE_MESSAGE))
}

pub fn default_seed() -> Vec<Employee> {
    [
        (1, "Alice Johnson", "Developer", 88),
        (2, "James Smith", "Designer", 73),
        (3, "Fatou Kamara", "Project Manager", 91),
        (4, "David Mwangi", "QA Engineer", 64),
    ]
    .into_iter()
    .map(|(id, name, role, score)| Employee {
        id: EmployeeId(id),
        name: name.to_string(),
        role: role.to_string(),
        score,
    })
    .collect()
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            records: default_seed(),
            next_id: 5,
        }
    }
}

impl RecordStore {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a store from seed records, rejecting anything a live store could not hold.
    pub fn with_seed(records: Vec<Employee>) -> RosterResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.0 <= 0 {
                return Err(RosterError::InvalidSeed(format!(
                    "employee id {} is not positive",
                    record.id
                )));
            }
            if !seen.insert(record.id) {
                return Err(RosterError::InvalidSeed(format!(
                    "duplicate employee id {}",
                    record.id
                )));
            }
            validate_employee(&record.name, &record.role, i64::from(record.score)).map_err(
                |err| RosterError::InvalidSeed(format!("employee {}: {err}", record.id)),
            )?;
        }

        let max_id = records.iter().map(|r| r.id.0).max().unwrap_or(0);
        let next_id = max_id.checked_add(1).ok_or_else(|| {
            RosterError::InvalidSeed(format!(
                "employee id {max_id} leaves no room for new ids"
            ))
        })?;
        Ok(Self { records, next_id })
    }

    pub fn create(&mut self, name: &str, role: &str, score: i64) -> RosterResult<Employee> {
        let valid = validate_employee(name, role, score)?;
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(RosterError::IdsExhausted)?;
        let employee = Employee {
            id: EmployeeId(self.next_id),
            name: valid.name,
            role: valid.role,
            score: valid.score,
        };
        self.next_id = following;
        self.records.push(employee.clone());
        Ok(employee)
    }

    pub fn update(
        &mut self,
        id: EmployeeId,
        name: &str,
        role: &str,
        score: i64,
    ) -> RosterResult<Employee> {
        let index = self.position(id).ok_or(RosterError::NotFound(id))?;
        let valid = validate_employee(name, role, score)?;
        let employee = Employee {
            id,
            name: valid.name,
            role: valid.role,
            score: valid.score,
        };
        self.records[index] = employee.clone();
        Ok(employee)
    }

    pub fn delete(&mut self, id: EmployeeId) -> RosterResult<Employee> {
        let index = self.position(id).ok_or(RosterError::NotFound(id))?;
        Ok(self.records.remove(index))
    }

    /// Snapshot of the current records in insertion order.
    pub fn all(&self) -> Vec<Employee> {
        self.records.clone()
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_id(&self) -> EmployeeId {
        EmployeeId(self.next_id)
    }

    /// Distinct roles in order of first appearance.
    pub fn roles(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.role.as_str()))
            .map(|r| r.role.clone())
            .collect()
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
