//! Aggregate statistics over the whole store.

use serde::Serialize;
use shared::domain::Employee;

pub const NO_TOP_PERFORMER: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    /// Mean score rounded to one decimal place; zero for an empty store.
    pub average_score: f64,
    pub top_performer: Option<Employee>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatItem {
    pub label: &'static str,
    pub value: String,
}

pub fn summarize(records: &[Employee]) -> Summary {
    let count = records.len();
    let average_score = if count == 0 {
        0.0
    } else {
        let total: u64 = records.iter().map(|r| u64::from(r.score)).sum();
        round_one_decimal(total as f64 / count as f64)
    };

    // Strict comparison keeps the first of several equal maxima.
    let top_performer = records
        .iter()
        .fold(None::<&Employee>, |best, employee| match best {
            Some(current) if employee.score <= current.score => Some(current),
            _ => Some(employee),
        })
        .cloned();

    Summary {
        count,
        average_score,
        top_performer,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl Summary {
    pub fn top_performer_name(&self) -> &str {
        self.top_performer
            .as_ref()
            .map(|employee| employee.name.as_str())
            .unwrap_or(NO_TOP_PERFORMER)
    }

    pub fn average_display(&self) -> String {
        if self.count == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.average_score)
        }
    }

    pub fn stats(&self) -> [StatItem; 3] {
        [
            StatItem {
                label: "Total Employees",
                value: self.count.to_string(),
            },
            StatItem {
                label: "Average Score",
                value: self.average_display(),
            },
            StatItem {
                label: "Top Performer",
                value: self.top_performer_name().to_string(),
            },
        ]
    }
}

#[cfg(test)]
#[path = "tests/summary_tests.rs"]
mod tests;
