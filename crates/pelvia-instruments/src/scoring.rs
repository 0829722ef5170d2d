use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Documented answer domain for a questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
    /// Allowed spacing between values, counted from `min`.
    pub step: Option<u32>,
}

impl ScoreRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub const fn stepped(min: u32, max: u32, step: u32) -> Self {
        Self {
            min,
            max,
            step: Some(step),
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        match self.step {
            Some(step) if step > 0 => (value - self.min) % step == 0,
            _ => true,
        }
    }
}

/// One question of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub range: ScoreRange,
    /// Context-only items (e.g. ICIQ situations) do not count toward the score.
    pub scored: bool,
}

impl Item {
    pub(crate) fn scored(id: &str, label: &str, range: ScoreRange) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            range,
            scored: true,
        }
    }

    pub(crate) fn flag(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            range: ScoreRange::new(0, 1),
            scored: false,
        }
    }
}

/// Score plus the label persisted next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scored {
    pub score: u32,
    pub interpretation: String,
}

/// Advisory text derived from a questionnaire. Independent of the cluster
/// rule engine; the clinician decides what to carry into the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendations {
    pub recommendations: Vec<String>,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_id: String,
    pub value: u32,
    pub expected_range: ScoreRange,
    pub message: String,
}
