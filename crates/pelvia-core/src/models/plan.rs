use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinician-editable treatment plan seeded by the rule engine.
///
/// `tasks` and `education` behave as ordered sets: an id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationPlan {
    pub tasks: Vec<String>,
    pub education: Vec<String>,
    pub active_cluster_ids: Vec<String>,
}

impl EvaluationPlan {
    /// Build a plan, dropping repeated ids while keeping first-seen order.
    pub fn new<I, S>(active_cluster_ids: Vec<String>, tasks: I, education: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut plan = Self {
            active_cluster_ids,
            ..Self::default()
        };
        for t in tasks {
            plan.add_task(t);
        }
        for e in education {
            plan.add_education(e);
        }
        plan
    }

    /// Returns false when the task was already in the plan.
    pub fn add_task(&mut self, id: impl Into<String>) -> bool {
        push_unique(&mut self.tasks, id.into())
    }

    /// Returns false when the task was not in the plan.
    pub fn remove_task(&mut self, id: &str) -> bool {
        remove(&mut self.tasks, id)
    }

    pub fn add_education(&mut self, id: impl Into<String>) -> bool {
        push_unique(&mut self.education, id.into())
    }

    pub fn remove_education(&mut self, id: &str) -> bool {
        remove(&mut self.education, id)
    }
}

fn push_unique(items: &mut Vec<String>, id: String) -> bool {
    if items.contains(&id) {
        return false;
    }
    items.push(id);
    true
}

fn remove(items: &mut Vec<String>, id: &str) -> bool {
    let before = items.len();
    items.retain(|i| i != id);
    items.len() != before
}
