use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Broad clinical area a cluster belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClusterCategory {
    Pelvic,
    Msk,
    Fitness,
    Lifestyle,
}

/// International Classification of Functioning code attached to a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CifCode {
    pub code: String,
    pub description: String,
}

/// Symptoms that activate a cluster. Any single match is enough.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Triggers {
    pub symptoms: Vec<String>,
}

/// Identifiers suggested when a cluster fires. Labels are resolved elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterSuggestions {
    pub tests: Vec<String>,
    pub education: Vec<String>,
    pub tasks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cif: Vec<CifCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
}

/// A named clinical hypothesis: a group of related symptoms mapped to a
/// bundle of suggested tests, education items and home tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cluster {
    /// Stable identifier, stored on evaluation records.
    pub id: String,
    pub label: String,
    pub category: ClusterCategory,
    pub description: String,
    pub triggers: Triggers,
    pub suggestions: ClusterSuggestions,
}

impl Cluster {
    /// True when at least one of `symptom_ids` is among this cluster's triggers.
    pub fn is_triggered_by<S: AsRef<str>>(&self, symptom_ids: &[S]) -> bool {
        self.triggers
            .symptoms
            .iter()
            .any(|t| symptom_ids.iter().any(|s| AsRef::<str>::as_ref(s) == t.as_str()))
    }
}
