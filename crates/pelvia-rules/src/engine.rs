use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pelvia_core::models::cluster::{CifCode, Cluster};
use pelvia_core::models::plan::EvaluationPlan;

use crate::clusters::clusters;

/// Deduplicated union of the suggestions of every active cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Suggestions {
    pub tasks: Vec<String>,
    pub education: Vec<String>,
    pub tests: Vec<String>,
    pub cif: Vec<CifCode>,
    pub referrals: Vec<String>,
}

/// Result of matching a symptom set against the knowledge base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Analysis {
    /// Fired clusters, in knowledge-base order.
    pub active_clusters: Vec<Cluster>,
    pub suggestions: Suggestions,
}

impl Analysis {
    pub fn active_cluster_ids(&self) -> Vec<String> {
        self.active_clusters.iter().map(|c| c.id.clone()).collect()
    }

    /// Seed an editable plan from the suggested tasks and education.
    pub fn to_plan(&self) -> EvaluationPlan {
        EvaluationPlan::new(
            self.active_cluster_ids(),
            self.suggestions.tasks.iter().cloned(),
            self.suggestions.education.iter().cloned(),
        )
    }
}

/// Match `symptom_ids` against the built-in knowledge base.
pub fn analyze<I, S>(symptom_ids: I) -> Analysis
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    analyze_with(clusters(), symptom_ids)
}

/// Match `symptom_ids` against an explicit knowledge base.
///
/// A cluster fires when any one of its trigger symptoms is present. Suggestions
/// are collected cluster by cluster, item by item, skipping ids already seen.
/// Unknown symptom ids are inert; an empty input yields an empty analysis.
pub fn analyze_with<I, S>(knowledge_base: &[Cluster], symptom_ids: I) -> Analysis
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let symptoms: Vec<S> = symptom_ids.into_iter().collect();
    let mut analysis = Analysis::default();

    for cluster in knowledge_base.iter().filter(|c| c.is_triggered_by(&symptoms)) {
        let s = &mut analysis.suggestions;
        extend_unique(&mut s.tasks, &cluster.suggestions.tasks);
        extend_unique(&mut s.education, &cluster.suggestions.education);
        extend_unique(&mut s.tests, &cluster.suggestions.tests);
        for code in &cluster.suggestions.cif {
            // Keeps its first position; the latest description wins.
            match s.cif.iter_mut().find(|c| c.code == code.code) {
                Some(existing) => existing.description.clone_from(&code.description),
                None => s.cif.push(code.clone()),
            }
        }
        if let Some(referral) = &cluster.suggestions.referral {
            extend_unique(&mut s.referrals, std::slice::from_ref(referral));
        }
        analysis.active_clusters.push(cluster.clone());
    }

    tracing::debug!(
        symptoms = symptoms.len(),
        active = analysis.active_clusters.len(),
        tasks = analysis.suggestions.tasks.len(),
        "symptom analysis"
    );
    analysis
}

/// Union of manually selected and inferred symptoms, first-seen order, no repeats.
pub fn combined_symptoms<A, B>(manual: &[A], inferred: &[B]) -> Vec<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    let all = manual
        .iter()
        .map(<A as AsRef<str>>::as_ref)
        .chain(inferred.iter().map(<B as AsRef<str>>::as_ref));
    for s in all {
        if !out.iter().any(|o| o == s) {
            out.push(s.to_string());
        }
    }
    out
}

fn extend_unique(target: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !target.contains(item) {
            target.push(item.clone());
        }
    }
}
