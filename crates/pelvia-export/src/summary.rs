use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pelvia_core::models::cluster::CifCode;
use pelvia_core::models::plan::EvaluationPlan;
use pelvia_core::models::questionnaire::QuestionnaireResponse;
use pelvia_instruments::instrument_for;
use pelvia_rules::catalog::{resolve, LabelLookup};
use pelvia_rules::clusters::find_cluster;
use pelvia_rules::engine::Analysis;
use pelvia_rules::red_flags::{find_red_flag, has_critical_red_flag};

/// Everything a clinician report needs, expressed as identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationSummary {
    pub patient_name: String,
    #[serde(default)]
    pub questionnaires: Vec<QuestionnaireResponse>,
    /// Matcher output. Supplies the suggested tests, CIF codes and referrals.
    #[serde(default)]
    pub analysis: Analysis,
    #[serde(default)]
    pub plan: EvaluationPlan,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionnaireLine {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub interpretation: String,
}

/// Template context: the summary with every identifier resolved.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryContext {
    pub patient_name: String,
    pub questionnaires: Vec<QuestionnaireLine>,
    pub clusters: Vec<LabeledItem>,
    pub tasks: Vec<LabeledItem>,
    pub education: Vec<LabeledItem>,
    pub tests: Vec<LabeledItem>,
    pub cif: Vec<CifCode>,
    pub referrals: Vec<String>,
    pub goals: Vec<String>,
    pub red_flags: Vec<LabeledItem>,
    pub critical_red_flag: bool,
}

impl SummaryContext {
    pub fn build(summary: &EvaluationSummary, lookup: &dyn LabelLookup) -> Self {
        let labeled = |ids: &[String]| -> Vec<LabeledItem> {
            ids.iter()
                .map(|id| LabeledItem {
                    id: id.clone(),
                    label: resolve(lookup, id),
                })
                .collect()
        };

        let questionnaires = summary
            .questionnaires
            .iter()
            .map(|q| {
                let instrument = instrument_for(q.kind());
                QuestionnaireLine {
                    name: instrument.name().to_string(),
                    score: q.score(),
                    max_score: instrument.max_score(),
                    interpretation: q.interpretation().to_string(),
                }
            })
            .collect();

        // Cluster and red-flag names live in their own tables. The lookup is
        // consulted first so a locale can override them.
        let clusters = summary
            .plan
            .active_cluster_ids
            .iter()
            .map(|id| LabeledItem {
                id: id.clone(),
                label: lookup
                    .label(id)
                    .or_else(|| find_cluster(id).map(|c| c.label.clone()))
                    .unwrap_or_else(|| id.clone()),
            })
            .collect();

        let red_flags = summary
            .red_flags
            .iter()
            .map(|id| LabeledItem {
                id: id.clone(),
                label: lookup
                    .label(id)
                    .or_else(|| find_red_flag(id).map(|f| f.label.to_string()))
                    .unwrap_or_else(|| id.clone()),
            })
            .collect();

        Self {
            patient_name: summary.patient_name.clone(),
            questionnaires,
            clusters,
            tasks: labeled(&summary.plan.tasks),
            education: labeled(&summary.plan.education),
            tests: labeled(&summary.analysis.suggestions.tests),
            cif: summary.analysis.suggestions.cif.clone(),
            referrals: summary.analysis.suggestions.referrals.clone(),
            goals: summary.goals.clone(),
            red_flags,
            critical_red_flag: has_critical_red_flag(&summary.red_flags),
        }
    }
}
