use axum::Json;
use serde::{Deserialize, Serialize};

use pelvia_core::models::cluster::Cluster;
use pelvia_core::models::exam::ExamSnapshot;
use pelvia_core::models::plan::EvaluationPlan;
use pelvia_rules::clusters::{clusters, known_symptoms};
use pelvia_rules::engine::{analyze, combined_symptoms, Analysis};
use pelvia_rules::goals::generate_smart_goals;
use pelvia_rules::inference::evaluate_metrics;
use pelvia_rules::red_flags::{extract_red_flags, has_critical_red_flag};

#[derive(Deserialize)]
pub struct AnalysisRequest {
    /// Symptoms the clinician selected by hand.
    #[serde(default)]
    symptoms: Vec<String>,
    #[serde(default)]
    exam: ExamSnapshot,
}

#[derive(Serialize)]
pub struct AnalysisResponse {
    inferred: Vec<String>,
    symptoms: Vec<String>,
    analysis: Analysis,
    plan: EvaluationPlan,
    goals: Vec<String>,
    red_flags: Vec<String>,
    critical_red_flag: bool,
}

pub async fn list_clusters() -> Json<Vec<Cluster>> {
    Json(clusters().to_vec())
}

pub async fn list_symptoms() -> Json<Vec<&'static str>> {
    Json(known_symptoms())
}

pub async fn run_analysis(Json(req): Json<AnalysisRequest>) -> Json<AnalysisResponse> {
    let inferred = evaluate_metrics(&req.exam);
    let symptoms = combined_symptoms(&req.symptoms, &inferred);
    let analysis = analyze(&symptoms);
    let goals = generate_smart_goals(&analysis.active_clusters, &req.exam);
    let red_flags = extract_red_flags(&req.exam);

    Json(AnalysisResponse {
        inferred: inferred.iter().map(|s| s.to_string()).collect(),
        symptoms,
        plan: analysis.to_plan(),
        analysis,
        goals,
        critical_red_flag: has_critical_red_flag(&red_flags),
        red_flags,
    })
}
