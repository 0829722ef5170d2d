use std::collections::HashMap;

use pelvia_core::models::exam::{ExamSnapshot, PelvicExam};
use pelvia_core::models::questionnaire::{Answers, QuestionnaireKind};
use pelvia_export::error::ExportError;
use pelvia_export::render::{render_default_summary, render_summary};
use pelvia_export::summary::EvaluationSummary;
use pelvia_instruments::administer;
use pelvia_rules::catalog::Catalog;
use pelvia_rules::engine::analyze;
use pelvia_rules::goals::generate_smart_goals;

fn summary() -> EvaluationSummary {
    let analysis = analyze(["escape_tos"]);
    let exam = ExamSnapshot {
        pelvic: Some(PelvicExam {
            oxford: Some(2),
            ..Default::default()
        }),
        ..Default::default()
    };
    let answers: Answers = [("frequency", 3), ("amount", 4), ("impact", 7)]
        .into_iter()
        .collect();
    let mut plan = analysis.to_plan();
    plan.add_task("task_custom_home_walk");

    EvaluationSummary {
        patient_name: "María P.".to_string(),
        questionnaires: vec![administer("p1", QuestionnaireKind::IciqSf, answers)],
        goals: generate_smart_goals(&analysis.active_clusters, &exam),
        plan,
        analysis,
        red_flags: vec!["recent_trauma".to_string()],
    }
}

#[test]
fn default_template_resolves_labels() {
    let out = render_default_summary(&summary(), &Catalog).unwrap();
    assert!(out.contains("# Evaluación: María P."));
    assert!(out.contains("ICIQ-SF: 14/21 (Severa)"));
    assert!(out.contains("- Incontinencia de Esfuerzo"));
    assert!(out.contains("- Coordinación de Contracción Perineal"));
    assert!(out.contains("- ¿Qué es el Knack? Protección al toser"));
    assert!(out.contains("- Trauma reciente no evaluado"));
    assert!(!out.contains("Atención"), "yellow flags are not critical");
    // Unknown ids render as themselves.
    assert!(out.contains("- task_custom_home_walk"));
    assert!(out.contains("1. Reducir la frecuencia"));
}

#[test]
fn suggested_tests_and_cif_codes_are_listed() {
    let out = render_default_summary(&summary(), &Catalog).unwrap();
    assert!(out.contains("### Evaluaciones sugeridas"));
    assert!(out.contains("- Test de Esfuerzo con Tos"));
    assert!(out.contains("## Clasificación CIF"));
    assert!(out.contains("- b6200: Funciones de la micción"));
    assert!(!out.contains("## Derivación"));
}

#[test]
fn referral_notes_are_rendered() {
    let analysis = analyze(["peso_vaginal"]);
    let s = EvaluationSummary {
        patient_name: "Ana".to_string(),
        plan: analysis.to_plan(),
        analysis,
        ..Default::default()
    };
    let out = render_default_summary(&s, &Catalog).unwrap();
    assert!(out.contains("## Derivación"));
    assert!(out.contains("considerar pesario/derivación"));
    assert!(!out.contains("## Clasificación CIF"));
}

#[test]
fn lookup_can_be_swapped_for_another_locale() {
    let english = HashMap::from([
        (
            "task_contraction_coord".to_string(),
            "Pelvic floor contraction coordination".to_string(),
        ),
        ("ui_effort".to_string(), "Stress urinary incontinence".to_string()),
    ]);
    let out = render_default_summary(&summary(), &english).unwrap();
    assert!(out.contains("- Pelvic floor contraction coordination"));
    assert!(out.contains("- Stress urinary incontinence"));
    // Not in the map: education falls back to the raw id.
    assert!(out.contains("- edu_knack"));
}

#[test]
fn critical_flags_raise_a_warning() {
    let mut s = summary();
    s.red_flags = vec!["cauda_equina".to_string()];
    let out = render_default_summary(&s, &Catalog).unwrap();
    assert!(out.contains("**Atención:**"));
}

#[test]
fn empty_summary_still_renders() {
    let s = EvaluationSummary {
        patient_name: "Sin datos".to_string(),
        ..Default::default()
    };
    let out = render_default_summary(&s, &Catalog).unwrap();
    assert!(out.contains("Sin cuestionarios registrados."));
    assert!(out.contains("Sin patrón clínico identificado."));
    assert!(!out.contains("Objetivos SMART"));
}

#[test]
fn custom_templates_are_supported() {
    let out = render_summary(
        "tasks.txt",
        "{% for t in tasks %}{{ t.id }}={{ t.label }};{% endfor %}",
        &summary(),
        &Catalog,
    )
    .unwrap();
    assert!(out.starts_with("task_contraction_coord=Coordinación de Contracción Perineal;"));
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_summary("bad", "{% for %}", &summary(), &Catalog).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}
