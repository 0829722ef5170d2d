use std::collections::HashMap;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use pelvia_api::app;
use pelvia_api::config::ApiConfig;
use pelvia_api::state::AppState;

fn test_app() -> Router {
    app(AppState::new(ApiConfig::default()))
}

fn strict_app() -> Router {
    app(AppState::new(ApiConfig {
        strict_validation: true,
        ..ApiConfig::default()
    }))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let response = test_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_both_instruments() {
    let response = test_app().oneshot(get("/instruments")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["iciq-sf", "udi-6"]);
}

#[tokio::test]
async fn instrument_detail_carries_items() {
    let response = test_app().oneshot(get("/instruments/udi-6")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["max_score"], 100);
    assert_eq!(body["items"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn unknown_instrument_is_404() {
    let response = test_app().oneshot(get("/instruments/phq-9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = test_app()
        .oneshot(post_json("/instruments/phq-9/score", json!({ "answers": {} })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scores_an_iciq_sheet() {
    let body = json!({ "answers": { "frequency": 3, "amount": 4, "impact": 7 } });
    let response = test_app()
        .oneshot(post_json("/instruments/iciq-sf/score", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["score"], 14);
    assert_eq!(body["interpretation"], "Severa");
    assert!(body["warnings"].as_array().unwrap().is_empty());
    assert!(body.get("response").is_none());
}

#[tokio::test]
async fn records_a_response_when_a_patient_is_given() {
    let body = json!({
        "patient_id": "p-1",
        "answers": { "q1": 3, "q2": 3, "q3": 3, "q4": 3, "q5": 3, "q6": 3 }
    });
    let response = test_app()
        .oneshot(post_json("/instruments/udi-6/score", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["score"], 100);
    assert_eq!(body["response"]["patient_id"], "p-1");
    assert_eq!(body["response"]["type"], "udi-6");
    assert_eq!(body["response"]["score"], 100);
}

#[tokio::test]
async fn out_of_range_answers_warn_by_default() {
    let body = json!({ "answers": { "frequency": 9 } });
    let response = test_app()
        .oneshot(post_json("/instruments/iciq-sf/score", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["score"], 9);
    assert_eq!(body["warnings"][0]["item_id"], "frequency");
}

#[tokio::test]
async fn strict_mode_rejects_out_of_range_answers() {
    let body = json!({ "answers": { "frequency": 9 } });
    let response = strict_app()
        .oneshot(post_json("/instruments/iciq-sf/score", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["details"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn fractional_answers_are_rejected_before_scoring() {
    let body = json!({ "answers": { "frequency": 2.5 } });
    let response = test_app()
        .oneshot(post_json("/instruments/iciq-sf/score", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json!({ "answers": { "q1": -1 } });
    let response = test_app()
        .oneshot(post_json("/instruments/udi-6/score", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/analysis")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lists_clusters_and_symptoms() {
    let response = test_app().oneshot(get("/clusters")).await.unwrap();
    let clusters = body_json(response).await;
    assert_eq!(clusters.as_array().unwrap().len(), 9);
    assert_eq!(clusters[0]["id"], "ui_effort");

    let response = test_app().oneshot(get("/symptoms")).await.unwrap();
    let symptoms = body_json(response).await;
    assert!(symptoms.as_array().unwrap().contains(&json!("escape_tos")));
}

#[tokio::test]
async fn analysis_combines_manual_and_inferred_symptoms() {
    let body = json!({
        "symptoms": ["escape_tos"],
        "exam": {
            "pelvic": { "oxford": 2, "dyspareunia": true },
            "anamnesis": { "cSections": 1 },
            "redFlags": ["recent_trauma"]
        }
    });
    let response = test_app()
        .oneshot(post_json("/analysis", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["inferred"],
        json!(["debilidad_pelvica", "dispareunia", "cesarea_previa"])
    );
    assert_eq!(body["symptoms"][0], "escape_tos");

    let active: Vec<&str> = body["analysis"]["active_clusters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(active, ["ui_effort", "c_section_scar", "sexual_pain"]);
    assert_eq!(body["plan"]["active_cluster_ids"], json!(active));

    let goals = body["goals"].as_array().unwrap();
    assert!(goals[0].as_str().unwrap().starts_with("Reducir la frecuencia"));
    assert!(goals.iter().any(|g| g.as_str().unwrap().contains("Oxford 2 a 3")));

    assert_eq!(body["red_flags"], json!(["recent_trauma"]));
    assert_eq!(body["critical_red_flag"], false);
}

#[tokio::test]
async fn analysis_accepts_blank_form_values() {
    let body = json!({
        "symptoms": [],
        "exam": {
            "pelvic": { "hiatus": "", "oxford": 0 },
            "anamnesis": { "cSections": null, "comorbidities": [] }
        }
    });
    let response = test_app()
        .oneshot(post_json("/analysis", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["inferred"], json!(["debilidad_pelvica"]));
}

#[tokio::test]
async fn empty_analysis_has_no_goals() {
    let response = test_app()
        .oneshot(post_json("/analysis", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["analysis"]["active_clusters"].as_array().unwrap().is_empty());
    assert!(body["goals"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn renders_a_markdown_summary() {
    let body = json!({
        "patient_name": "Ana Pérez",
        "plan": {
            "tasks": ["task_rest"],
            "education": [],
            "active_cluster_ids": ["ui_effort"]
        },
        "red_flags": ["cauda_equina"]
    });
    let response = test_app()
        .oneshot(post_json("/reports/summary", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/markdown")
    );

    let markdown = body_text(response).await;
    assert!(markdown.contains("# Evaluación: Ana Pérez"));
    assert!(markdown.contains("**Atención:**"));
    assert!(markdown.contains("- Incontinencia de Esfuerzo"));
    assert!(markdown.contains("- Descanso Activo"));
}

#[tokio::test]
async fn summary_labels_come_from_state() {
    let labels = HashMap::from([("task_rest".to_string(), "Active rest".to_string())]);
    let app = app(AppState::with_labels(ApiConfig::default(), Arc::new(labels)));

    let body = json!({
        "patient_name": "Ana",
        "plan": { "tasks": ["task_rest"], "education": [], "active_cluster_ids": [] }
    });
    let response = app.oneshot(post_json("/reports/summary", body)).await.unwrap();
    let markdown = body_text(response).await;
    assert!(markdown.contains("- Active rest"));
}

#[tokio::test]
async fn summary_accepts_a_custom_template() {
    let body = json!({
        "patient_name": "Ana",
        "plan": { "tasks": ["task_rest"], "education": [], "active_cluster_ids": [] },
        "template": "{{ patient_name }}:{% for t in tasks %} {{ t.label }}{% endfor %}"
    });
    let response = test_app()
        .oneshot(post_json("/reports/summary", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Ana: Descanso Activo");
}

#[tokio::test]
async fn broken_custom_template_is_a_bad_request() {
    for template in ["{% for %}", "{{ missing.field }}"] {
        let body = json!({ "patient_name": "Ana", "template": template });
        let response = test_app()
            .oneshot(post_json("/reports/summary", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{template}");

        let body = body_json(response).await;
        assert!(!body["error"].as_str().unwrap().is_empty());
    }
}
