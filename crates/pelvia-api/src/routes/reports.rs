use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use pelvia_export::error::ExportError;
use pelvia_export::render::{render_default_summary, render_summary};
use pelvia_export::summary::EvaluationSummary;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SummaryRequest {
    #[serde(flatten)]
    summary: EvaluationSummary,
    /// Tera source overriding the built-in Markdown template.
    template: Option<String>,
}

pub async fn render_summary_report(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let markdown = match req.template.as_deref() {
        // A caller-supplied template that fails to render is the caller's error.
        Some(template) => render_summary("custom", template, &req.summary, state.labels.as_ref())
            .map_err(|e| match e {
                ExportError::TemplateRender(msg) => ApiError::BadRequest(msg),
                other => other.into(),
            })?,
        None => render_default_summary(&req.summary, state.labels.as_ref())?,
    };
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        markdown,
    ))
}
