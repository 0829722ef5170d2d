use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use pelvia_core::models::questionnaire::{Answers, QuestionnaireResponse};
use pelvia_instruments::scoring::{Item, Recommendations, ValidationError};
use pelvia_instruments::error::InstrumentError;
use pelvia_instruments::{administer, all_instruments, get_instrument};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    max_score: u32,
    items: Vec<Item>,
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    answers: Answers,
    /// When present, the result is also returned as a recorded response.
    patient_id: Option<String>,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    score: u32,
    interpretation: String,
    recommendations: Recommendations,
    warnings: Vec<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<QuestionnaireResponse>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        max_score: instrument.max_score(),
        items: instrument.items().to_vec(),
    }))
}

/// Score an answer sheet. With a `patient_id` the sheet is also recorded as
/// a questionnaire response. Strict mode turns range warnings into a 422.
pub async fn score_answers(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    let warnings = instrument.validate(&req.answers);
    if state.config.strict_validation && !warnings.is_empty() {
        return Err(InstrumentError::InvalidAnswers {
            instrument_id: id,
            errors: warnings,
        }
        .into());
    }

    let scored = instrument.score(&req.answers);
    let recommendations = instrument.recommendations(&req.answers);
    let response = req
        .patient_id
        .as_deref()
        .map(|patient_id| administer(patient_id, instrument.kind(), req.answers.clone()));

    Ok(Json(ScoreResponse {
        score: scored.score,
        interpretation: scored.interpretation,
        recommendations,
        warnings,
        response,
    }))
}
