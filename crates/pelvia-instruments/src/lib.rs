//! pelvia-instruments
//!
//! Standardized questionnaire definitions and scorers. Pure functions, no I/O.
//! Scoring is total: missing answers count as zero and out-of-range values are
//! scored as given. Range checking is a separate, opt-in step.

pub mod error;
pub mod instruments;
pub mod scoring;

use pelvia_core::models::questionnaire::{Answers, QuestionnaireKind, QuestionnaireResponse};

use error::InstrumentError;
use scoring::{Item, Recommendations, Scored, ValidationError};

/// Trait implemented by each standardized questionnaire.
pub trait Instrument: Send + Sync {
    fn kind(&self) -> QuestionnaireKind;

    /// Stable identifier (e.g., "iciq-sf", "udi-6").
    fn id(&self) -> &str {
        self.kind().id()
    }

    /// Human-readable name (e.g., "ICIQ-SF").
    fn name(&self) -> &str;

    /// Upper bound of the score for in-range answers.
    fn max_score(&self) -> u32;

    /// Questions in display order, scored and context-only.
    fn items(&self) -> &[Item];

    /// Deterministic score and interpretation for an answer sheet.
    fn score(&self, answers: &Answers) -> Scored;

    /// Advisory recommendations derived from the answers.
    fn recommendations(&self, answers: &Answers) -> Recommendations;

    /// Check answers against each item's documented range.
    /// Unknown item ids are ignored.
    fn validate(&self, answers: &Answers) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (item_id, value) in answers.iter() {
            if let Some(item) = self.items().iter().find(|i| i.id == item_id)
                && !item.range.contains(value)
            {
                errors.push(ValidationError {
                    item_id: item_id.to_string(),
                    value,
                    expected_range: item.range,
                    message: format!(
                        "{}: {} answer {} is outside range [{}, {}]",
                        self.name(),
                        item.id,
                        value,
                        item.range.min,
                        item.range.max,
                    ),
                });
            }
        }
        errors
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::iciq_sf::IciqSf),
        Box::new(instruments::udi6::Udi6),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

pub fn instrument_for(kind: QuestionnaireKind) -> Box<dyn Instrument> {
    match kind {
        QuestionnaireKind::IciqSf => Box::new(instruments::iciq_sf::IciqSf),
        QuestionnaireKind::Udi6 => Box::new(instruments::udi6::Udi6),
    }
}

/// Score an answer sheet and record it as a new, immutable response.
pub fn administer(
    patient_id: &str,
    kind: QuestionnaireKind,
    answers: Answers,
) -> QuestionnaireResponse {
    let Scored {
        score,
        interpretation,
    } = instrument_for(kind).score(&answers);
    tracing::debug!(patient_id, instrument = %kind, score, "questionnaire scored");
    QuestionnaireResponse::record(patient_id, kind, answers, score, interpretation)
}

/// Like [`administer`], but refuses answers outside their documented ranges.
pub fn administer_strict(
    patient_id: &str,
    kind: QuestionnaireKind,
    answers: Answers,
) -> Result<QuestionnaireResponse, InstrumentError> {
    let errors = instrument_for(kind).validate(&answers);
    if !errors.is_empty() {
        return Err(InstrumentError::InvalidAnswers {
            instrument_id: kind.id().to_string(),
            errors,
        });
    }
    Ok(administer(patient_id, kind, answers))
}

/// Parse an instrument id, then [`administer`].
pub fn administer_by_id(
    patient_id: &str,
    instrument_id: &str,
    answers: Answers,
) -> Result<QuestionnaireResponse, InstrumentError> {
    let kind: QuestionnaireKind = instrument_id
        .parse()
        .map_err(|_| InstrumentError::UnknownInstrument(instrument_id.to_string()))?;
    Ok(administer(patient_id, kind, answers))
}
