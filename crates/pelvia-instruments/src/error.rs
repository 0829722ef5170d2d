use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument_id}: {} answer(s) outside their documented range", .errors.len())]
    InvalidAnswers {
        instrument_id: String,
        errors: Vec<ValidationError>,
    },
}
