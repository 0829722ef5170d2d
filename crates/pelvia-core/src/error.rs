use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown questionnaire type: {0}")]
    UnknownQuestionnaire(String),
}
