pub mod cluster;
pub mod exam;
pub mod plan;
pub mod questionnaire;
