use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Standardized instruments the clinic administers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum QuestionnaireKind {
    #[serde(rename = "iciq-sf")]
    IciqSf,
    #[serde(rename = "udi-6")]
    Udi6,
}

impl QuestionnaireKind {
    pub fn id(&self) -> &'static str {
        match self {
            QuestionnaireKind::IciqSf => "iciq-sf",
            QuestionnaireKind::Udi6 => "udi-6",
        }
    }
}

impl fmt::Display for QuestionnaireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for QuestionnaireKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iciq-sf" => Ok(QuestionnaireKind::IciqSf),
            "udi-6" => Ok(QuestionnaireKind::Udi6),
            other => Err(CoreError::UnknownQuestionnaire(other.to_string())),
        }
    }
}

/// Raw answers keyed by item identifier. Missing items read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Answers(BTreeMap<String, u32>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `item`, or 0 when it was never answered.
    pub fn get(&self, item: &str) -> u32 {
        self.0.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.contains_key(item)
    }

    /// True when a checkbox-style item was ticked (any non-zero value).
    pub fn is_set(&self, item: &str) -> bool {
        self.get(item) != 0
    }

    pub fn insert(&mut self, item: impl Into<String>, value: u32) {
        self.0.insert(item.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// One scored administration of a standardized instrument.
///
/// Records are immutable: a resubmission produces a new response with a new
/// id, leaving history untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireResponse {
    id: Uuid,
    patient_id: String,
    #[serde(rename = "type")]
    kind: QuestionnaireKind,
    answers: Answers,
    score: u32,
    interpretation: String,
    administered_at: jiff::Timestamp,
}

impl QuestionnaireResponse {
    /// Record an already-scored administration under a fresh id.
    pub fn record(
        patient_id: impl Into<String>,
        kind: QuestionnaireKind,
        answers: Answers,
        score: u32,
        interpretation: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: patient_id.into(),
            kind,
            answers,
            score,
            interpretation: interpretation.into(),
            administered_at: jiff::Timestamp::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn kind(&self) -> QuestionnaireKind {
        self.kind
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn interpretation(&self) -> &str {
        &self.interpretation
    }

    pub fn administered_at(&self) -> jiff::Timestamp {
        self.administered_at
    }
}
