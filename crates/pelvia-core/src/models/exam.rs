use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Comorbidity identifiers recorded during anamnesis.
pub mod comorbidity {
    pub const CONSTIPATION: &str = "constipation";
    pub const CHRONIC_COUGH: &str = "chronic_cough";
    pub const SMOKING: &str = "smoking";
    pub const HIGH_IMPACT: &str = "high_impact";
    pub const OBESITY: &str = "obesity";
    pub const SURGERIES: &str = "surgeries";
}

/// Urogenital hiatus opening observed on inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Hiatus {
    /// Closed, the normal finding.
    Cerrado,
    /// Open or gaping.
    Abierto,
}

impl Hiatus {
    /// Parse a form value. The unselected option (`""`) and anything else
    /// unrecognised read as no finding.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value.trim() {
            "cerrado" => Some(Hiatus::Cerrado),
            "abierto" => Some(Hiatus::Abierto),
            _ => None,
        }
    }
}

/// Deserializers for form values that may be blank or `null`.
mod lenient {
    use super::*;

    pub fn hiatus<'de, D>(deserializer: D) -> Result<Option<Hiatus>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Hiatus::from_form_value))
    }

    /// A cleared number input arrives as `null`; it counts as zero.
    pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PelvicExam {
    /// Oxford scale grade, 0–5.
    pub oxford: Option<u8>,
    #[serde(deserialize_with = "lenient::hiatus")]
    pub hiatus: Option<Hiatus>,
    pub dyspareunia: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MskExam {
    /// Abdominal doming during a curl-up.
    pub doming: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Anamnesis {
    #[serde(alias = "cSections", deserialize_with = "lenient::count")]
    pub c_sections: u32,
    pub comorbidities: Vec<String>,
}

impl Anamnesis {
    pub fn has_comorbidity(&self, id: &str) -> bool {
        self.comorbidities.iter().any(|c| c == id)
    }
}

/// The latest ICIQ-SF result as seen by the exam form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct QuestionnaireSnapshot {
    #[serde(deserialize_with = "lenient::count")]
    pub score: u32,
    #[serde(alias = "q1_freq", deserialize_with = "lenient::count")]
    pub frequency: u32,
    #[serde(alias = "q2_vol", deserialize_with = "lenient::count")]
    pub amount: u32,
}

/// Structured snapshot of the clinical exam forms.
///
/// Every section is optional; an absent section simply contributes no findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ExamSnapshot {
    pub pelvic: Option<PelvicExam>,
    pub msk: Option<MskExam>,
    pub anamnesis: Option<Anamnesis>,
    pub questionnaire: Option<QuestionnaireSnapshot>,
    #[serde(alias = "redFlags")]
    pub red_flags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_json_fills_defaults() {
        let exam: ExamSnapshot =
            serde_json::from_str(r#"{"pelvic":{"oxford":2,"hiatus":"abierto"}}"#).unwrap();
        let pelvic = exam.pelvic.unwrap();
        assert_eq!(pelvic.oxford, Some(2));
        assert_eq!(pelvic.hiatus, Some(Hiatus::Abierto));
        assert!(!pelvic.dyspareunia);
        assert!(exam.msk.is_none());
        assert!(exam.red_flags.is_empty());
    }

    #[test]
    fn accepts_form_field_names() {
        let exam: ExamSnapshot = serde_json::from_str(
            r#"{"anamnesis":{"cSections":1,"comorbidities":["smoking"]},
                "questionnaire":{"score":9,"q1_freq":3,"q2_vol":4},
                "redFlags":["cauda_equina"]}"#,
        )
        .unwrap();
        let anamnesis = exam.anamnesis.unwrap();
        assert_eq!(anamnesis.c_sections, 1);
        assert!(anamnesis.has_comorbidity(comorbidity::SMOKING));
        assert!(!anamnesis.has_comorbidity(comorbidity::OBESITY));
        let q = exam.questionnaire.unwrap();
        assert_eq!((q.score, q.frequency, q.amount), (9, 3, 4));
        assert_eq!(exam.red_flags, vec!["cauda_equina"]);
    }

    #[test]
    fn blank_form_values_read_as_absent() {
        let exam: ExamSnapshot = serde_json::from_str(
            r#"{"pelvic":{"hiatus":"","oxford":null},
                "anamnesis":{"cSections":null,"comorbidities":[]},
                "questionnaire":{"score":null,"q1_freq":null,"q2_vol":2}}"#,
        )
        .unwrap();
        let pelvic = exam.pelvic.unwrap();
        assert_eq!(pelvic.hiatus, None);
        assert_eq!(pelvic.oxford, None);
        assert_eq!(exam.anamnesis.unwrap().c_sections, 0);
        let q = exam.questionnaire.unwrap();
        assert_eq!((q.score, q.frequency, q.amount), (0, 0, 2));
    }

    #[test]
    fn unknown_hiatus_values_are_ignored() {
        let pelvic: PelvicExam = serde_json::from_str(r#"{"hiatus":"bostezante"}"#).unwrap();
        assert_eq!(pelvic.hiatus, None);
        let pelvic: PelvicExam = serde_json::from_str(r#"{"hiatus":null}"#).unwrap();
        assert_eq!(pelvic.hiatus, None);
        assert_eq!(Hiatus::from_form_value(" cerrado "), Some(Hiatus::Cerrado));
    }

    #[test]
    fn hiatus_still_serializes_as_its_form_value() {
        let pelvic = PelvicExam {
            hiatus: Some(Hiatus::Abierto),
            ..Default::default()
        };
        let json = serde_json::to_value(&pelvic).unwrap();
        assert_eq!(json["hiatus"], "abierto");
    }
}
