use std::sync::LazyLock;

use pelvia_core::models::questionnaire::{Answers, QuestionnaireKind};

use crate::scoring::{Item, Recommendations, ScoreRange, Scored};
use crate::Instrument;

pub const FREQUENCY: &str = "frequency";
pub const AMOUNT: &str = "amount";
pub const IMPACT: &str = "impact";

/// "When do you leak?" checkboxes. Recorded for context, never scored.
pub const SITUATIONS: [(&str, &str); 8] = [
    ("sit_never", "Nunca"),
    ("sit_urgency", "Antes de llegar al baño"),
    ("sit_cough", "Al toser o estornudar"),
    ("sit_sleep", "Mientras duerme"),
    ("sit_exercise", "Al realizar esfuerzos físicos / ejercicio"),
    ("sit_after", "Cuando termina de orinar y se viste"),
    ("sit_unknown", "Sin motivo evidente"),
    ("sit_constant", "De forma continua"),
];

/// Typed view of an ICIQ-SF answer sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IciqAnswers {
    /// 0 (never) to 5 (continuously).
    pub frequency: u32,
    /// One of 0, 2, 4, 6.
    pub amount: u32,
    /// 0 (not at all) to 10 (a great deal).
    pub impact: u32,
    pub leaks_on_effort: bool,
    pub leaks_on_urgency: bool,
}

impl From<&Answers> for IciqAnswers {
    fn from(answers: &Answers) -> Self {
        Self {
            frequency: answers.get(FREQUENCY),
            amount: answers.get(AMOUNT),
            impact: answers.get(IMPACT),
            leaks_on_effort: answers.is_set("sit_cough") || answers.is_set("sit_exercise"),
            leaks_on_urgency: answers.is_set("sit_urgency") || answers.is_set("sit_after"),
        }
    }
}

/// ICIQ-SF severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IciqBand {
    Continencia,
    Leve,
    Moderada,
    Severa,
    MuySevera,
}

impl IciqBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            0 => IciqBand::Continencia,
            1..=5 => IciqBand::Leve,
            6..=12 => IciqBand::Moderada,
            13..=18 => IciqBand::Severa,
            _ => IciqBand::MuySevera,
        }
    }

    /// Label persisted as the response interpretation.
    pub fn label(&self) -> &'static str {
        match self {
            IciqBand::Continencia => "Continencia",
            IciqBand::Leve => "Leve",
            IciqBand::Moderada => "Moderada",
            IciqBand::Severa => "Severa",
            IciqBand::MuySevera => "Muy Severa",
        }
    }

    /// Longer clinical sentence for reports.
    pub fn summary(&self) -> &'static str {
        match self {
            IciqBand::Continencia => "Continencia. No se reportan pérdidas significativas.",
            IciqBand::Leve => "Incontinencia Leve. Impacto bajo en calidad de vida.",
            IciqBand::Moderada => {
                "Incontinencia Moderada. Se recomienda intervención conservadora."
            }
            IciqBand::Severa => {
                "Incontinencia Severa. Impacto significativo. Requiere tratamiento prioritario."
            }
            IciqBand::MuySevera => {
                "Incontinencia Muy Severa. Afectación crítica de calidad de vida."
            }
        }
    }
}

/// Sum of the three scored items, 0–21 for in-range answers.
pub fn score(answers: &IciqAnswers) -> u32 {
    answers
        .frequency
        .saturating_add(answers.amount)
        .saturating_add(answers.impact)
}

pub fn recommendations(answers: &IciqAnswers) -> Recommendations {
    let total = score(answers);
    let mut out = Recommendations::default();

    if total > 0 {
        out.recommendations
            .push("Educación sobre anatomía del piso pélvico.".to_string());
        out.tasks.push("Diario Miccional (3 días)".to_string());
    }
    if total >= 6 {
        out.recommendations
            .push("Entrenamiento muscular del piso pélvico (PFMT) supervisado.".to_string());
        out.tasks.push("Ejercicios de Kegel (Serie Inicial)".to_string());
    }
    if answers.leaks_on_effort {
        out.recommendations
            .push("Manejo de presión intra-abdominal (Knack technique).".to_string());
        out.recommendations
            .push("Evaluación de competencia abdominal.".to_string());
    }
    if answers.leaks_on_urgency {
        out.recommendations
            .push("Entrenamiento vesical (Bladder Training).".to_string());
        out.recommendations
            .push("Técnicas de inhibición de urgencia.".to_string());
    }
    out
}

/// ICIQ-SF: International Consultation on Incontinence Questionnaire, Short Form.
/// Frequency (0–5) + amount (0/2/4/6) + impact (0–10). Total 0–21.
pub struct IciqSf;

impl Instrument for IciqSf {
    fn kind(&self) -> QuestionnaireKind {
        QuestionnaireKind::IciqSf
    }

    fn name(&self) -> &str {
        "ICIQ-SF"
    }

    fn max_score(&self) -> u32 {
        21
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            let mut items = vec![
                Item::scored(
                    FREQUENCY,
                    "¿Con qué frecuencia pierde orina?",
                    ScoreRange::new(0, 5),
                ),
                Item::scored(
                    AMOUNT,
                    "Indique la cantidad de orina que cree que se le escapa",
                    ScoreRange::stepped(0, 6, 2),
                ),
                Item::scored(
                    IMPACT,
                    "¿En qué medida afectan estos escapes a su vida diaria?",
                    ScoreRange::new(0, 10),
                ),
            ];
            items.extend(SITUATIONS.iter().map(|(id, label)| Item::flag(id, label)));
            items
        });
        &ITEMS
    }

    fn score(&self, answers: &Answers) -> Scored {
        let total = score(&IciqAnswers::from(answers));
        Scored {
            score: total,
            interpretation: IciqBand::from_score(total).label().to_string(),
        }
    }

    fn recommendations(&self, answers: &Answers) -> Recommendations {
        recommendations(&IciqAnswers::from(answers))
    }
}
