use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pelvia_core::models::questionnaire::{Answers, QuestionnaireKind};

use crate::scoring::{Item, Recommendations, ScoreRange, Scored};
use crate::Instrument;

pub const ITEM_IDS: [&str; 6] = ["q1", "q2", "q3", "q4", "q5", "q6"];

/// Highest possible raw sum: six items rated 0–3.
const MAX_RAW: f64 = 18.0;

/// Typed view of a UDI-6 answer sheet. `None` marks an unanswered item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Udi6Answers {
    pub items: [Option<u32>; 6],
}

impl Udi6Answers {
    fn value(&self, index: usize) -> u32 {
        self.items[index].unwrap_or(0)
    }

    pub fn subscales(&self) -> Udi6Subscales {
        Udi6Subscales {
            irritative: self.value(0).saturating_add(self.value(1)),
            stress: self.value(2).saturating_add(self.value(3)),
            obstructive: self.value(4).saturating_add(self.value(5)),
        }
    }
}

impl From<&Answers> for Udi6Answers {
    fn from(answers: &Answers) -> Self {
        let mut items = [None; 6];
        for (slot, id) in items.iter_mut().zip(ITEM_IDS) {
            if answers.contains(id) {
                *slot = Some(answers.get(id));
            }
        }
        Self { items }
    }
}

/// Pairwise item sums: irritative (q1+q2), stress (q3+q4), obstructive (q5+q6).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Udi6Subscales {
    pub irritative: u32,
    pub stress: u32,
    pub obstructive: u32,
}

impl Udi6Subscales {
    /// The subscale strictly greater than both others, if any.
    pub fn dominant(&self) -> Udi6Pattern {
        let Udi6Subscales {
            irritative,
            stress,
            obstructive,
        } = *self;
        if irritative > stress && irritative > obstructive {
            Udi6Pattern::Irritative
        } else if stress > irritative && stress > obstructive {
            Udi6Pattern::Stress
        } else if obstructive > irritative && obstructive > stress {
            Udi6Pattern::Obstructive
        } else {
            Udi6Pattern::Mixed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Udi6Pattern {
    Irritative,
    Stress,
    Obstructive,
    /// Tie between the top subscales, including all zero.
    Mixed,
}

impl Udi6Pattern {
    pub fn label(&self) -> &'static str {
        match self {
            Udi6Pattern::Irritative => "Predominio Urgencia/Irritativo",
            Udi6Pattern::Stress => "Predominio Esfuerzo (Stress)",
            Udi6Pattern::Obstructive => "Predominio Obstructivo/Dolor",
            Udi6Pattern::Mixed => "Mixta / Balanceada",
        }
    }
}

/// Full UDI-6 analysis: normalized score, subscales and dominant pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Udi6Analysis {
    pub score: u32,
    pub subscales: Udi6Subscales,
    pub pattern: Udi6Pattern,
    pub interpretation: String,
}

/// Raw sum scaled to 0–100 over a fixed denominator of 18, rounded to nearest.
/// Unanswered items count as zero; an empty sheet scores 0.
pub fn score(answers: &Udi6Answers) -> u32 {
    let sum = answers
        .items
        .iter()
        .flatten()
        .fold(0u32, |acc, v| acc.saturating_add(*v));
    ((f64::from(sum) / MAX_RAW) * 100.0).round() as u32
}

pub fn analyze(answers: &Udi6Answers) -> Udi6Analysis {
    let score = score(answers);
    let subscales = answers.subscales();
    let pattern = subscales.dominant();
    Udi6Analysis {
        score,
        subscales,
        pattern,
        interpretation: format!(
            "Puntaje Total: {score}/100. Patrón clínico sugiere sintomatología de {}.",
            pattern.label()
        ),
    }
}

pub fn recommendations(analysis: &Udi6Analysis) -> Recommendations {
    let s = analysis.subscales;
    let mut recs = Vec::new();

    if s.irritative > 2 {
        recs.push("Manejo conductual de la urgencia.".to_string());
        recs.push("Protocolo de reentrenamiento vesical.".to_string());
    }
    if s.stress > 2 {
        recs.push("Entrenamiento intensivo de fuerza y coordinación del piso pélvico.".to_string());
        recs.push("Manejo de la presión intra-abdominal (Knack).".to_string());
    }
    if s.obstructive > 2 {
        recs.push("Evaluación de vaciado vesical incompleto.".to_string());
        recs.push("Down-training (relajación) del piso pélvico.".to_string());
    }
    if analysis.score > 33 && recs.is_empty() {
        recs.push("Evaluación kinésica completa del piso pélvico.".to_string());
    }

    Recommendations {
        recommendations: recs,
        tasks: Vec::new(),
    }
}

/// UDI-6: Urogenital Distress Inventory, short form.
/// Six items rated 0–3, normalized to 0–100.
pub struct Udi6;

impl Instrument for Udi6 {
    fn kind(&self) -> QuestionnaireKind {
        QuestionnaireKind::Udi6
    }

    fn name(&self) -> &str {
        "UDI-6"
    }

    fn max_score(&self) -> u32 {
        100
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            let labels = [
                "¿Micción frecuente?",
                "¿Escape de orina relacionado con la sensación de urgencia?",
                "¿Escape de orina relacionado con actividad física, toser o estornudar?",
                "¿Pequeñas cantidades de escape de orina (gotas)?",
                "¿Dificultad para vaciar la vejiga?",
                "¿Dolor o incomodidad en el área abdominal baja o genital?",
            ];
            ITEM_IDS
                .iter()
                .zip(labels)
                .map(|(id, label)| Item::scored(id, label, ScoreRange::new(0, 3)))
                .collect()
        });
        &ITEMS
    }

    fn score(&self, answers: &Answers) -> Scored {
        let analysis = analyze(&Udi6Answers::from(answers));
        Scored {
            score: analysis.score,
            interpretation: analysis.interpretation,
        }
    }

    fn recommendations(&self, answers: &Answers) -> Recommendations {
        recommendations(&analyze(&Udi6Answers::from(answers)))
    }
}
