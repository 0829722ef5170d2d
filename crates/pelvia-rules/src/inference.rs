use pelvia_core::models::exam::{comorbidity, ExamSnapshot, Hiatus};

/// Synthetic symptom ids produced from exam measurements.
pub mod symptom {
    pub const WEAK_PELVIC_FLOOR: &str = "debilidad_pelvica";
    pub const OPEN_HIATUS: &str = "hiato_abierto";
    pub const DYSPAREUNIA: &str = "dispareunia";
    pub const POOR_ABDOMINAL_CONTROL: &str = "control_abdominal_deficiente";
    pub const PRIOR_C_SECTION: &str = "cesarea_previa";
    pub const CONSTIPATION: &str = "estrenimiento";
    pub const CHRONIC_COUGH: &str = "tos_cronica";
    pub const GENERAL_INCONTINENCE: &str = "incontinencia_general";
    pub const HIGH_FREQUENCY: &str = "frecuencia_alta";
    pub const SEVERE_LEAKAGE: &str = "escape_severo";
}

/// Oxford grades below this count as a weak pelvic floor.
const OXFORD_WEAK_BELOW: u8 = 3;
/// ICIQ frequency answer from which leakage counts as frequent.
const FREQUENT_FROM: u32 = 3;
/// ICIQ amount answer from which leakage counts as severe.
const SEVERE_AMOUNT_FROM: u32 = 4;

/// Translate exam findings into symptom ids for the rule engine.
///
/// Each rule fires independently. The output may repeat an id (smoking and
/// chronic cough both yield `tos_cronica`); the matcher deduplicates.
pub fn evaluate_metrics(exam: &ExamSnapshot) -> Vec<&'static str> {
    let mut inferred = Vec::new();

    if let Some(pelvic) = &exam.pelvic {
        if pelvic.oxford.is_some_and(|o| o < OXFORD_WEAK_BELOW) {
            inferred.push(symptom::WEAK_PELVIC_FLOOR);
        }
        if pelvic.hiatus == Some(Hiatus::Abierto) {
            inferred.push(symptom::OPEN_HIATUS);
        }
        if pelvic.dyspareunia {
            inferred.push(symptom::DYSPAREUNIA);
        }
    }

    if exam.msk.as_ref().is_some_and(|m| m.doming) {
        inferred.push(symptom::POOR_ABDOMINAL_CONTROL);
    }

    if let Some(anamnesis) = &exam.anamnesis {
        if anamnesis.c_sections > 0 {
            inferred.push(symptom::PRIOR_C_SECTION);
        }
        if anamnesis.has_comorbidity(comorbidity::CONSTIPATION) {
            inferred.push(symptom::CONSTIPATION);
        }
        if anamnesis.has_comorbidity(comorbidity::CHRONIC_COUGH) {
            inferred.push(symptom::CHRONIC_COUGH);
        }
        // Smoking is a cough risk factor.
        if anamnesis.has_comorbidity(comorbidity::SMOKING) {
            inferred.push(symptom::CHRONIC_COUGH);
        }
    }

    if let Some(q) = &exam.questionnaire {
        if q.score > 0 {
            inferred.push(symptom::GENERAL_INCONTINENCE);
        }
        if q.frequency >= FREQUENT_FROM {
            inferred.push(symptom::HIGH_FREQUENCY);
        }
        if q.amount >= SEVERE_AMOUNT_FROM {
            inferred.push(symptom::SEVERE_LEAKAGE);
        }
    }

    tracing::debug!(?inferred, "inferred symptoms from exam");
    inferred
}
