use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pelvia_core::models::exam::ExamSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FlagSeverity {
    /// Needs referral before treatment continues.
    Red,
    /// Needs clinical follow-up.
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RedFlag {
    pub id: &'static str,
    pub label: &'static str,
    pub severity: FlagSeverity,
}

pub const RED_FLAGS: [RedFlag; 6] = [
    RedFlag {
        id: "cauda_equina",
        label: "Síndrome Cauda Equina (Anestesia silla montar)",
        severity: FlagSeverity::Red,
    },
    RedFlag {
        id: "bleeding_postmeno",
        label: "Sangrado Post-Menopáusico",
        severity: FlagSeverity::Red,
    },
    RedFlag {
        id: "weight_loss",
        label: "Pérdida de peso inexplicable",
        severity: FlagSeverity::Red,
    },
    RedFlag {
        id: "severe_night_pain",
        label: "Dolor nocturno severo constante",
        severity: FlagSeverity::Yellow,
    },
    RedFlag {
        id: "recent_trauma",
        label: "Trauma reciente no evaluado",
        severity: FlagSeverity::Yellow,
    },
    RedFlag {
        id: "infection_signs",
        label: "Signos de infección (Fiebre, etc)",
        severity: FlagSeverity::Red,
    },
];

pub fn find_red_flag(id: &str) -> Option<&'static RedFlag> {
    RED_FLAGS.iter().find(|f| f.id == id)
}

/// Flags recorded on the exam, as given.
pub fn extract_red_flags(exam: &ExamSnapshot) -> Vec<String> {
    exam.red_flags.clone()
}

/// True when any recorded flag is red. Unknown ids are ignored.
pub fn has_critical_red_flag<S: AsRef<str>>(flag_ids: &[S]) -> bool {
    flag_ids.iter().any(|id| {
        find_red_flag(AsRef::<str>::as_ref(id)).is_some_and(|f| f.severity == FlagSeverity::Red)
    })
}
