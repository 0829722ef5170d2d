use pelvia_core::models::cluster::Cluster;
use pelvia_core::models::exam::{ExamSnapshot, Hiatus};

const INCONTINENCE_CLUSTERS: [&str; 2] = ["ui_effort", "ui_urgency"];
const PROLAPSE_CLUSTER: &str = "prolapse_sensation";

/// Draft SMART goals for clinician review. Nothing here is applied automatically.
///
/// Deterministic for identical inputs. Returns nothing when no cluster is
/// active: without a working hypothesis there is nothing to set goals against.
pub fn generate_smart_goals(active_clusters: &[Cluster], exam: &ExamSnapshot) -> Vec<String> {
    if active_clusters.is_empty() {
        return Vec::new();
    }

    let has_cluster = |id: &str| active_clusters.iter().any(|c| c.id == id);
    let pelvic = exam.pelvic.as_ref();
    let mut goals = Vec::new();

    let leaks = exam.questionnaire.as_ref().is_some_and(|q| q.score > 0);
    if leaks || INCONTINENCE_CLUSTERS.iter().any(|id| has_cluster(*id)) {
        goals.push(
            "Reducir la frecuencia de escapes de orina en un 50% en 4 semanas.".to_string(),
        );
        goals.push(
            "Lograr mantener la continencia ante esfuerzos moderados (tos, estornudo) en 6 semanas."
                .to_string(),
        );
    }

    match pelvic.and_then(|p| p.oxford) {
        Some(oxford) if oxford < 3 => goals.push(format!(
            "Aumentar la fuerza muscular del suelo pélvico de Oxford {oxford} a {} en 4 semanas \
             mediante entrenamiento de fuerza.",
            oxford + 1
        )),
        Some(oxford) if oxford < 5 => goals.push(format!(
            "Mejorar la resistencia muscular del suelo pélvico manteniendo contracción Oxford \
             {oxford} por 10 segundos en 4 semanas."
        )),
        _ => {}
    }

    goals.push(
        "Automatizar la contracción anticipatoria (Knack) en el 80% de los eventos de \
         tos/esfuerzo en 3 semanas."
            .to_string(),
    );

    let open_hiatus = pelvic.is_some_and(|p| p.hiatus == Some(Hiatus::Abierto));
    if has_cluster(PROLAPSE_CLUSTER) || open_hiatus {
        goals.push(
            "Disminuir la sensación de peso/bulto vaginal (VAS) en 2 puntos en 5 semanas \
             mediante ejercicios hipopresivos y pautas posturales."
                .to_string(),
        );
    }

    if pelvic.is_some_and(|p| p.dyspareunia) {
        goals.push(
            "Lograr relaciones sexuales sin dolor (VAS 0) en 8 semanas mediante terapia manual \
             y dilatadores."
                .to_string(),
        );
    }

    goals.push(
        "Lograr una adherencia >80% a la pauta de ejercicios domiciliarios en el primer mes."
            .to_string(),
    );

    goals
}
