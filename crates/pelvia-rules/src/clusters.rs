use std::sync::LazyLock;

use pelvia_core::models::cluster::{CifCode, Cluster, ClusterCategory, ClusterSuggestions, Triggers};

fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn cif(code: &str, description: &str) -> CifCode {
    CifCode {
        code: code.to_string(),
        description: description.to_string(),
    }
}

struct Def<'a> {
    id: &'a str,
    label: &'a str,
    category: ClusterCategory,
    description: &'a str,
    triggers: &'a [&'a str],
    tests: &'a [&'a str],
    education: &'a [&'a str],
    tasks: &'a [&'a str],
}

impl Def<'_> {
    fn build(self, cif: Vec<CifCode>, referral: Option<&str>) -> Cluster {
        Cluster {
            id: self.id.to_string(),
            label: self.label.to_string(),
            category: self.category,
            description: self.description.to_string(),
            triggers: Triggers {
                symptoms: ids(self.triggers),
            },
            suggestions: ClusterSuggestions {
                tests: ids(self.tests),
                education: ids(self.education),
                tasks: ids(self.tasks),
                cif,
                referral: referral.map(str::to_string),
            },
        }
    }
}

static CLUSTERS: LazyLock<Vec<Cluster>> = LazyLock::new(|| {
    vec![
        Def {
            id: "ui_effort",
            label: "Incontinencia de Esfuerzo",
            category: ClusterCategory::Pelvic,
            description: "Pérdida involuntaria al toser, estornudar, reír o hacer ejercicio.",
            triggers: &[
                "escape_tos",
                "escape_salto",
                "escape_peso",
                "incontinencia_general",
                "escape_severo",
            ],
            tests: &["test_tos_stress", "eval_fuerza_piso"],
            education: &["edu_knack", "edu_presion_intra_abd"],
            tasks: &["task_contraction_coord", "task_knack_practice"],
        }
        .build(vec![cif("b6200", "Funciones de la micción")], None),
        Def {
            id: "ui_urgency",
            label: "Urgencia / Frecuencia",
            category: ClusterCategory::Pelvic,
            description: "Deseo repentino e imperioso de orinar difícil de posponer.",
            triggers: &["urgencia_fuerte", "frecuencia_alta", "nocturia"],
            tests: &["diario_miccional", "test_retencion"],
            education: &["edu_irritantes_vesicales", "edu_entrenamiento_vejiga"],
            tasks: &["task_delayed_voiding", "task_relax_breathing"],
        }
        .build(vec![cif("b6202", "Sensación de micción")], None),
        Def {
            id: "prolapse_sensation",
            label: "Sensación de Peso / Bulto",
            category: ClusterCategory::Pelvic,
            description: "Sensación de cuerpo extraño o pesadez vaginal.",
            triggers: &["peso_vaginal", "bulto_palpable", "molestia_tarde"],
            tests: &["pop_q_simplificado", "eval_maniobra_valsalva"],
            education: &["edu_gestion_presion", "edu_postura_defecatoria"],
            tasks: &["task_hypopressive_intro", "task_keel_elevation"],
        }
        .build(
            Vec::new(),
            Some("Evaluar grado. Si > Grado 2 sintomático, considerar pesario/derivación."),
        ),
        Def {
            id: "diastasis",
            label: "Diástasis / Control Abdominal",
            category: ClusterCategory::Msk,
            description: "Separación de rectos o falta de competencia abdominal.",
            triggers: &["bulto_abdominal", "dolor_lumbar_bajo", "debilidad_core"],
            tests: &["test_ird", "test_control_motor_abd"],
            education: &["edu_faja_abdominal", "edu_log_rolling"],
            tasks: &["task_transverso_activation", "task_deadbug_mod"],
        }
        .build(Vec::new(), None),
        Def {
            id: "return_run",
            label: "Retorno al Impacto",
            category: ClusterCategory::Fitness,
            description: "Usuaria postparto o post-lesión queriendo volver a correr.",
            triggers: &["deseo_correr", "postparto_4mo"],
            tests: &["test_load_impact", "test_single_leg_hop"],
            education: &["edu_retorno_gradual", "edu_calzado"],
            tasks: &["task_walk_run_progression", "task_calf_strength"],
        }
        .build(Vec::new(), None),
        Def {
            id: "c_section_scar",
            label: "Cicatriz de Cesárea",
            category: ClusterCategory::Msk,
            description: "Manejo de adherencias y sensibilidad en cicatriz.",
            triggers: &["cesarea_previa", "dolor_cicatriz"],
            tests: &["eval_movilidad_cicatriz", "eval_sensibilidad"],
            education: &["edu_masaje_cicatriz", "edu_fases_cicatrizacion"],
            tasks: &["task_scar_mobilization", "task_desensitization"],
        }
        .build(Vec::new(), None),
        Def {
            id: "constipation",
            label: "Estreñimiento / Pujo",
            category: ClusterCategory::Pelvic,
            description: "Dificultad defecatoria que puede dañar el suelo pélvico.",
            triggers: &["estrenimiento", "pujo_excesivo"],
            tests: &["eval_bristol"],
            education: &["edu_postura_defecatoria", "edu_fibra_hidratacion"],
            tasks: &["task_iluu_massage", "task_breathing_relaxation"],
        }
        .build(Vec::new(), None),
        Def {
            id: "chronic_cough",
            label: "Tos Crónica / Hiperpresión",
            category: ClusterCategory::Lifestyle,
            description: "Gestión de presión intra-abdominal repetitiva.",
            triggers: &["tos_cronica", "alergia_estacional"],
            tests: &["test_control_tos"],
            education: &["edu_blow_before_cough", "edu_presion_intra_abd"],
            tasks: &["task_knack_practice"],
        }
        .build(Vec::new(), None),
        Def {
            id: "sexual_pain",
            label: "Dolor Sexual / Dispareunia",
            category: ClusterCategory::Pelvic,
            description: "Dolor asociado a la actividad sexual (superficial o profundo).",
            triggers: &["dispareunia", "dolor_sexual"],
            tests: &["eval_sensibilizacion", "mapa_dolor_pelvico"],
            education: &["edu_respuesta_sexual", "edu_lubricantes"],
            tasks: &["task_dilatadores_prog", "task_relax_pelvic"],
        }
        .build(Vec::new(), None),
    ]
});

/// The knowledge base, in declaration order.
pub fn clusters() -> &'static [Cluster] {
    &CLUSTERS
}

pub fn find_cluster(id: &str) -> Option<&'static Cluster> {
    CLUSTERS.iter().find(|c| c.id == id)
}

/// Every symptom id referenced by a trigger, first-seen order, no repeats.
pub fn known_symptoms() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for symptom in CLUSTERS.iter().flat_map(|c| &c.triggers.symptoms) {
        if !out.contains(&symptom.as_str()) {
            out.push(symptom.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn cluster_ids_are_unique() {
        let ids: HashSet<_> = clusters().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), clusters().len());
    }

    #[test]
    fn every_cluster_has_a_trigger() {
        assert!(clusters().iter().all(|c| !c.triggers.symptoms.is_empty()));
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find_cluster("ui_effort").unwrap().label, "Incontinencia de Esfuerzo");
        assert!(find_cluster("cluster_pop").is_none());
    }

    #[test]
    fn known_symptoms_has_no_repeats() {
        let all = known_symptoms();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(all[0], "escape_tos");
    }
}
