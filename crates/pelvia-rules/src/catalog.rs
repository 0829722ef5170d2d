//! Identifier → display label tables.
//!
//! The engine only ever emits identifiers. Anything that shows them to a
//! person resolves them through a [`LabelLookup`], so the wording (and the
//! locale) can change without touching the rules.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Resolve identifiers to human-readable labels.
pub trait LabelLookup: Send + Sync {
    fn label(&self, id: &str) -> Option<String>;
}

impl LabelLookup for HashMap<String, String> {
    fn label(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

/// Label for `id`, or the id itself when the lookup has no entry.
pub fn resolve(lookup: &dyn LabelLookup, id: &str) -> String {
    lookup.label(id).unwrap_or_else(|| id.to_string())
}

/// The built-in Spanish catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl LabelLookup for Catalog {
    fn label(&self, id: &str) -> Option<String> {
        ITEMS.get(id).map(|s| s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: &'static str,
    pub label: &'static str,
}

const fn entry(code: &'static str, label: &'static str) -> CodeEntry {
    CodeEntry { code, label }
}

/// ICD-10 diagnosis codes used by the clinic.
pub const CIE10_CODES: [CodeEntry; 12] = [
    entry("N81.0", "Uretrocele femenino"),
    entry("N81.1", "Cistocele"),
    entry("N81.2", "Prolapso uterovaginal incompleto"),
    entry("N81.3", "Prolapso uterovaginal completo"),
    entry("N81.4", "Prolapso uterovaginal sin otra especificación"),
    entry("N81.5", "Enterocele vaginal"),
    entry("N81.6", "Rectocele"),
    entry("N81.8", "Otros prolapsos genitales femeninos"),
    entry("R32", "Incontinencia urinaria no especificada"),
    entry("N39.3", "Incontinencia urinaria de esfuerzo"),
    entry("N39.4", "Otras incontinencias urinarias especificadas"),
    entry("M62.8", "Otros trastornos especificados de los músculos (Debilidad SP)"),
];

/// ICF functioning codes offered for manual classification.
pub const CIF_CODES: [CodeEntry; 5] = [
    entry("b6202", "Funciones de la continencia urinaria"),
    entry("b640", "Funciones relacionadas con el patrón sexual"),
    entry("s610", "Estructura del sistema urinario"),
    entry("s750", "Estructura de la región pélvica"),
    entry("d530", "Control de la micción"),
];

pub fn find_cie10(code: &str) -> Option<&'static CodeEntry> {
    CIE10_CODES.iter().find(|e| e.code == code)
}

pub fn find_cif(code: &str) -> Option<&'static CodeEntry> {
    CIF_CODES.iter().find(|e| e.code == code)
}

static ITEMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // tasks
        ("task_contraction_coord", "Coordinación de Contracción Perineal"),
        ("task_knack_practice", "Práctica del \"Knack\" (Protección al Esfuerzo)"),
        ("task_transverso_activation", "Activación del Transverso Abdominal"),
        ("task_deadbug_mod", "Deadbug Modificado (Nivel 1)"),
        ("task_walk_run_progression", "Progresión Caminata-Trote"),
        ("task_calf_strength", "Fortalecimiento de Pantorrillas"),
        ("task_delayed_voiding", "Micción Programada / Retraso"),
        ("task_relax_breathing", "Respiración Diafragmática de Relajación"),
        ("task_hypopressive_intro", "Iniciación a Hipopresivos"),
        ("task_keel_elevation", "Elevación Pélvica (Keel)"),
        ("task_scar_mobilization", "Movilización de Cicatriz"),
        ("task_desensitization", "Desensibilización de Cicatriz"),
        ("task_iluu_massage", "Masaje Abdominal (ILU)"),
        ("task_breathing_relaxation", "Respiración y Relajación Defecatoria"),
        ("task_dilatadores_prog", "Progresión con Dilatadores"),
        ("task_relax_pelvic", "Relajación del Suelo Pélvico"),
        ("task_rest", "Descanso Activo"),
        // education
        ("edu_knack", "¿Qué es el Knack? Protección al toser"),
        ("edu_presion_intra_abd", "Manejo de la Presión Intra-abdominal"),
        ("edu_faja_abdominal", "Uso correcto de la Faja Abdominal"),
        ("edu_log_rolling", "Técnica de Log Rolling para salir de la cama"),
        ("edu_retorno_gradual", "Protocolo de Retorno Gradual al Impacto"),
        ("edu_calzado", "Recomendaciones de Calzado adecuado"),
        ("edu_irritantes_vesicales", "Lista de Irritantes Vesicales"),
        ("edu_entrenamiento_vejiga", "Técnicas de Entrenamiento Vesical"),
        ("edu_gestion_presion", "Gestión de Presiones en la vida diaria"),
        ("edu_postura_defecatoria", "Postura Correcta para la Defecación"),
        ("edu_masaje_cicatriz", "Automasaje de Cicatriz"),
        ("edu_fases_cicatrizacion", "Fases de la Cicatrización"),
        ("edu_fibra_hidratacion", "Fibra e Hidratación"),
        ("edu_blow_before_cough", "Soplar antes de Toser"),
        ("edu_respuesta_sexual", "Respuesta Sexual y Dolor"),
        ("edu_lubricantes", "Uso de Lubricantes"),
        ("edu_lifestyle_general", "Recomendaciones Generales de Estilo de Vida"),
        // tests
        ("test_tos_stress", "Test de Esfuerzo con Tos"),
        ("eval_fuerza_piso", "Evaluación de Fuerza del Suelo Pélvico"),
        ("diario_miccional", "Diario Miccional"),
        ("test_retencion", "Test de Retención"),
        ("pop_q_simplificado", "POP-Q Simplificado"),
        ("eval_maniobra_valsalva", "Evaluación con Maniobra de Valsalva"),
        ("test_ird", "Distancia Inter-Rectos"),
        ("test_control_motor_abd", "Control Motor Abdominal"),
        ("test_load_impact", "Test de Carga e Impacto"),
        ("test_single_leg_hop", "Salto Monopodal"),
        ("eval_movilidad_cicatriz", "Movilidad de Cicatriz"),
        ("eval_sensibilidad", "Sensibilidad de Cicatriz"),
        ("eval_bristol", "Escala de Bristol"),
        ("test_control_tos", "Control de Tos"),
        ("eval_sensibilizacion", "Evaluación de Sensibilización"),
        ("mapa_dolor_pelvico", "Mapa de Dolor Pélvico"),
        // interventions
        ("edu_pain", "Educación Neurofisiología Dolor"),
        ("manual_pf", "Terapia Manual Suelo Pélvico"),
        ("biofeedback", "Biofeedback"),
        ("electro", "Electroestimulación (TENS/EMS)"),
        ("ex_core", "Control Motor / Core"),
        ("ex_breat", "Reeducación Respiratoria"),
        ("ex_str", "Entrenamiento Fuerza"),
        ("ex_mob", "Movilidad Pélvica/Cadera"),
        ("ex_core_stab", "Estabilización Lumbopélvica"),
        ("edu_hygiene", "Educación Higiene Pélvica"),
        // exam fields
        ("anamnesis", "Anamnesis / Historia"),
        ("motive", "Motivo de Consulta"),
        ("history", "Historia Clínica"),
        ("gynaecological", "Antecedentes Ginecológicos"),
        ("obstetric", "Antecedentes Obstétricos"),
        ("surgeries", "Cirugías"),
        ("lifestyle", "Estilo de Vida"),
        ("exercise", "Ejercicio Físico"),
        ("diet", "Hábitos Alimenticios"),
        ("sleep", "Higiene del Sueño"),
        ("bladder", "Vejiga / Urinario"),
        ("bowel", "Intestino / Defecatorio"),
        ("sexual", "Esfera Sexual"),
        ("msk", "Evaluación Musculoesquelética (MSK)"),
        ("posture", "Postura"),
        ("motorControl", "Control Motor"),
        ("diastasis", "Diástasis (DRA)"),
        ("irdSupra", "Distancia Inter-Rectos (Supra)"),
        ("irdInfra", "Distancia Inter-Rectos (Infra)"),
        ("doming", "Abombamiento (Doming)"),
        ("pelvic", "Suelo Pélvico"),
        ("skin", "Piel / Mucosa"),
        ("reflexes", "Reflejos"),
        ("sensation", "Sensibilidad"),
        ("oxford", "Fuerza (Oxford)"),
        ("endurance", "Resistencia"),
        ("reps", "Repeticiones"),
        ("hiatus", "Hiato Urogenital"),
        ("prolapse", "Prolapso"),
        ("painMap", "Mapa de Dolor"),
        ("plan", "Plan de Tratamiento"),
        ("diagnosis", "Diagnóstico Kinésico"),
        ("goals", "Objetivos Terapéuticos"),
        ("frequency", "Frecuencia de Sesiones"),
    ])
});
