use chrono::NaiveDate;
use serde::Serialize;

pub const AUDIENCIA_ESTUDIANTES: &str = "Estudiantes";
pub const AUDIENCIA_PROFESORES: &str = "Profesores";
pub const AUDIENCIA_PUBLICO_GENERAL: &str = "Público general";

/// Audience checkboxes offered by the registration form.
pub const PUBLICOS_OBJETIVO: [&str; 3] = [
    AUDIENCIA_ESTUDIANTES,
    AUDIENCIA_PROFESORES,
    AUDIENCIA_PUBLICO_GENERAL,
];

pub const PROGRAMAS_EDUCATIVOS: [&str; 3] = [
    "Ingeniería en Ciencias de la Computación",
    "Licenciatura en Ciencias de la Computación",
    "Ingeniería en Tecnologías de la Información",
];

#[derive(
    strum::IntoStaticStr,
    strum::EnumString,
    strum::Display,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
)]
pub enum TipoEvento {
    Conferencia,
    Taller,
    Seminario,
    Concurso,
}

/// An academic event, using the field names of the wire record.
///
/// The default value is the empty schema the registration form starts from;
/// the external API is the only source of populated records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Evento {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre_evento: String,
    pub tipo_evento: Option<TipoEvento>,
    pub fecha: Option<NaiveDate>,
    /// Wall-clock time, either "HH:MM" or "H:MM AM/PM".
    pub hora_inicio: String,
    pub hora_final: String,
    pub lugar: String,
    pub publico_objetivo: Vec<String>,
    /// Required only when the audience includes [`AUDIENCIA_ESTUDIANTES`].
    pub programa_educativo: String,
    pub responsable: Option<i64>,
    pub descripcion: String,
    pub cupo_maximo: Option<u32>,
}

impl Evento {
    pub fn audience_includes(&self, tag: &str) -> bool {
        self.publico_objetivo.iter().any(|publico| publico == tag)
    }
}
