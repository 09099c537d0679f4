use serde::Deserialize;

/// Role stored with the session. Anything outside the three known roles is
/// carried verbatim and grants no visibility or admin capability.
#[derive(Debug, Clone, PartialEq, Eq, strum::EnumString, strum::Display)]
pub enum Rol {
    #[strum(serialize = "administrador")]
    Administrador,
    #[strum(serialize = "maestro")]
    Maestro,
    #[strum(serialize = "alumno")]
    Alumno,
    #[strum(default)]
    Otro(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoResponsable {
    Maestro,
    Administrador,
}

/// A person who can be made accountable for an event, merged client-side
/// from the maestro and administrador lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Responsable {
    pub id: Option<i64>,
    pub name: String,
    pub tipo: TipoResponsable,
}

/// Registered-user counts per role, for the reporting charts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TotalUsuarios {
    #[serde(default)]
    pub admins: u32,
    #[serde(default)]
    pub maestros: u32,
    #[serde(default)]
    pub alumnos: u32,
}
