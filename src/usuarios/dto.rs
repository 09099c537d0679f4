use super::model::{Responsable, TipoResponsable};
use serde::Deserialize;

/// Wire shape shared by the maestro and administrador lists. The nested user
/// record is missing for accounts created before the user tables were linked.
#[derive(Debug, Deserialize)]
pub struct PersonaResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user: Option<UserResponse>,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl PersonaResponse {
    pub fn to_responsable(&self, tipo: TipoResponsable) -> Responsable {
        match &self.user {
            Some(user) => Responsable {
                id: Some(user.id),
                name: format!("{} {}", user.first_name, user.last_name),
                tipo,
            },
            None => Responsable {
                id: self.id,
                name: "Nombre no disponible".to_string(),
                tipo,
            },
        }
    }
}
