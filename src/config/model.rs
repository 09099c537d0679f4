use crate::usuarios::model::Rol;

/// The single configuration value of the client: where the school API lives.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
}

/// Who is using the screens. Built once at startup and handed to every
/// controller at construction.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer credential. Absent means calls go out unauthenticated.
    pub token: Option<String>,
    pub rol: Rol,
    pub user_name: String,
    pub user_id: Option<i64>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.rol == Rol::Administrador
    }
}
