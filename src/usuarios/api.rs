use super::dto::PersonaResponse;
use super::model::{Responsable, TipoResponsable, TotalUsuarios};
use crate::config::model::{Config, Session};
use crate::error::ApiError;
use lazy_static::lazy_static;
use reqwest::{Client, RequestBuilder};
use tracing::{error, info};

const LISTA_MAESTROS_PATH: &str = "lista-maestros";
const LISTA_ADMINS_PATH: &str = "lista-admins";
const TOTAL_USUARIOS_PATH: &str = "total-usuarios";

lazy_static! {
    static ref REST_CLIENT: Client = Client::new();
}

/// Client for the people endpoints: responsible-party candidates and the
/// per-role totals used by the charts.
pub struct UsuariosAPI {
    base_url: String,
    session_token: Option<String>,
}

impl UsuariosAPI {
    pub fn new(config: &Config, session: &Session) -> Self {
        Self {
            base_url: config.api_url.clone(),
            session_token: session.token.clone(),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_maestros(&self) -> Result<Vec<Responsable>, ApiError> {
        info!("Getting maestros");

        self.list_personas(LISTA_MAESTROS_PATH, TipoResponsable::Maestro)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_admins(&self) -> Result<Vec<Responsable>, ApiError> {
        info!("Getting administradores");

        self.list_personas(LISTA_ADMINS_PATH, TipoResponsable::Administrador)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn total_usuarios(&self) -> Result<TotalUsuarios, ApiError> {
        info!("Getting user totals");

        let json_response = self
            .authorize(REST_CLIENT.get(format!("{}/{}/", self.base_url, TOTAL_USUARIOS_PATH)))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        match serde_json::from_str::<TotalUsuarios>(&json_response) {
            Ok(totals) => Ok(totals),
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(ApiError::InvalidResponse)
            }
        }
    }

    async fn list_personas(
        &self,
        path: &str,
        tipo: TipoResponsable,
    ) -> Result<Vec<Responsable>, ApiError> {
        let json_response = self
            .authorize(REST_CLIENT.get(format!("{}/{}/", self.base_url, path)))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        match serde_json::from_str::<Vec<PersonaResponse>>(&json_response) {
            Ok(personas) => Ok(personas
                .iter()
                .map(|persona| persona.to_responsable(tipo))
                .collect()),
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(ApiError::InvalidResponse)
            }
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}
