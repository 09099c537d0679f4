use super::dto::EventoResponse;
use super::model::Evento;
use crate::config::model::{Config, Session};
use crate::error::ApiError;
use lazy_static::lazy_static;
use reqwest::{Client, RequestBuilder};
use tracing::{error, info};

const EVENTOS_PATH: &str = "eventos-academicos";
const LISTA_EVENTOS_PATH: &str = "lista-eventos";

lazy_static! {
    static ref REST_CLIENT: Client = Client::new();
}

/// Client for the academic-event endpoints. The bearer token is attached to
/// every call when the session has one; otherwise the call goes out
/// unauthenticated and the server decides.
pub struct EventosAPI {
    base_url: String,
    session_token: Option<String>,
}

impl EventosAPI {
    pub fn new(config: &Config, session: &Session) -> Self {
        Self {
            base_url: config.api_url.clone(),
            session_token: session.token.clone(),
        }
    }

    #[tracing::instrument(skip(self, evento), fields(nombre = %evento.nombre_evento))]
    pub async fn create_event(&self, evento: &Evento) -> Result<Evento, ApiError> {
        info!("Registering event");

        let response = self
            .authorize(REST_CLIENT.post(format!("{}/{}/", self.base_url, EVENTOS_PATH)))
            .json(evento)
            .send()
            .await?
            .error_for_status()?;

        Self::parse_event(response.text().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn event_by_id(&self, id_evento: i64) -> Result<Evento, ApiError> {
        info!("Getting event");

        let response = self
            .authorize(REST_CLIENT.get(format!(
                "{}/{}/?id={}",
                self.base_url, EVENTOS_PATH, id_evento
            )))
            .send()
            .await?
            .error_for_status()?;

        Self::parse_event(response.text().await?)
    }

    #[tracing::instrument(skip(self, evento), fields(id = ?evento.id))]
    pub async fn update_event(&self, evento: &Evento) -> Result<Evento, ApiError> {
        info!("Updating event");

        let response = self
            .authorize(REST_CLIENT.put(format!("{}/{}/", self.base_url, EVENTOS_PATH)))
            .json(evento)
            .send()
            .await?
            .error_for_status()?;

        Self::parse_event(response.text().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_event(&self, id_evento: i64) -> Result<(), ApiError> {
        info!("Deleting event");

        self.authorize(REST_CLIENT.delete(format!(
            "{}/{}/?id={}",
            self.base_url, EVENTOS_PATH, id_evento
        )))
        .send()
        .await?
        .error_for_status()?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_events(&self) -> Result<Vec<Evento>, ApiError> {
        info!("Getting all events");

        let json_response = self
            .authorize(REST_CLIENT.get(format!("{}/{}/", self.base_url, LISTA_EVENTOS_PATH)))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        match serde_json::from_str::<Vec<EventoResponse>>(&json_response) {
            Ok(parsed_response) => Ok(parsed_response
                .iter()
                .map(EventoResponse::to_model)
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

    fn parse_event(json_response: String) -> Result<Evento, ApiError> {
        match serde_json::from_str::<EventoResponse>(&json_response) {
            Ok(parsed_response) => Ok(parsed_response.to_model()),
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(ApiError::InvalidResponse)
            }
        }
    }
}
