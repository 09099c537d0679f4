use crate::config::model::{Config, Session};
use crate::error::ApiError;
use crate::eventos::api::EventosAPI;
use crate::eventos::filter::visible_to;
use crate::eventos::model::Evento;
use crate::screens::modals::DeleteConfirmation;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Only administrators may delete events.
    NotAllowed,
    /// The user declined the confirmation dialog.
    Cancelled,
    Deleted,
}

/// The event listing. Holds the events visible to the session's role.
pub struct EventosScreen {
    pub lista_eventos: Vec<Evento>,
    session: Session,
    api: EventosAPI,
}

impl EventosScreen {
    pub fn new(config: &Config, session: Session) -> Self {
        Self {
            lista_eventos: Vec::new(),
            api: EventosAPI::new(config, &session),
            session,
        }
    }

    /// The listing is only reachable with a session token.
    pub fn requires_login(&self) -> bool {
        self.session.token.is_none()
    }

    /// Edit and delete actions are only offered to administrators.
    pub fn can_manage_events(&self) -> bool {
        self.session.is_admin()
    }

    #[instrument(skip(self), fields(rol = %self.session.rol))]
    pub async fn load_events(&mut self) -> Result<(), ApiError> {
        let eventos = self.api.list_events().await?;
        debug!("Fetched {} events", eventos.len());

        self.lista_eventos = visible_to(&self.session.rol, eventos);
        info!("{} events visible for this role", self.lista_eventos.len());

        Ok(())
    }

    /// Case-insensitive substring search over the event name and type.
    pub fn search(&self, filter: &str) -> Vec<&Evento> {
        let needle = filter.trim().to_lowercase();

        self.lista_eventos
            .iter()
            .filter(|evento| {
                evento.nombre_evento.to_lowercase().contains(&needle)
                    || evento
                        .tipo_evento
                        .is_some_and(|tipo| tipo.to_string().to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Deletes an event and reloads the listing. Requires the administrator
    /// role and a confirmed dialog.
    #[instrument(skip(self, confirmation))]
    pub async fn delete_event(
        &mut self,
        id_evento: i64,
        confirmation: DeleteConfirmation,
    ) -> Result<DeleteOutcome, ApiError> {
        if !self.session.is_admin() {
            warn!("Delete rejected for role {}", self.session.rol);
            return Ok(DeleteOutcome::NotAllowed);
        }

        if !confirmation.is_delete {
            info!("Delete cancelled by the user");
            return Ok(DeleteOutcome::Cancelled);
        }

        self.api.delete_event(id_evento).await?;
        info!("Event deleted");

        self.load_events().await?;

        Ok(DeleteOutcome::Deleted)
    }
}
