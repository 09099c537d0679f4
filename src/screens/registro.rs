use crate::config::model::{Config, Session};
use crate::error::ApiError;
use crate::eventos::api::EventosAPI;
use crate::eventos::model::{Evento, AUDIENCIA_ESTUDIANTES};
use crate::eventos::time::{to_12_hour, to_24_hour};
use crate::eventos::validator::{self, ValidationErrors};
use crate::screens::modals::EditConfirmation;
use crate::usuarios::api::UsuariosAPI;
use crate::usuarios::model::Responsable;
use tracing::{error, info, instrument};

/// What happened to a submit attempt. Transport failures are reported
/// separately, through the `Result`.
#[derive(Debug, PartialEq, Eq)]
pub enum FormOutcome {
    /// Validation failed; the field errors stay on the screen.
    Invalid,
    /// The user declined the confirmation dialog.
    Cancelled,
    Saved,
}

/// The create/edit form. Holds the record being edited, the current field
/// errors and the responsible-party candidates for the select.
pub struct RegistroEventosScreen {
    pub evento: Evento,
    pub errors: ValidationErrors,
    pub editar: bool,
    pub id_evento: Option<i64>,
    pub responsables: Vec<Responsable>,
    eventos_api: EventosAPI,
    usuarios_api: UsuariosAPI,
}

impl RegistroEventosScreen {
    /// A registration form over the empty event schema.
    pub fn new(config: &Config, session: &Session) -> Self {
        Self {
            evento: Evento::default(),
            errors: ValidationErrors::new(),
            editar: false,
            id_evento: None,
            responsables: Vec::new(),
            eventos_api: EventosAPI::new(config, session),
            usuarios_api: UsuariosAPI::new(config, session),
        }
    }

    /// Opens the form over an existing event. Stored times arrive in 24-hour
    /// format and are shown in 12-hour format while editing.
    #[instrument(skip(config, session))]
    pub async fn for_edit(
        config: &Config,
        session: &Session,
        id_evento: i64,
    ) -> Result<Self, ApiError> {
        let mut screen = Self::new(config, session);
        screen.editar = true;
        screen.id_evento = Some(id_evento);

        let mut evento = screen.eventos_api.event_by_id(id_evento).await?;
        evento.hora_inicio = to_12_hour(&evento.hora_inicio);
        evento.hora_final = to_12_hour(&evento.hora_final);
        screen.evento = evento;

        info!("Loaded event for editing");

        Ok(screen)
    }

    /// Maestros first, then administradores. A failure fetching the
    /// administradores keeps the maestros that already arrived.
    #[instrument(skip(self))]
    pub async fn load_responsables(&mut self) -> Result<(), ApiError> {
        self.responsables = self.usuarios_api.list_maestros().await?;

        match self.usuarios_api.list_admins().await {
            Ok(admins) => self.responsables.extend(admins),
            Err(err) => error!("Failed to load administradores: {err}"),
        }

        info!("Loaded {} responsables", self.responsables.len());

        Ok(())
    }

    /// Mirrors an audience checkbox. Unticking Estudiantes clears the
    /// programa educativo, which only applies to them.
    pub fn set_audience(&mut self, tag: &str, checked: bool) {
        if checked {
            self.evento.publico_objetivo.push(tag.to_string());
        } else {
            self.evento.publico_objetivo.retain(|publico| publico != tag);
        }

        if !self.evento.audience_includes(AUDIENCIA_ESTUDIANTES) {
            self.evento.programa_educativo.clear();
        }
    }

    pub fn requires_programa_educativo(&self) -> bool {
        self.evento.audience_includes(AUDIENCIA_ESTUDIANTES)
    }

    #[instrument(skip(self), fields(nombre = %self.evento.nombre_evento))]
    pub async fn register(&mut self) -> Result<FormOutcome, ApiError> {
        if !self.validate() {
            return Ok(FormOutcome::Invalid);
        }

        let saved = self.eventos_api.create_event(&self.payload()).await?;
        info!("Event registered: {}", saved.nombre_evento);

        Ok(FormOutcome::Saved)
    }

    /// Editing additionally needs the confirmation dialog's blessing before
    /// anything is sent.
    #[instrument(skip(self, confirmation), fields(id = ?self.id_evento))]
    pub async fn update(&mut self, confirmation: EditConfirmation) -> Result<FormOutcome, ApiError> {
        if !self.validate() {
            return Ok(FormOutcome::Invalid);
        }

        if !confirmation.is_edit {
            info!("Edit cancelled by the user");
            return Ok(FormOutcome::Cancelled);
        }

        let saved = self.eventos_api.update_event(&self.payload()).await?;
        info!("Event updated: {}", saved.nombre_evento);

        Ok(FormOutcome::Saved)
    }

    fn validate(&mut self) -> bool {
        self.errors = validator::validate(&self.evento, self.editar);
        self.errors.is_empty()
    }

    // The record goes out with both times back in 24-hour format.
    fn payload(&self) -> Evento {
        let mut payload = self.evento.clone();
        payload.hora_inicio = to_24_hour(&self.evento.hora_inicio);
        payload.hora_final = to_24_hour(&self.evento.hora_final);
        payload
    }
}
