use agendaescolar::config::env_loader::{load_config, load_session};
use agendaescolar::screens::eventos::EventosScreen;
use agendaescolar::tracing::init_logging;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    let _loki = init_logging().await;

    let config = load_config();
    let session = load_session();

    let mut screen = EventosScreen::new(&config, session);

    if screen.requires_login() {
        warn!("No session token found. Requests will go out unauthenticated.");
    }

    screen.load_events().await.unwrap();

    screen.lista_eventos.iter().for_each(|evento| {
        info!(
            "{} ({:?}) at {}: {} - {}",
            evento.nombre_evento,
            evento.tipo_evento,
            evento.lugar,
            evento.hora_inicio,
            evento.hora_final
        )
    });
}
