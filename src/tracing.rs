use std::{env, io};
use tokio::task::JoinHandle;
use tracing::{info, warn, Level};
use tracing_loki::url::Url;
use tracing_loki::BackgroundTaskController;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

const SERVICE_NAME: &str = "agendaescolar";

/// Logs go to stdout; when `LOKI_URL` is set and reachable they are shipped
/// to Loki as well. Returns the shipper controller and task handle so the
/// caller can flush on exit.
pub async fn init_logging() -> Option<(BackgroundTaskController, JoinHandle<()>)> {
    let targets = filter::Targets::new()
        .with_target(SERVICE_NAME, Level::TRACE)
        .with_default(Level::WARN);

    let registry = tracing_subscriber::registry()
        .with(targets)
        .with(fmt::layer().with_writer(io::stdout));

    let base_url = match env::var("LOKI_URL") {
        Ok(base_url) => base_url,
        Err(_) => {
            registry.init();
            warn!("Loki URL not provided. Continuing without it.");
            return None;
        }
    };

    let base_url: Url = base_url.parse().expect("Invalid URL format");

    if reqwest::get(base_url.clone()).await.is_err() {
        registry.init();
        warn!("Couldn't connect to Loki. Continuing without it.");
        return None;
    }

    let (layer, controller, task) = tracing_loki::builder()
        .label("service", SERVICE_NAME)
        .expect("Failed setting label")
        .build_controller_url(base_url)
        .expect("Failed building the Loki layer");

    registry.with(layer).init();
    let handle = tokio::spawn(task);

    info!("Loki initialized");

    Some((controller, handle))
}
