use crate::config::model::{Config, Session};
use crate::eventos::api::EventosAPI;
use crate::eventos::model::Evento;
use crate::usuarios::api::UsuariosAPI;
use crate::usuarios::model::TotalUsuarios;
use chrono::Datelike;
use tracing::{error, info, instrument};

pub const MESES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

pub const ROLES_LABELS: [&str; 3] = ["Administradores", "Maestros", "Alumnos"];

const SIN_TIPO_LABEL: &str = "Sin Tipo";

/// Labels plus one value per label, ready to hand to a charting layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<u32>,
}

/// The reporting screen: per-type and per-month event counts plus the
/// registered-user totals.
pub struct GraficasScreen {
    pub total_user: Option<TotalUsuarios>,
    pub eventos_por_tipo: ChartSeries,
    pub eventos_por_mes: ChartSeries,
    pub usuarios_por_rol: ChartSeries,
    eventos_api: EventosAPI,
    usuarios_api: UsuariosAPI,
}

impl GraficasScreen {
    pub fn new(config: &Config, session: &Session) -> Self {
        Self {
            total_user: None,
            eventos_por_tipo: ChartSeries::default(),
            eventos_por_mes: ChartSeries::default(),
            usuarios_por_rol: ChartSeries::default(),
            eventos_api: EventosAPI::new(config, session),
            usuarios_api: UsuariosAPI::new(config, session),
        }
    }

    /// Fetches totals and events. The two calls are independent; a failure
    /// of one leaves the other's charts populated.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        let (totals, eventos) = futures::join!(
            self.usuarios_api.total_usuarios(),
            self.eventos_api.list_events()
        );

        match totals {
            Ok(totals) => {
                self.usuarios_por_rol = ChartSeries {
                    labels: ROLES_LABELS.iter().map(|label| label.to_string()).collect(),
                    data: vec![totals.admins, totals.maestros, totals.alumnos],
                };
                self.total_user = Some(totals);
            }
            Err(err) => error!("Failed to get user totals: {err}"),
        }

        match eventos {
            Ok(eventos) => {
                info!("Charting {} events", eventos.len());
                self.eventos_por_tipo = counts_by_type(&eventos);
                self.eventos_por_mes = counts_by_month(&eventos);
            }
            Err(err) => error!("Failed to get events: {err}"),
        }
    }
}

/// One bar per event type, in order of first appearance. Events without a
/// type are counted under "Sin Tipo".
pub fn counts_by_type(eventos: &[Evento]) -> ChartSeries {
    let mut labels: Vec<String> = Vec::new();
    let mut data: Vec<u32> = Vec::new();

    for evento in eventos {
        let tipo = evento
            .tipo_evento
            .map(|tipo| tipo.to_string())
            .unwrap_or_else(|| SIN_TIPO_LABEL.to_string());

        match labels.iter().position(|label| *label == tipo) {
            Some(index) => data[index] += 1,
            None => {
                labels.push(tipo);
                data.push(1);
            }
        }
    }

    ChartSeries { labels, data }
}

/// Twelve buckets, January first. Events without a usable date are skipped.
pub fn counts_by_month(eventos: &[Evento]) -> ChartSeries {
    let mut data = vec![0u32; 12];

    for evento in eventos {
        if let Some(fecha) = evento.fecha {
            data[fecha.month0() as usize] += 1;
        }
    }

    ChartSeries {
        labels: MESES.iter().map(|mes| mes.to_string()).collect(),
        data,
    }
}
