use super::model::{Evento, TipoEvento};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_either::SingleOrVec;
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

// Note: the API is inconsistent about optional fields, so most String fields
// go through the lenient deserializers below. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct EventoResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub nombre_evento: String,
    #[serde(default, deserialize_with = "deserialize_tipo")]
    pub tipo_evento: Option<TipoEvento>,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub fecha: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub hora_inicio: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub hora_final: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub lugar: String,
    #[serde(default, deserialize_with = "deserialize_publico")]
    pub publico_objetivo: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub programa_educativo: String,
    #[serde(default)]
    pub responsable: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub descripcion: String,
    #[serde(default, deserialize_with = "deserialize_cupo")]
    pub cupo_maximo: Option<u32>,
}

impl EventoResponse {
    pub fn to_model(&self) -> Evento {
        Evento {
            id: self.id,
            nombre_evento: self.nombre_evento.clone(),
            tipo_evento: self.tipo_evento,
            fecha: self.fecha,
            hora_inicio: self.hora_inicio.clone(),
            hora_final: self.hora_final.clone(),
            lugar: self.lugar.clone(),
            publico_objetivo: self.publico_objetivo.clone(),
            programa_educativo: self.programa_educativo.clone(),
            responsable: self.responsable,
            descripcion: self.descripcion.clone(),
            cupo_maximo: self.cupo_maximo,
        }
    }
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

// The audience arrives as a list most of the time, but single-tag events have
// been seen as a bare string.
fn deserialize_publico<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<SingleOrVec<String>>::deserialize(d)? {
        Some(SingleOrVec::Single(tag)) => vec![tag],
        Some(SingleOrVec::Vec(tags)) => tags,
        None => Vec::new(),
    })
}

fn deserialize_tipo<'de, D>(d: D) -> Result<Option<TipoEvento>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => match TipoEvento::from_str(&s) {
            Ok(tipo) => Some(tipo),
            Err(_) => {
                warn!("Unknown event type '{s}' (omitting)");
                None
            }
        },
        _ => None,
    })
}

fn deserialize_date<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if !s.is_empty() => match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            Ok(fecha) => Some(fecha),
            Err(err) => {
                warn!("Failed to parse date '{s}'. Err: {err}");
                None
            }
        },
        _ => None,
    })
}

fn deserialize_cupo<'de, D>(d: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Number(cupo) => cupo.as_u64().map(|cupo| cupo as u32),
        Value::String(cupo) => cupo.parse().ok(),
        _ => None,
    })
}
