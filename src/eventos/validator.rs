use crate::eventos::model::{Evento, AUDIENCIA_ESTUDIANTES};
use crate::eventos::time::to_minutes;
use chrono::{Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

/// Field name to message. An empty map means the record is acceptable.
pub type ValidationErrors = BTreeMap<&'static str, &'static str>;

lazy_static! {
    static ref ALPHANUMERIC_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9\sáéíóúÁÉÍÓÚñÑ]+$").expect("Failed to create name regex");
    static ref DESCRIPTION_REGEX: Regex =
        Regex::new(r#"^[a-zA-Z0-9\sáéíóúÁÉÍÓÚñÑ.,;:¿?¡!()"-]+$"#)
            .expect("Failed to create description regex");
    static ref CAPACITY_REGEX: Regex =
        Regex::new(r"^[1-9]\d{0,2}$").expect("Failed to create capacity regex");
}

/// Checks every field independently and reports at most one message per
/// field. The record is not mutated.
pub fn validate(evento: &Evento, is_edit: bool) -> ValidationErrors {
    validate_at(evento, is_edit, Local::now().date_naive())
}

// `is_edit` is part of the call contract; edit mode applies the same rules.
pub fn validate_at(evento: &Evento, _is_edit: bool, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if evento.nombre_evento.is_empty() {
        errors.insert("nombre_evento", "El nombre del evento es requerido");
    } else if !ALPHANUMERIC_REGEX.is_match(&evento.nombre_evento) {
        errors.insert(
            "nombre_evento",
            "El nombre solo puede contener letras, números y espacios",
        );
    }

    if evento.tipo_evento.is_none() {
        errors.insert("tipo_evento", "El tipo de evento es requerido");
    }

    match evento.fecha {
        None => {
            errors.insert("fecha", "La fecha de realización es requerida");
        }
        Some(fecha) if fecha < today => {
            errors.insert(
                "fecha",
                "No se pueden seleccionar fechas anteriores al día actual",
            );
        }
        Some(_) => {}
    }

    // Only comparable once both times are present.
    if !evento.hora_inicio.is_empty()
        && !evento.hora_final.is_empty()
        && to_minutes(&evento.hora_final) <= to_minutes(&evento.hora_inicio)
    {
        errors.insert(
            "hora_final",
            "La hora final debe ser mayor que la hora de inicio",
        );
    }

    if evento.lugar.is_empty() {
        errors.insert("lugar", "El lugar es requerido");
    } else if !ALPHANUMERIC_REGEX.is_match(&evento.lugar) {
        errors.insert(
            "lugar",
            "El lugar solo puede contener caracteres alfanuméricos y espacios",
        );
    }

    if evento.publico_objetivo.is_empty() {
        errors.insert(
            "publico_objetivo",
            "Debe seleccionar al menos un público objetivo",
        );
    }

    if evento.audience_includes(AUDIENCIA_ESTUDIANTES) && evento.programa_educativo.is_empty() {
        errors.insert(
            "programa_educativo",
            "El programa educativo es requerido cuando el público objetivo incluye estudiantes",
        );
    }

    if evento.responsable.is_none() {
        errors.insert("responsable", "El responsable del evento es requerido");
    }

    if evento.descripcion.is_empty() {
        errors.insert("descripcion", "La descripción es requerida");
    } else {
        if evento.descripcion.chars().count() > 300 {
            errors.insert(
                "descripcion",
                "La descripción no puede exceder 300 caracteres",
            );
        }
        // The character-class message wins when both checks fail.
        if !DESCRIPTION_REGEX.is_match(&evento.descripcion) {
            errors.insert(
                "descripcion",
                "La descripción solo puede contener letras, números y signos de puntuación básicos",
            );
        }
    }

    match evento.cupo_maximo {
        None => {
            errors.insert("cupo_maximo", "El cupo máximo es requerido");
        }
        Some(cupo) if !CAPACITY_REGEX.is_match(&cupo.to_string()) => {
            errors.insert(
                "cupo_maximo",
                "El cupo máximo debe ser un número entero positivo de máximo 3 dígitos",
            );
        }
        Some(_) => {}
    }

    errors
}
