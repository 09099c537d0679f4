use crate::eventos::model::{
    Evento, AUDIENCIA_ESTUDIANTES, AUDIENCIA_PROFESORES, AUDIENCIA_PUBLICO_GENERAL,
};
use crate::usuarios::model::Rol;
use itertools::Itertools;

/// Narrows the full event list to what the given role may see.
/// Administrators see everything, in the original order.
///
/// Visibility matches on the space-joined tag string, not on exact set
/// membership.
pub fn visible_to(rol: &Rol, eventos: Vec<Evento>) -> Vec<Evento> {
    if *rol == Rol::Administrador {
        return eventos;
    }

    eventos
        .into_iter()
        .filter(|evento| {
            let publico = evento.publico_objetivo.iter().join(" ");

            match rol {
                Rol::Maestro => {
                    publico.contains(AUDIENCIA_PROFESORES)
                        || (publico.contains(AUDIENCIA_PUBLICO_GENERAL)
                            && publico.contains(AUDIENCIA_PROFESORES))
                }
                Rol::Alumno => {
                    publico.contains(AUDIENCIA_ESTUDIANTES)
                        || (publico.contains(AUDIENCIA_PUBLICO_GENERAL)
                            && publico.contains(AUDIENCIA_ESTUDIANTES))
                }
                _ => false,
            }
        })
        .collect()
}
