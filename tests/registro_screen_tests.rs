use agendaescolar::config::model::{Config, Session};
use agendaescolar::eventos::model::{Evento, TipoEvento, AUDIENCIA_ESTUDIANTES};
use agendaescolar::screens::modals::EditConfirmation;
use agendaescolar::screens::registro::{FormOutcome, RegistroEventosScreen};
use agendaescolar::usuarios::model::Rol;
use chrono::{Days, Local};
use mockito::{Matcher, Server};

fn config_for(server: &Server) -> Config {
    Config {
        api_url: server.url(),
    }
}

fn admin_session() -> Session {
    Session {
        token: Some("token-123".to_string()),
        rol: Rol::Administrador,
        user_name: "Laura Ortiz".to_string(),
        user_id: Some(1),
    }
}

fn valid_evento() -> Evento {
    Evento {
        id: None,
        nombre_evento: "Semana de la Computación".to_string(),
        tipo_evento: Some(TipoEvento::Conferencia),
        fecha: Some(Local::now().date_naive() + Days::new(30)),
        hora_inicio: "10:00 AM".to_string(),
        hora_final: "1:00 PM".to_string(),
        lugar: "Auditorio Central".to_string(),
        publico_objetivo: vec!["Profesores".to_string()],
        programa_educativo: String::new(),
        responsable: Some(17),
        descripcion: "Charlas y talleres.".to_string(),
        cupo_maximo: Some(120),
    }
}

#[test_log::test(tokio::test)]
async fn should_not_call_the_api_with_an_invalid_record() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/eventos-academicos/")
        .expect(0)
        .create_async()
        .await;

    let mut screen = RegistroEventosScreen::new(&config_for(&server), &admin_session());
    screen.evento = valid_evento();
    screen.evento.nombre_evento = String::new();

    let outcome = screen.register().await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcome, FormOutcome::Invalid);
    assert!(screen.errors.contains_key("nombre_evento"));
}

#[test_log::test(tokio::test)]
async fn should_register_with_times_converted_to_24_hour() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/eventos-academicos/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "hora_inicio": "10:00",
            "hora_final": "13:00"
        })))
        .with_body(r##"{"id": 7, "nombre_evento": "Semana de la Computación"}"##)
        .create_async()
        .await;

    let mut screen = RegistroEventosScreen::new(&config_for(&server), &admin_session());
    screen.evento = valid_evento();

    let outcome = screen.register().await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcome, FormOutcome::Saved);
    // The on-screen record keeps the 12-hour form the user typed.
    assert_eq!(screen.evento.hora_inicio, "10:00 AM");
}

#[test_log::test(tokio::test)]
async fn should_show_stored_times_in_12_hour_format_when_editing() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/eventos-academicos/")
        .match_query(Matcher::UrlEncoded("id".into(), "42".into()))
        .with_body(
            r##"{"id": 42, "nombre_evento": "Claustro", "hora_inicio": "09:00", "hora_final": "14:30"}"##,
        )
        .create_async()
        .await;

    let screen = RegistroEventosScreen::for_edit(&config_for(&server), &admin_session(), 42)
        .await
        .unwrap();

    assert!(screen.editar);
    assert_eq!(screen.evento.hora_inicio, "9:00 AM");
    assert_eq!(screen.evento.hora_final, "2:30 PM");
}

#[test_log::test(tokio::test)]
async fn should_not_update_without_confirmation() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/eventos-academicos/")
        .expect(0)
        .create_async()
        .await;

    let mut screen = RegistroEventosScreen::new(&config_for(&server), &admin_session());
    screen.evento = valid_evento();

    let outcome = screen
        .update(EditConfirmation { is_edit: false })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(outcome, FormOutcome::Cancelled);
}

#[test_log::test(tokio::test)]
async fn should_update_once_confirmed() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/eventos-academicos/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "id": 42,
            "hora_inicio": "10:00"
        })))
        .with_body(r##"{"id": 42, "nombre_evento": "Semana de la Computación"}"##)
        .create_async()
        .await;

    let mut screen = RegistroEventosScreen::new(&config_for(&server), &admin_session());
    screen.evento = valid_evento();
    screen.evento.id = Some(42);

    let outcome = screen
        .update(EditConfirmation { is_edit: true })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(outcome, FormOutcome::Saved);
}

#[test_log::test(tokio::test)]
async fn should_keep_maestros_when_the_admin_fetch_fails() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/lista-maestros/")
        .with_body(r##"[{"id": 3, "user": {"id": 17, "first_name": "María", "last_name": "Hernández"}}]"##)
        .create_async()
        .await;
    server
        .mock("GET", "/lista-admins/")
        .with_status(500)
        .create_async()
        .await;

    let mut screen = RegistroEventosScreen::new(&config_for(&server), &admin_session());
    screen.load_responsables().await.unwrap();

    assert_eq!(screen.responsables.len(), 1);
    assert_eq!(screen.responsables[0].name, "María Hernández");
}

#[test_log::test(tokio::test)]
async fn should_clear_the_programa_when_students_are_unticked() {
    let server = Server::new_async().await;

    let mut screen = RegistroEventosScreen::new(&config_for(&server), &admin_session());
    screen.set_audience(AUDIENCIA_ESTUDIANTES, true);
    screen.evento.programa_educativo = "Ingeniería en Ciencias de la Computación".to_string();

    assert!(screen.requires_programa_educativo());

    screen.set_audience(AUDIENCIA_ESTUDIANTES, false);

    assert!(!screen.requires_programa_educativo());
    assert!(screen.evento.publico_objetivo.is_empty());
    assert!(screen.evento.programa_educativo.is_empty());
}
