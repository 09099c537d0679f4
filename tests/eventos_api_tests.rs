use agendaescolar::config::model::{Config, Session};
use agendaescolar::error::ApiError;
use agendaescolar::eventos::api::EventosAPI;
use agendaescolar::eventos::model::{Evento, TipoEvento};
use agendaescolar::usuarios::model::Rol;
use chrono::NaiveDate;
use mockito::{Matcher, Server};

fn config_for(server: &Server) -> Config {
    Config {
        api_url: server.url(),
    }
}

fn session_with(token: Option<&str>) -> Session {
    Session {
        token: token.map(|token| token.to_string()),
        rol: Rol::Administrador,
        user_name: "Laura Ortiz".to_string(),
        user_id: Some(1),
    }
}

fn conferencia() -> Evento {
    Evento {
        id: None,
        nombre_evento: "Semana de la Computación".to_string(),
        tipo_evento: Some(TipoEvento::Conferencia),
        fecha: NaiveDate::from_ymd_opt(2026, 9, 1),
        hora_inicio: "10:00".to_string(),
        hora_final: "13:00".to_string(),
        lugar: "Auditorio Central".to_string(),
        publico_objetivo: vec!["Profesores".to_string()],
        programa_educativo: String::new(),
        responsable: Some(17),
        descripcion: "Charlas y talleres.".to_string(),
        cupo_maximo: Some(120),
    }
}

#[test_log::test(tokio::test)]
async fn should_list_events_with_the_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lista-eventos/")
        .match_header("authorization", "Bearer token-123")
        .with_header("content-type", "application/json")
        .with_body(
            r##"
              [
                {"id": 1, "nombre_evento": "Claustro", "tipo_evento": "Seminario"},
                {"id": 2, "nombre_evento": "Rally de programación", "tipo_evento": "Concurso"}
              ]"##,
        )
        .create_async()
        .await;

    let api = EventosAPI::new(&config_for(&server), &session_with(Some("token-123")));
    let eventos = api.list_events().await.unwrap();

    mock.assert_async().await;
    assert_eq!(eventos.len(), 2);
    assert_eq!(eventos[0].nombre_evento, "Claustro");
    assert_eq!(eventos[1].tipo_evento, Some(TipoEvento::Concurso));
}

#[test_log::test(tokio::test)]
async fn should_omit_the_auth_header_without_a_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lista-eventos/")
        .match_header("authorization", Matcher::Missing)
        .with_body("[]")
        .create_async()
        .await;

    let api = EventosAPI::new(&config_for(&server), &session_with(None));
    let eventos = api.list_events().await.unwrap();

    mock.assert_async().await;
    assert!(eventos.is_empty());
}

#[test_log::test(tokio::test)]
async fn should_get_an_event_by_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/eventos-academicos/")
        .match_query(Matcher::UrlEncoded("id".into(), "42".into()))
        .with_body(
            r##"{"id": 42, "nombre_evento": "Claustro", "hora_inicio": "09:00", "hora_final": "11:00"}"##,
        )
        .create_async()
        .await;

    let api = EventosAPI::new(&config_for(&server), &session_with(Some("token-123")));
    let evento = api.event_by_id(42).await.unwrap();

    mock.assert_async().await;
    assert_eq!(evento.id, Some(42));
    assert_eq!(evento.hora_inicio, "09:00");
}

#[test_log::test(tokio::test)]
async fn should_post_the_record_when_registering() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/eventos-academicos/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "nombre_evento": "Semana de la Computación",
            "tipo_evento": "Conferencia",
            "fecha": "2026-09-01",
            "cupo_maximo": 120
        })))
        .with_body(r##"{"id": 7, "nombre_evento": "Semana de la Computación"}"##)
        .create_async()
        .await;

    let api = EventosAPI::new(&config_for(&server), &session_with(Some("token-123")));
    let saved = api.create_event(&conferencia()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(saved.id, Some(7));
}

#[test_log::test(tokio::test)]
async fn should_put_the_full_record_when_updating() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/eventos-academicos/")
        .match_body(Matcher::PartialJson(serde_json::json!({"id": 42})))
        .with_body(r##"{"id": 42, "nombre_evento": "Semana de la Computación"}"##)
        .create_async()
        .await;

    let mut evento = conferencia();
    evento.id = Some(42);

    let api = EventosAPI::new(&config_for(&server), &session_with(Some("token-123")));
    let saved = api.update_event(&evento).await.unwrap();

    mock.assert_async().await;
    assert_eq!(saved.id, Some(42));
}

#[test_log::test(tokio::test)]
async fn should_delete_an_event_by_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/eventos-academicos/")
        .match_query(Matcher::UrlEncoded("id".into(), "42".into()))
        .with_status(204)
        .create_async()
        .await;

    let api = EventosAPI::new(&config_for(&server), &session_with(Some("token-123")));
    api.delete_event(42).await.unwrap();

    mock.assert_async().await;
}

#[test_log::test(tokio::test)]
async fn should_report_server_failures() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/lista-eventos/")
        .with_status(500)
        .create_async()
        .await;

    let api = EventosAPI::new(&config_for(&server), &session_with(Some("token-123")));
    let result = api.list_events().await;

    assert!(matches!(result, Err(ApiError::Request(_))), "{result:?}");
}

#[test_log::test(tokio::test)]
async fn should_report_an_unparseable_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/lista-eventos/")
        .with_body("<html>mantenimiento</html>")
        .create_async()
        .await;

    let api = EventosAPI::new(&config_for(&server), &session_with(Some("token-123")));
    let result = api.list_events().await;

    assert!(matches!(result, Err(ApiError::InvalidResponse)), "{result:?}");
}
