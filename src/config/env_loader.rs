use crate::config::model::{Config, Session};
use crate::usuarios::model::Rol;
use std::env;
use std::str::FromStr;

pub fn load_config() -> Config {
    Config {
        api_url: load_required_config("API_URL"),
    }
}

pub fn load_session() -> Session {
    let rol = Rol::from_str(env::var("USER_ROL").unwrap_or_default().as_str()).unwrap();

    Session {
        token: env::var("SESSION_TOKEN").ok(),
        rol,
        user_name: env::var("USER_NAME").unwrap_or_default(),
        user_id: load_i64_config("USER_ID"),
    }
}

fn load_required_config(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{} must be set.", name))
}

fn load_i64_config(name: &str) -> Option<i64> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected an integer number.", name)
        })),
        Err(_) => None,
    }
}
