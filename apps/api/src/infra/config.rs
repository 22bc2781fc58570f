use std::net::{Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

pub struct AppConfig {
    pub database_url: SecretString,
    pub database_max_connections: u32,
    /// Apply embedded migrations on startup. Disable when schema changes are rolled out separately.
    pub run_migrations: bool,
    pub bind_addr: SocketAddr,
    /// Origin of the landing page allowed to call the API from the browser.
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: SecretString =
            SecretString::new(get_env::<String>("DATABASE_URL").into());
        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);
        let run_migrations: bool = get_env_default("RUN_MIGRATIONS", true);

        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from((Ipv4Addr::LOCALHOST, 3001)),
        );
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        Self {
            database_url,
            database_max_connections,
            run_migrations,
            bind_addr,
            cors_origin,
        }
    }
}
