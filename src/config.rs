/// Runtime configuration, read once at startup and handed to the store
/// and manager constructors. No module-level state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
}

impl AppConfig {
    /// Read configuration from the environment (a `.env` file is loaded
    /// by main before this runs).
    pub fn from_env() -> Self {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                log::warn!("No DATABASE_URL set — falling back to local default");
                "postgres://localhost/slidebox".to_string()
            }
        };
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        AppConfig {
            database_url,
            bind_addr,
        }
    }
}
