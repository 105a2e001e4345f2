/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Path of the catalog store file (default: `db.json`).
    pub store_path: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Reject update payloads whose body id differs from the path id.
    /// Off by default: the lenient mode writes the body id as-is.
    pub strict_update_ids: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                         |
    /// |------------------------|-------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                       |
    /// | `PORT`                 | `8000`                                          |
    /// | `CORS_ORIGINS`         | `http://localhost:8080,http://127.0.0.1:8080`   |
    /// | `STORE_PATH`           | `db.json`                                       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                            |
    /// | `STRICT_UPDATE_IDS`    | `false`                                         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8080,http://127.0.0.1:8080".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let store_path = std::env::var("STORE_PATH").unwrap_or_else(|_| "db.json".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let strict_update_ids: bool = std::env::var("STRICT_UPDATE_IDS")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("STRICT_UPDATE_IDS must be true or false");

        Self {
            host,
            port,
            cors_origins,
            store_path,
            request_timeout_secs,
            strict_update_ids,
        }
    }
}
