/// Application configuration loaded from environment variables.
///
/// Everything except the Supabase connection parameters has a default
/// suitable for local development. Loaded once at startup and shared
/// immutably through [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application name reported in logs.
    pub app_name: String,
    /// Application version reported in logs.
    pub app_version: String,
    /// Verbose default log filter when `RUST_LOG` is unset.
    pub debug: bool,
    /// Supabase project URL (store endpoint).
    pub supabase_url: String,
    /// Supabase service key (store credential).
    pub supabase_key: String,
    /// Route prefix for versioned mounting (loaded, not yet mounted).
    #[allow(dead_code)]
    pub api_prefix: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `APP_NAME`             | `Supabase Items API`       |
    /// | `APP_VERSION`          | crate version              |
    /// | `DEBUG`                | `false`                    |
    /// | `SUPABASE_URL`         | (required)                 |
    /// | `SUPABASE_KEY`         | (required)                 |
    /// | `API_PREFIX`           | `/api/v1`                  |
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let app_name = std::env::var("APP_NAME").unwrap_or_else(|_| "Supabase Items API".into());

        let app_version =
            std::env::var("APP_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").into());

        let debug: bool = std::env::var("DEBUG")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("DEBUG must be true or false");

        let supabase_url = std::env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
        let supabase_key = std::env::var("SUPABASE_KEY").expect("SUPABASE_KEY must be set");

        let api_prefix = std::env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".into());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            app_name,
            app_version,
            debug,
            supabase_url,
            supabase_key,
            api_prefix,
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}
