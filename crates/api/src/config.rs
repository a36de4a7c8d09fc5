/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development, except
/// the store connection target: without `DATABASE_URL` and `DATABASE_NAME`
/// the server still starts, but every store operation reports the store as
/// unavailable.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Document store connection string, if configured.
    pub database_url: Option<String>,
    /// Document store database name, if configured.
    pub database_name: Option<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `PORT`                 | `8000`      |
    /// | `DATABASE_URL`         | unset       |
    /// | `DATABASE_NAME`        | unset       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty());
        let database_name = std::env::var("DATABASE_NAME").ok().filter(|s| !s.is_empty());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            database_name,
            request_timeout_secs,
        }
    }
}
