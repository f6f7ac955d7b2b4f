use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Origins allowed to receive cross-origin response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Wildcard `*`: every origin is allowed.
    Any,
    /// Exact-match allow-list of origins such as `https://example.com`.
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse a comma-separated allow-list.
    ///
    /// Entries are trimmed and empty entries dropped. A `*` anywhere in the
    /// list, or a list with no usable entries, yields [`CorsOrigins::Any`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            return CorsOrigins::Any;
        }

        CorsOrigins::List(origins)
    }

    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, CorsOrigins::Any)
    }
}

impl std::fmt::Display for CorsOrigins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorsOrigins::Any => write!(f, "*"),
            CorsOrigins::List(origins) => write!(f, "{}", origins.join(",")),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_name: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub cors_origins: CorsOrigins,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("database_url", &"[redacted]")
            .field("database_name", &self.database_name)
            .field("cors_origins", &self.cors_origins)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
