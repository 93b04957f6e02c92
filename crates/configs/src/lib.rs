use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/items.db?mode=rwc";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unknown log format '{other}', expected compact or json")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
}

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    AppConfig::from_toml_str(&content)
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(content)?;
        Ok(cfg)
    }

    /// Load `config.toml` (or `CONFIG_PATH`) when present, otherwise build
    /// the configuration from environment variables and defaults.
    pub fn load_and_validate() -> Result<Self> {
        let path = config_path();
        let mut cfg = if Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            Self::from_env()?
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            cfg.server.port = port
                .parse::<u16>()
                .map_err(|e| anyhow!("SERVER_PORT '{port}' is not a valid port: {e}"))?;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            cfg.log.format = format.parse()?;
        }
        cfg.database.url = String::new();
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // 若未提供 URL，则依次尝试 DATABASE_URL 与默认的 SQLite 文件
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            self.url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        if !self.url.to_lowercase().starts_with("sqlite:") {
            return Err(anyhow!("database.url must start with sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_toml() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2

            [database]
            url = "sqlite://tmp/test.db?mode=rwc"
            max_connections = 4

            [log]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.database.max_connections, 4);
        assert_eq!(cfg.database.min_connections, 1);
        assert_eq!(cfg.database.acquire_timeout_secs, 30);
        assert_eq!(cfg.log.format, LogFormat::Json);
    }

    #[test]
    fn example_config_is_valid() {
        let mut cfg = AppConfig::from_toml_str(include_str!("../../../config.example.toml")).unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.database.url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.log.format, LogFormat::Compact);
    }

    #[test]
    fn zero_worker_threads_normalized() {
        let mut s = ServerConfig { host: " ".into(), port: 80, worker_threads: Some(0) };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));
    }

    #[test]
    fn zero_port_rejected() {
        let mut s = ServerConfig { port: 0, ..ServerConfig::default() };
        assert!(s.normalize().is_err());
    }

    #[test]
    fn non_sqlite_url_rejected() {
        let db = DatabaseConfig { url: "postgres://localhost/items".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn pool_bounds_validated() {
        let db = DatabaseConfig { min_connections: 0, ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
        let db = DatabaseConfig { min_connections: 5, max_connections: 2, ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
        assert!(DatabaseConfig::default().validate().is_ok());
    }

    #[test]
    fn log_format_from_str() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
