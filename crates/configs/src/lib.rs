use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub company: CompanyConfig,
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

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
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

/// Page window defaults used by the listing endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page")]
    pub default_page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

fn default_page() -> i64 { 1 }
fn default_page_size() -> u64 { 10 }
fn default_max_page_size() -> u64 { 100 }

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { default_page: default_page(), page_size: default_page_size(), max_page_size: default_max_page_size() }
    }
}

/// Company record policy. `default_sector` is the symbolic sector name
/// substituted when a saved company carries none.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    #[serde(default = "default_sector")]
    pub default_sector: String,
}

fn default_sector() -> String { "DEFAULT_SECTOR".to_string() }

impl Default for CompanyConfig {
    fn default() -> Self {
        Self { default_sector: default_sector() }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // database.url may come from DATABASE_URL
        self.database.normalize_from_env();
        self.database.validate()?;
        self.pagination.validate()?;
        self.company.validate()?;
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
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
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

impl PaginationConfig {
    fn validate(&self) -> Result<()> {
        if self.default_page < 1 {
            return Err(anyhow!("pagination.default_page must be >= 1"));
        }
        if self.page_size == 0 || self.max_page_size == 0 {
            return Err(anyhow!("pagination sizes must be >= 1"));
        }
        if self.page_size > self.max_page_size {
            return Err(anyhow!("pagination.page_size must be <= max_page_size"));
        }
        Ok(())
    }
}

impl CompanyConfig {
    fn validate(&self) -> Result<()> {
        if self.default_sector.trim().is_empty() {
            return Err(anyhow!("company.default_sector must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = load_from_str("").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.pagination.default_page, 1);
        assert_eq!(cfg.pagination.page_size, 10);
        assert_eq!(cfg.pagination.max_page_size, 100);
        assert_eq!(cfg.company.default_sector, "DEFAULT_SECTOR");
        assert_eq!(cfg.database.min_connections, 2);
        assert_eq!(cfg.database.max_connections, 10);
    }

    #[test]
    fn parses_all_sections() {
        let cfg = load_from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "sqlite::memory:"
            min_connections = 1
            max_connections = 1

            [pagination]
            page_size = 25

            [company]
            default_sector = "TECHNOLOGY"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.database.connect_timeout_secs, 30);
        assert_eq!(cfg.pagination.page_size, 25);
        assert_eq!(cfg.company.default_sector, "TECHNOLOGY");
    }

    #[test]
    fn validate_accepts_sqlite_and_postgres_urls() {
        let mut cfg = load_from_str("[database]\nurl = \"sqlite::memory:\"\nmin_connections = 1\n").unwrap();
        assert!(cfg.normalize_and_validate().is_ok());

        cfg.database.url = "postgres://u:p@localhost/companies".into();
        assert!(cfg.database.validate().is_ok());

        cfg.database.url = "mysql://localhost/companies".into();
        assert!(cfg.database.validate().is_err());
    }

    #[test]
    fn validate_rejects_page_size_above_max() {
        let mut cfg = load_from_str(
            "[database]\nurl = \"sqlite::memory:\"\n[pagination]\npage_size = 500\nmax_page_size = 100\n",
        )
        .unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }
}
