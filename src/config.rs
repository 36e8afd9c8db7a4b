use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub audit: AuditConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Allowed CORS origins. Defaults to localhost dev ports.
    /// Set ALLOWGATE__API__CORS_ALLOWED_ORIGINS in production.
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Actor recorded on ledger rows when the request carries no actor_id.
    /// A real identity provider can replace this without touching the ledger.
    #[serde(default = "default_actor")]
    pub default_actor: String,
}

fn default_api_port() -> u16 { 8080 }
fn default_bind() -> String { "0.0.0.0".to_string() }
fn default_db_path() -> String { "./audit_log.db".to_string() }
fn default_actor() -> String { "admin_default".to_string() }
fn default_cors_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:8080".to_string(),
    ]
}

pub fn validate(cfg: &Config) -> Result<()> {
    if cfg.database.path.trim().is_empty() {
        anyhow::bail!("database.path must not be empty");
    }
    if cfg.audit.default_actor.trim().is_empty() {
        anyhow::bail!("audit.default_actor must not be empty");
    }
    Ok(())
}

pub fn load() -> Result<Config> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("ALLOWGATE").separator("__"))
        .set_default("api.bind", "0.0.0.0")?
        .set_default("api.port", 8080)?
        .set_default("database.path", "./audit_log.db")?
        .set_default("audit.default_actor", "admin_default")?
        .build()?
        .try_deserialize()?;

    validate(&cfg)?;

    Ok(cfg)
}
