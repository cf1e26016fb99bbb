use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог со сборкой frontend (trunk build → dist)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Seed for the per-request PRNG, same payload gives the same table
    pub seed: u64,
    /// Upper clamp for the requested row count
    pub max_rows: u32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[generator]
seed = 42
max_rows = 1000
"#;

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                static_dir: "dist".to_string(),
            },
            generator: GeneratorConfig {
                seed: 42,
                max_rows: 1000,
            },
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for `cargo run`)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    for config_path in candidate_paths() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("config.toml"));
    }
    paths
}

/// Store the loaded configuration for the lifetime of the process.
/// Fails if a configuration was already installed.
pub fn init_config(loaded: Config) -> anyhow::Result<&'static Config> {
    CONFIG
        .set(loaded)
        .map_err(|_| anyhow::anyhow!("configuration already initialized"))?;
    Ok(config())
}

/// Active configuration; the built-in defaults when `init_config` was never called
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
