use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Сколько портов подряд пробовать, если порт занят
    pub port_attempts: u16,
    /// Каталог со статикой клиента (fallback для всех прочих путей).
    /// Относительный путь считается от рабочего каталога; по умолчанию это
    /// выход trunk при запуске из корня workspace.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub size: usize,
    pub deal_ratio: f64,
    /// Фиксированное зерно генератора; без него каталог случайный
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
port_attempts = 5
static_dir = "crates/frontend/dist"

[data]
dir = "data"

[catalog]
size = 500
deal_ratio = 0.12
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `PORT` from the environment overrides `server.port` in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_or_default()?;
    if let Some(port) = port_from_env(std::env::var("PORT").ok().as_deref()) {
        tracing::info!("PORT override from environment: {}", port);
        config.server.port = port;
    }
    Ok(config)
}

fn load_file_or_default() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn port_from_env(raw: Option<&str>) -> Option<u16> {
    let raw = raw?;
    match raw.trim().parse::<u16>() {
        Ok(port) => Some(port),
        Err(e) => {
            tracing::warn!("Ignoring invalid PORT value {:?}: {}", raw, e);
            None
        }
    }
}

/// Get the data directory from configuration.
/// Relative paths are resolved against the current working directory.
pub fn get_data_dir(config: &Config) -> anyhow::Result<PathBuf> {
    let dir = Path::new(&config.data.dir);
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.port_attempts, 5);
        assert_eq!(config.server.static_dir, "crates/frontend/dist");
        assert_eq!(config.data.dir, "data");
        assert_eq!(config.catalog.size, 500);
        assert_eq!(config.catalog.seed, None);
    }

    #[test]
    fn test_port_from_env() {
        assert_eq!(port_from_env(Some("8080")), Some(8080));
        assert_eq!(port_from_env(Some("not-a-port")), None);
        assert_eq!(port_from_env(None), None);
    }
}
