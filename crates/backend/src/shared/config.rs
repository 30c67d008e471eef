use anyhow::Context;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid server address {}:{}", self.host, self.port))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    /// Directory with the built frontend (index.html + wasm bundle)
    pub dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[static_files]
dir = "dist"
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    toml::from_str(contents).context("failed to parse config.toml")
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("failed to read {}", config_path.display()))?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Get the static files directory from configuration.
/// Relative paths resolve against the executable directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    resolve_dir(&config.static_files.dir, exe_dir.as_deref())
}

fn resolve_dir(dir: &str, base: Option<&Path>) -> PathBuf {
    let path = Path::new(dir);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match base {
        Some(base) => base.join(path),
        // Fallback: relative to current directory
        None => PathBuf::from(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dir, "dist");
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8000\n").is_err());
    }

    #[test]
    fn test_bad_host_is_error() {
        let server = ServerConfig {
            host: "not a host".into(),
            port: 80,
        };
        assert!(server.socket_addr().is_err());
    }

    #[test]
    fn test_resolve_dir() {
        let base = Path::new("/opt/meal-planner");
        assert_eq!(resolve_dir("dist", Some(base)), base.join("dist"));
        assert_eq!(resolve_dir("/srv/www", Some(base)), PathBuf::from("/srv/www"));
        assert_eq!(resolve_dir("dist", None), PathBuf::from("dist"));
    }
}
