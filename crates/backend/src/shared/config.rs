use anyhow::Context;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Env variable that overrides `[server] port`
pub const PORT_ENV: &str = "SNAPMOMENTS_PORT";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// Directory with the built frontend (index.html, wasm, css)
    pub dist_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[site]
dist_dir = "dist"
"#;

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .with_context(|| {
                format!(
                    "invalid listen address {}:{}",
                    self.server.host, self.server.port
                )
            })
    }

    /// Apply `SNAPMOMENTS_PORT` if set
    pub fn with_port_override(mut self, value: Option<&str>) -> anyhow::Result<Self> {
        if let Some(raw) = value {
            self.server.port = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a port number, got '{}'", PORT_ENV, raw))?;
        }
        Ok(self)
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
///
/// The port may then be overridden by `SNAPMOMENTS_PORT`.
pub fn load_config() -> anyhow::Result<Config> {
    let from_file = match exe_dir().map(|dir| dir.join("config.toml")) {
        Some(path) if path.exists() => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            Some(toml::from_str::<Config>(&contents)?)
        }
        Some(path) => {
            tracing::warn!("config.toml not found at: {}", path.display());
            None
        }
        None => None,
    };

    let config = match from_file {
        Some(config) => config,
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str(DEFAULT_CONFIG)?
        }
    };

    config.with_port_override(std::env::var(PORT_ENV).ok().as_deref())
}

/// Directory the static files are served from
///
/// Absolute paths are used as is. Relative ones resolve against the executable
/// directory, or the working directory when nothing is there (`trunk build`
/// puts `dist/` at the workspace root).
pub fn resolve_dist_dir(config: &Config) -> PathBuf {
    resolve_dist_dir_in(&config.site.dist_dir, exe_dir().as_deref())
}

fn resolve_dist_dir_in(dist_dir: &str, exe_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(dist_dir);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    match exe_dir.map(|dir| dir.join(path)) {
        Some(candidate) if candidate.is_dir() => candidate,
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> Config {
        toml::from_str(DEFAULT_CONFIG).unwrap()
    }

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.dist_dir, "dist");
    }

    #[test]
    fn test_socket_addr() {
        let addr = default_config().socket_addr().unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
    }

    #[test]
    fn test_port_override() {
        let config = default_config().with_port_override(Some("8081")).unwrap();
        assert_eq!(config.server.port, 8081);

        let untouched = default_config().with_port_override(None).unwrap();
        assert_eq!(untouched.server.port, 3000);

        assert!(default_config().with_port_override(Some("http")).is_err());
    }

    #[test]
    fn test_resolve_dist_dir() {
        let exe_dir = std::env::temp_dir().join("snapmoments-config-test");
        std::fs::create_dir_all(exe_dir.join("dist")).unwrap();

        assert_eq!(resolve_dist_dir_in("dist", Some(&exe_dir)), exe_dir.join("dist"));
        // Nothing next to the executable: stay relative to the working directory
        assert_eq!(resolve_dist_dir_in("public", Some(&exe_dir)), PathBuf::from("public"));
        assert_eq!(resolve_dist_dir_in("dist", None), PathBuf::from("dist"));

        let absolute = std::env::temp_dir().join("site");
        assert_eq!(
            resolve_dist_dir_in(absolute.to_str().unwrap(), Some(&exe_dir)),
            absolute
        );
    }
}
