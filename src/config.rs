// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub address: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// JSON log file, truncated on startup
    pub log_file: Option<PathBuf>,
    /// Random avatars and vote counts for the demo front-end
    pub random_presentation: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 3000,
            database_path: PathBuf::from("db.json"),
            log_file: None,
            random_presentation: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: Option<AppConfig>,
    #[serde(default)]
    production: Option<AppConfig>,
}

impl AppConfig {
    /// Load configuration for the current environment.
    ///
    /// An explicit `path` must exist; otherwise `config.yaml` is used when present
    /// and built-in defaults when not. `PORT` and `DATABASE_PATH` override the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let mut config = match path {
            Some(path) => Self::load_from_file(path, &environment)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE), &environment)?
            }
            None => {
                info!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                Self::default()
            }
        };

        config.apply_env_overrides(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("DATABASE_PATH").ok().as_deref(),
        )?;
        config.resolve_paths()?;
        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("APP_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        Ok(section.unwrap_or_default())
    }

    fn apply_env_overrides(&mut self, port: Option<&str>, database_path: Option<&str>) -> Result<()> {
        if let Some(port) = port {
            self.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {}", port))?;
        }
        if let Some(database_path) = database_path {
            self.database_path = PathBuf::from(database_path);
        }
        Ok(())
    }

    fn resolve_paths(&mut self) -> Result<()> {
        self.database_path = resolve_path(&self.database_path)?;
        if let Some(log_file) = &self.log_file {
            self.log_file = Some(resolve_path(log_file)?);
        }
        Ok(())
    }
}

fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(current_dir.join(path))
    }
}
