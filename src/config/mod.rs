use crate::errors::{AppError, AppResult};
use crate::models::user::DEFAULT_ADMIN;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Which persistence backend to open at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    Local,
}

/// Settings of the narrative-generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeConfig {
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_backend")]
    pub backend: Backend,
    #[serde(default = "default_local_store")]
    pub local_store: String,
    /// Username of the active user.
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_first_year")]
    pub first_year: i32,
    #[serde(default = "default_last_year")]
    pub last_year: i32,
    #[serde(default)]
    pub narrative: NarrativeConfig,
}

fn default_backend() -> Backend {
    Backend::Sqlite
}
fn default_local_store() -> String {
    Config::config_dir()
        .join("rfortnight.json")
        .to_string_lossy()
        .to_string()
}
fn default_user() -> String {
    DEFAULT_ADMIN.to_string()
}
fn default_first_year() -> i32 {
    2025
}
fn default_last_year() -> i32 {
    2026
}
fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}
fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}
fn default_timeout_secs() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            backend: default_backend(),
            local_store: default_local_store(),
            user: default_user(),
            first_year: default_first_year(),
            last_year: default_last_year(),
            narrative: NarrativeConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rfortnight")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rfortnight")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rfortnight.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rfortnight.sqlite")
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn local_store_path(&self) -> PathBuf {
        expand_tilde(&self.local_store)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            let cfg: Config = serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
            cfg.validate()?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.first_year > self.last_year {
            return Err(AppError::Config(format!(
                "first_year ({}) is after last_year ({})",
                self.first_year, self.last_year
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to the standard config file.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }
}
