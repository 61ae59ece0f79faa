use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check;

pub const ENV_RECOGNITION_URL: &str = "RECOGNITION_URL";
pub const ENV_FIREBASE_PROJECT: &str = "FIREBASE_PROJECT_ID";
pub const ENV_FIREBASE_API_KEY: &str = "FIREBASE_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the face-recognition service
    #[serde(default = "default_recognition_url")]
    pub recognition_url: String,
    /// Base URL of the Firestore REST API
    #[serde(default = "default_firestore_url")]
    pub firestore_url: String,
    #[serde(default)]
    pub firestore_project: Option<String>,
    #[serde(default)]
    pub firestore_api_key: Option<String>,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_profile_name")]
    pub profile_name: String,
    #[serde(default = "default_profile_email")]
    pub profile_email: String,
}

fn default_recognition_url() -> String {
    "http://localhost:5000".to_string()
}
fn default_firestore_url() -> String {
    "https://firestore.googleapis.com".to_string()
}
fn default_timeout() -> u64 {
    30
}
fn default_profile_name() -> String {
    "Demo User".to_string()
}
fn default_profile_email() -> String {
    "demo@example.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recognition_url: default_recognition_url(),
            firestore_url: default_firestore_url(),
            firestore_project: None,
            firestore_api_key: None,
            request_timeout_secs: default_timeout(),
            profile_name: default_profile_name(),
            profile_email: default_profile_email(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from `path` (or the standard file), falling back to
    /// defaults when the file does not exist, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            log::debug!("no configuration at {}, using defaults", path.display());
            Config::default()
        };

        cfg.apply_env();
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = env::var(ENV_RECOGNITION_URL)
            && !url.trim().is_empty()
        {
            self.recognition_url = url;
        }
        if let Ok(project) = env::var(ENV_FIREBASE_PROJECT)
            && !project.trim().is_empty()
        {
            self.firestore_project = Some(project);
        }
        if let Ok(key) = env::var(ENV_FIREBASE_API_KEY)
            && !key.trim().is_empty()
        {
            self.firestore_api_key = Some(key);
        }
    }

    /// Project id, required by every database query.
    pub fn require_project(&self) -> AppResult<&str> {
        self.firestore_project
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "firestore_project is not set (config file or {})",
                    ENV_FIREBASE_PROJECT
                ))
            })
    }

    /// Write a default configuration file at `path` (or the standard file).
    /// An existing file is left untouched unless `overwrite` is set.
    pub fn init_file(path: Option<&Path>, overwrite: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() && !overwrite {
            return Ok(path);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_takes_defaults() {
        let cfg: Config = serde_yaml::from_str("firestore_project: demo\n").unwrap();
        assert_eq!(cfg.firestore_project.as_deref(), Some("demo"));
        assert_eq!(cfg.recognition_url, "http://localhost:5000");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.profile_name, "Demo User");
    }

    #[test]
    fn missing_project_is_a_config_error() {
        let cfg = Config::default();
        assert!(matches!(cfg.require_project(), Err(AppError::Config(_))));
    }

    #[test]
    fn init_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("rattendance.conf");
        Config::init_file(Some(&path), false).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("recognition_url"));
        assert!(content.contains("firestore_url"));
    }
}
