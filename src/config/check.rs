use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys a complete configuration file carries.
pub const EXPECTED_KEYS: [&str; 7] = [
    "recognition_url",
    "firestore_url",
    "firestore_project",
    "firestore_api_key",
    "request_timeout_secs",
    "profile_name",
    "profile_email",
];

/// Return the expected keys absent from the YAML file at `path`.
/// Absent keys are not fatal (serde defaults apply) but `config --check`
/// reports them so the user can fill them in.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let Some(map) = yaml.as_mapping() else {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    };

    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}
