//! Shared blocking HTTP client construction and URL helpers.

use crate::errors::{AppError, AppResult};
use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;

/// Blocking client; `timeout_secs == 0` waits forever (reqwest otherwise
/// applies its own 30 s default).
pub fn client(timeout_secs: u64) -> AppResult<Client> {
    Ok(Client::builder()
        .user_agent(concat!("rattendance/", env!("CARGO_PKG_VERSION")))
        .timeout(request_timeout(timeout_secs))
        .build()?)
}

pub(crate) fn request_timeout(timeout_secs: u64) -> Option<Duration> {
    (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs))
}

/// Join `path` onto `base`, tolerating a trailing slash on the base.
pub fn endpoint(base: &str, path: &str) -> AppResult<Url> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| AppError::InvalidUrl(format!("{joined}: {e}")))
}
