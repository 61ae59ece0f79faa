//! Client side of the face-recognition service.
//!
//! Detection, matching and attendance persistence all happen on the
//! service; this module only ships the photo and decodes the verdict.

use crate::capture::photo::AttendancePhoto;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceResult, ServiceError};
use crate::models::time_slot::TimeSlot;
use crate::utils::http;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};

pub const PROCESS_PATH: &str = "process-attendance";
pub const EXPORT_PATH: &str = "export-attendance";

/// Shown when the service gives no usable error message.
pub const GENERIC_FAILURE: &str = "Failed to record attendance";

/// Everything one submission sends.
#[derive(Debug, Clone)]
pub struct AttendanceRequest<'a> {
    pub photo: &'a AttendancePhoto,
    pub class_name: String,
    pub time_slot: TimeSlot,
}

pub trait RecognitionService {
    fn process_attendance(&self, request: &AttendanceRequest<'_>) -> AppResult<AttendanceResult>;
}

pub struct HttpRecognitionClient {
    base_url: String,
    client: Client,
}

impl HttpRecognitionClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        Ok(Self {
            base_url: base_url.to_string(),
            client: http::client(timeout_secs)?,
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(&cfg.recognition_url, cfg.request_timeout_secs)
    }

    fn form(request: &AttendanceRequest<'_>) -> AppResult<Form> {
        let image = Part::bytes(request.photo.bytes.clone())
            .file_name(request.photo.file_name.clone())
            .mime_str(request.photo.mime)?;

        Ok(Form::new()
            .part("image", image)
            .text("className", request.class_name.clone())
            .text("timeSlot", request.time_slot.label()))
    }
}

impl RecognitionService for HttpRecognitionClient {
    fn process_attendance(&self, request: &AttendanceRequest<'_>) -> AppResult<AttendanceResult> {
        let url = http::endpoint(&self.base_url, PROCESS_PATH)?;
        log::debug!(
            "POST {} class={} slot={} image={}B",
            url,
            request.class_name,
            request.time_slot,
            request.photo.bytes.len()
        );

        let resp = self
            .client
            .post(url)
            .multipart(Self::form(request)?)
            .send()?;

        decode_response(resp)
    }
}

fn decode_response(resp: Response) -> AppResult<AttendanceResult> {
    let status = resp.status();
    let body = resp.text()?;

    if status.is_success() {
        return serde_json::from_str::<AttendanceResult>(&body).map_err(|e| {
            log::warn!("unparseable recognition response: {e}");
            AppError::Server {
                status: status.as_u16(),
                message: GENERIC_FAILURE.to_string(),
            }
        });
    }

    Err(AppError::Server {
        status: status.as_u16(),
        message: server_message(&body),
    })
}

/// The service's `{error}` text verbatim, or the generic fallback.
pub fn server_message(body: &str) -> String {
    match serde_json::from_str::<ServiceError>(body) {
        Ok(e) if !e.error.trim().is_empty() => e.error,
        _ => GENERIC_FAILURE.to_string(),
    }
}
