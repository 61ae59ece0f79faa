//! Spreadsheet export trigger. The file itself is produced by the
//! recognition service; this side only builds the request and hands the URL
//! to the platform opener.

use crate::errors::{AppError, AppResult};
use crate::hierarchy::{ClassIdentity, ClassSelection};
use crate::models::record::AttendanceRecord;
use crate::models::time_slot::TimeSlot;
use crate::recognition::EXPORT_PATH;
use crate::utils::http;
use reqwest::Url;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub identity: ClassIdentity,
    pub time_slot: TimeSlot,
}

impl ExportRequest {
    /// Disabled unless every identifying field is populated.
    pub fn from_selection(selection: &ClassSelection) -> AppResult<Self> {
        let identity = selection.require_identity()?;
        let time_slot = selection.require_time_slot()?;
        Ok(Self {
            identity,
            time_slot,
        })
    }

    /// Export action of one listed record; a record always carries a
    /// complete identity.
    pub fn from_record(record: &AttendanceRecord) -> Self {
        Self {
            identity: ClassIdentity {
                department: record.department.clone(),
                course: record.course.clone(),
                branch: record.branch.clone(),
                year: record.year.clone(),
                semester: record.semester.clone(),
            },
            time_slot: record.time_slot,
        }
    }

    pub fn url(&self, recognition_url: &str) -> AppResult<Url> {
        let mut url = http::endpoint(recognition_url, EXPORT_PATH)?;
        url.query_pairs_mut()
            .append_pair("department", &self.identity.department)
            .append_pair("course", &self.identity.course)
            .append_pair("branch", &self.identity.branch)
            .append_pair("year", &self.identity.year)
            .append_pair("semester", &self.identity.semester)
            .append_pair("className", &self.identity.key())
            .append_pair("timeSlot", self.time_slot.label());
        Ok(url)
    }
}

/// Program and arguments that open `url` on `os` (a `std::env::consts::OS`
/// value). Windows goes through `rundll32` so the URL never passes through
/// cmd.exe, which would split it at every `&`.
pub fn opener_command(os: &str, url: &str) -> (&'static str, Vec<String>) {
    match os {
        "windows" => (
            "rundll32",
            vec!["url.dll,FileProtocolHandler".to_string(), url.to_string()],
        ),
        "macos" => ("open", vec![url.to_string()]),
        _ => ("xdg-open", vec![url.to_string()]),
    }
}

/// Hand the URL to the platform opener.
pub fn open_in_browser(url: &Url) -> AppResult<()> {
    let (program, args) = opener_command(std::env::consts::OS, url.as_str());
    log::debug!("launching {program} {args:?}");

    let status = Command::new(program)
        .args(&args)
        .status()
        .map_err(|e| AppError::Launch(format!("{program}: {e}")))?;

    if !status.success() {
        return Err(AppError::Launch(format!("{program} exited with {status}")));
    }
    Ok(())
}
