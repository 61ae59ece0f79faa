use serde::{Deserialize, Serialize};

/// One matched student as reported by the recognition service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendance {
    pub student_id: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub distance: f64,
}

fn default_status() -> String {
    "present".to_string()
}

/// Successful body of `POST /process-attendance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResult {
    #[serde(default)]
    pub attendance: Vec<StudentAttendance>,
    #[serde(default)]
    pub faces_detected: u32,
    #[serde(default)]
    pub collection_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body of a rejected recognition request.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    pub error: String,
}

/// How a completed recognition call should be worded to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceOutcome {
    NoFacesDetected,
    NoMatch { faces: u32 },
    Marked { present: usize, faces: u32 },
}

impl AttendanceOutcome {
    pub fn of(result: &AttendanceResult) -> Self {
        Self::from_counts(result.attendance.len(), result.faces_detected)
    }

    /// Every matched student is a detected face, so `faces` is at least
    /// `present` even when the service omits `facesDetected`.
    pub fn from_counts(present: usize, faces: u32) -> Self {
        let faces = faces.max(u32::try_from(present).unwrap_or(u32::MAX));
        if faces == 0 {
            AttendanceOutcome::NoFacesDetected
        } else if present == 0 {
            AttendanceOutcome::NoMatch { faces }
        } else {
            AttendanceOutcome::Marked { present, faces }
        }
    }

    pub fn faces(&self) -> u32 {
        match self {
            AttendanceOutcome::NoFacesDetected => 0,
            AttendanceOutcome::NoMatch { faces } | AttendanceOutcome::Marked { faces, .. } => *faces,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AttendanceOutcome::NoFacesDetected => "No faces detected in the photo".to_string(),
            AttendanceOutcome::NoMatch { .. } => {
                "Faces detected but no registered students matched".to_string()
            }
            AttendanceOutcome::Marked { present, .. } => {
                format!("{} student(s) marked present", present)
            }
        }
    }
}
