use chrono::NaiveDate;
use serde::Serialize;

use super::time_slot::TimeSlot;

/// One day's attendance for a class and slot, as read from the database
/// service. Absent count is always zero: the roster size is not known here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub date: NaiveDate,
    pub department: String,
    pub course: String,
    pub branch: String,
    pub year: String,
    pub semester: String,
    pub time_slot: TimeSlot,
    pub present_count: u64,
    pub absent_count: u64,
}

/// Header per CSV / table output
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "department",
        "course",
        "branch",
        "year",
        "semester",
        "time_slot",
        "present_count",
        "absent_count",
    ]
}

pub(crate) fn record_to_row(r: &AttendanceRecord) -> Vec<String> {
    vec![
        r.id.clone(),
        r.date.to_string(),
        r.department.clone(),
        r.course.clone(),
        r.branch.clone(),
        r.year.clone(),
        r.semester.clone(),
        r.time_slot.to_string(),
        r.present_count.to_string(),
        r.absent_count.to_string(),
    ]
}
