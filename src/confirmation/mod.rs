//! Success screen: a pure rendering of the handoff produced by a completed
//! capture.

use crate::models::attendance::{AttendanceOutcome, StudentAttendance};
use crate::models::time_slot::TimeSlot;
use crate::nav::Screen;
use crate::utils::table::{Column, Table};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// State carried from the capture flow to the success screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub class_name: String,
    pub time_slot: TimeSlot,
    pub timestamp: DateTime<Local>,
    pub attendance: Vec<StudentAttendance>,
    pub faces_detected: u32,
    pub collection_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Nothing to show; go to this screen instead.
    Redirect(Screen),
    Summary(Summary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub class_name: String,
    pub time_slot: TimeSlot,
    pub recorded_at: String,
    pub faces_detected: u32,
    pub present: Vec<StudentAttendance>,
    pub collection_name: String,
    pub outcome: AttendanceOutcome,
}

pub fn render(handoff: Option<&Confirmation>) -> View {
    let Some(c) = handoff else {
        return View::Redirect(Screen::Home);
    };

    let outcome = AttendanceOutcome::from_counts(c.attendance.len(), c.faces_detected);

    View::Summary(Summary {
        class_name: c.class_name.clone(),
        time_slot: c.time_slot,
        recorded_at: c.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        faces_detected: outcome.faces(),
        present: c.attendance.clone(),
        collection_name: c.collection_name.clone(),
        outcome,
    })
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Class          : {}", self.class_name)?;
        writeln!(f, "Time Slot      : {}", self.time_slot)?;
        writeln!(f, "Date & Time    : {}", self.recorded_at)?;
        writeln!(f, "Faces detected : {}", self.faces_detected)?;
        writeln!(f, "Present        : {}", self.present.len())?;
        writeln!(f, "Collection     : {}", self.collection_name)?;
        writeln!(f)?;
        writeln!(f, "{}", self.outcome.message())?;

        if !self.present.is_empty() {
            let mut table = Table::new(vec![
                Column::new("Student", 16),
                Column::new("Status", 9),
                Column::new("Distance", 8),
            ]);
            for s in &self.present {
                table.add_row(vec![
                    s.student_id.clone(),
                    s.status.clone(),
                    format!("{:.4}", s.distance),
                ]);
            }
            write!(f, "\n{}", table.render())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str) -> StudentAttendance {
        StudentAttendance {
            student_id: id.to_string(),
            status: "present".to_string(),
            distance: 0.3,
        }
    }

    fn handoff(attendance: Vec<StudentAttendance>, faces: u32) -> Confirmation {
        Confirmation {
            class_name: "Engineering / B.Tech / Civil / 1st Year / Semester 1".into(),
            time_slot: TimeSlot::Morning,
            timestamp: Local::now(),
            attendance,
            faces_detected: faces,
            collection_name: "c".into(),
        }
    }

    #[test]
    fn without_handoff_redirects_home() {
        assert_eq!(render(None), View::Redirect(Screen::Home));
    }

    #[test]
    fn shows_present_entries_and_faces_detected() {
        let c = handoff(vec![student("S1"), student("S2"), student("S3")], 5);
        let View::Summary(summary) = render(Some(&c)) else {
            panic!("expected summary");
        };
        assert_eq!(summary.present.len(), 3);
        assert_eq!(summary.faces_detected, 5);

        let text = summary.to_string();
        assert!(text.contains("Faces detected : 5"));
        assert!(text.contains("Present        : 3"));
        assert!(text.contains("S2"));
    }

    #[test]
    fn zero_faces_uses_the_no_faces_message() {
        let View::Summary(summary) = render(Some(&handoff(vec![], 0))) else {
            panic!("expected summary");
        };
        let text = summary.to_string();
        assert!(text.contains("No faces detected"));
        assert!(!text.contains("no registered students matched"));
    }
}
