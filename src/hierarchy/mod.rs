//! Class hierarchy: static data, canonical class identity and the cascading
//! selector driving the capture, records and export flows.

pub mod data;
pub mod selector;

pub use data::DEPARTMENTS;
pub use selector::{ClassSelection, ClassSelector, Level};

use crate::models::time_slot::TimeSlot;
use serde::Serialize;

/// A node of the static tree. Semesters are the leaves.
#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    pub name: &'static str,
    pub children: &'static [Node],
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, name: &str) -> Option<&'static Node> {
        find(self.children, name)
    }
}

/// Lookup by exact name first, then by normalized form, so `computer-science`
/// on the command line finds `Computer Science`.
pub fn find(nodes: &'static [Node], name: &str) -> Option<&'static Node> {
    nodes.iter().find(|n| n.name == name).or_else(|| {
        let wanted = normalize_segment(name);
        nodes.iter().find(|n| normalize_segment(n.name) == wanted)
    })
}

/// Lowercase, every run of non-alphanumeric characters collapsed to `-`.
pub fn normalize_segment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_dash = false;
    for c in s.trim().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Complete department/course/branch/year/semester path naming a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassIdentity {
    pub department: String,
    pub course: String,
    pub branch: String,
    pub year: String,
    pub semester: String,
}

impl ClassIdentity {
    pub fn segments(&self) -> [&str; 5] {
        [
            &self.department,
            &self.course,
            &self.branch,
            &self.year,
            &self.semester,
        ]
    }

    /// Canonical identifier: normalized segments joined with `_`.
    pub fn key(&self) -> String {
        self.segments()
            .iter()
            .map(|s| normalize_segment(s))
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Key of the per-day attendance collection for one slot.
    pub fn collection_id(&self, slot: TimeSlot) -> String {
        format!("{}_{}_attendance", self.key(), slot.key())
    }

    pub fn display_name(&self) -> String {
        self.segments().join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cse() -> ClassIdentity {
        ClassIdentity {
            department: "Engineering".into(),
            course: "B.Tech".into(),
            branch: "Computer Science".into(),
            year: "1st Year".into(),
            semester: "Semester 1".into(),
        }
    }

    #[test]
    fn normalizes_segments() {
        assert_eq!(normalize_segment("Computer Science"), "computer-science");
        assert_eq!(normalize_segment("  B.Tech "), "b-tech");
        assert_eq!(normalize_segment("Human  Resources!"), "human-resources");
    }

    #[test]
    fn collection_id_concatenates_identity_and_slot() {
        assert_eq!(
            cse().collection_id(TimeSlot::Morning),
            "engineering_b-tech_computer-science_1st-year_semester-1_morning_attendance"
        );
    }

    #[test]
    fn find_accepts_normalized_names() {
        let dept = find(DEPARTMENTS, "computer-applications").unwrap();
        assert_eq!(dept.name, "Computer Applications");
        assert!(find(DEPARTMENTS, "Law").is_none());
    }
}
