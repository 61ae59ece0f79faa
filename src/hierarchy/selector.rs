use super::{ClassIdentity, DEPARTMENTS, Node, find};
use crate::errors::{AppError, AppResult, Field, ValidationError};
use crate::models::time_slot::TimeSlot;

/// Levels of the hierarchy, root first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Department,
    Course,
    Branch,
    Year,
    Semester,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Department,
        Level::Course,
        Level::Branch,
        Level::Year,
        Level::Semester,
    ];

    pub fn depth(&self) -> usize {
        *self as usize
    }

    pub fn field(&self) -> Field {
        match self {
            Level::Department => Field::Department,
            Level::Course => Field::Course,
            Level::Branch => Field::Branch,
            Level::Year => Field::Year,
            Level::Semester => Field::Semester,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Department => "Department",
            Level::Course => "Course",
            Level::Branch => "Branch",
            Level::Year => "Year",
            Level::Semester => "Semester",
        }
    }
}

/// Cascading selection over the static tree.
///
/// The selected path is always a prefix of a root-to-leaf walk: choosing a
/// level truncates everything below it, so descendant options can never be
/// inconsistent with the chosen ancestors.
#[derive(Debug, Clone)]
pub struct ClassSelector {
    tree: &'static [Node],
    path: Vec<&'static Node>,
}

impl Default for ClassSelector {
    fn default() -> Self {
        Self::new(DEPARTMENTS)
    }
}

impl ClassSelector {
    pub fn new(tree: &'static [Node]) -> Self {
        Self {
            tree,
            path: Vec::with_capacity(Level::ALL.len()),
        }
    }

    /// Valid choices at `level` given the current ancestors. Empty when the
    /// parent level has not been chosen yet.
    pub fn options(&self, level: Level) -> &'static [Node] {
        let depth = level.depth();
        if depth > self.path.len() {
            return &[];
        }
        if depth == 0 {
            self.tree
        } else {
            self.path[depth - 1].children
        }
    }

    pub fn option_names(&self, level: Level) -> Vec<&'static str> {
        self.options(level).iter().map(|n| n.name).collect()
    }

    /// Choose `name` at `level`, clearing every descendant selection.
    pub fn select(&mut self, level: Level, name: &str) -> AppResult<()> {
        let depth = level.depth();
        if depth > self.path.len() {
            // report the shallowest unset ancestor
            let missing = Level::ALL[self.path.len()];
            return Err(ValidationError::missing(missing.field()).into());
        }

        let chosen = find(self.options(level), name).ok_or_else(|| AppError::InvalidSelection {
            field: level.field(),
            value: name.to_string(),
        })?;

        self.path.truncate(depth);
        self.path.push(chosen);
        Ok(())
    }

    /// Drop the choice at `level` and everything below it.
    pub fn clear(&mut self, level: Level) {
        self.path.truncate(level.depth());
    }

    pub fn selected(&self, level: Level) -> Option<&'static str> {
        self.path.get(level.depth()).map(|n| n.name)
    }

    /// First level without a choice, if any.
    pub fn next_level(&self) -> Option<Level> {
        Level::ALL.get(self.path.len()).copied()
    }

    pub fn identity(&self) -> Option<ClassIdentity> {
        if self.path.len() < Level::ALL.len() {
            return None;
        }
        Some(ClassIdentity {
            department: self.path[0].name.to_string(),
            course: self.path[1].name.to_string(),
            branch: self.path[2].name.to_string(),
            year: self.path[3].name.to_string(),
            semester: self.path[4].name.to_string(),
        })
    }
}

/// Selector plus time slot: the all-or-nothing input of capture, records
/// and export.
#[derive(Debug, Clone, Default)]
pub struct ClassSelection {
    pub classes: ClassSelector,
    pub time_slot: Option<TimeSlot>,
}

impl ClassSelection {
    /// Build a selection from optional CLI values, applying them root first.
    /// A value given below an unset parent is a validation error.
    pub fn from_parts(parts: [Option<&str>; 5], time_slot: Option<TimeSlot>) -> AppResult<Self> {
        let mut classes = ClassSelector::default();
        for (level, value) in Level::ALL.iter().zip(parts) {
            if let Some(v) = value {
                classes.select(*level, v)?;
            }
        }
        Ok(Self { classes, time_slot })
    }

    /// Identity, or the first unset level as a field-specific error.
    pub fn require_identity(&self) -> Result<ClassIdentity, ValidationError> {
        match self.classes.next_level() {
            Some(level) => Err(ValidationError::missing(level.field())),
            None => self
                .classes
                .identity()
                .ok_or_else(|| ValidationError::missing(Field::Class)),
        }
    }

    pub fn require_time_slot(&self) -> Result<TimeSlot, ValidationError> {
        self.time_slot
            .ok_or_else(|| ValidationError::missing(Field::TimeSlot))
    }

    pub fn is_complete(&self) -> bool {
        self.classes.identity().is_some() && self.time_slot.is_some()
    }
}
