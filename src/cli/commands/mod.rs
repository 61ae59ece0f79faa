pub mod classes;
pub mod config;
pub mod export;
pub mod home;
pub mod init;
pub mod profile;
pub mod records;
pub mod take;

use crate::cli::parser::ClassArgs;
use crate::errors::AppResult;
use crate::hierarchy::ClassSelection;
use crate::models::time_slot::TimeSlot;

/// Apply the hierarchy flags root first; a flag below an unset parent or a
/// value outside the parent's children is rejected.
pub(crate) fn selection_from(class: &ClassArgs, slot: Option<TimeSlot>) -> AppResult<ClassSelection> {
    ClassSelection::from_parts(class.parts(), slot)
}
