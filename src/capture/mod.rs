//! Attendance capture: photo + class + slot → recognition service →
//! confirmation handoff.

pub mod photo;

use crate::confirmation::Confirmation;
use crate::errors::{AppError, AppResult, Field, ValidationError};
use crate::hierarchy::{ClassIdentity, ClassSelection};
use crate::models::time_slot::TimeSlot;
use crate::recognition::{AttendanceRequest, GENERIC_FAILURE, RecognitionService};
use chrono::Local;
use photo::AttendancePhoto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    PhotoPending,
    Validating,
    Uploading,
    AwaitingResult,
    Succeeded,
    Failed,
}

impl CaptureState {
    /// A request is outstanding; another submit must be refused.
    pub fn in_flight(&self) -> bool {
        matches!(
            self,
            CaptureState::Validating | CaptureState::Uploading | CaptureState::AwaitingResult
        )
    }
}

#[derive(Debug)]
pub struct CaptureFlow {
    state: CaptureState,
    photo: Option<AttendancePhoto>,
    selection: ClassSelection,
    transitions: Vec<CaptureState>,
    last_error: Option<String>,
}

impl Default for CaptureFlow {
    fn default() -> Self {
        Self::new(ClassSelection::default())
    }
}

impl CaptureFlow {
    pub fn new(selection: ClassSelection) -> Self {
        Self {
            state: CaptureState::Idle,
            photo: None,
            selection,
            transitions: vec![CaptureState::Idle],
            last_error: None,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Every state entered so far, in order.
    pub fn transitions(&self) -> &[CaptureState] {
        &self.transitions
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn photo(&self) -> Option<&AttendancePhoto> {
        self.photo.as_ref()
    }

    pub fn selection(&self) -> &ClassSelection {
        &self.selection
    }

    fn enter(&mut self, state: CaptureState) {
        log::debug!("capture: {:?} -> {:?}", self.state, state);
        self.state = state;
        self.transitions.push(state);
    }

    /// Refuse mutation while a request is outstanding. `submit` takes
    /// `&mut self`, so overlap within one call stack is already impossible;
    /// this catches a flow left in flight by a service that panicked.
    fn guard(&self) -> AppResult<()> {
        if self.state.in_flight() {
            return Err(AppError::SubmitInProgress);
        }
        Ok(())
    }

    pub fn select_photo(&mut self, photo: AttendancePhoto) -> AppResult<()> {
        self.guard()?;
        self.photo = Some(photo);
        self.enter(CaptureState::PhotoPending);
        Ok(())
    }

    pub fn clear_photo(&mut self) -> AppResult<()> {
        self.guard()?;
        self.photo = None;
        self.enter(CaptureState::Idle);
        Ok(())
    }

    pub fn set_selection(&mut self, selection: ClassSelection) -> AppResult<()> {
        self.guard()?;
        self.selection = selection;
        Ok(())
    }

    pub fn set_time_slot(&mut self, slot: Option<TimeSlot>) -> AppResult<()> {
        self.guard()?;
        self.selection.time_slot = slot;
        Ok(())
    }

    /// Photo, then class, then time slot: the first gap wins.
    pub fn validate(&self) -> Result<(ClassIdentity, TimeSlot), ValidationError> {
        if self.photo.is_none() {
            return Err(ValidationError::missing(Field::Photo));
        }
        let identity = self
            .selection
            .classes
            .identity()
            .ok_or_else(|| ValidationError::missing(Field::Class))?;
        let slot = self.selection.require_time_slot()?;
        Ok((identity, slot))
    }

    /// One submit attempt: at most one network call, no retry.
    pub fn submit<S: RecognitionService + ?Sized>(&mut self, service: &S) -> AppResult<Confirmation> {
        self.guard()?;
        let resume = if self.photo.is_some() {
            CaptureState::PhotoPending
        } else {
            CaptureState::Idle
        };

        self.enter(CaptureState::Validating);
        let (identity, slot) = match self.validate() {
            Ok(v) => v,
            Err(e) => {
                self.last_error = Some(e.message.clone());
                self.enter(resume);
                return Err(e.into());
            }
        };

        self.enter(CaptureState::Uploading);
        let outcome = match self.photo.as_ref() {
            Some(photo) => service.process_attendance(&AttendanceRequest {
                photo,
                class_name: identity.key(),
                time_slot: slot,
            }),
            None => {
                self.enter(resume);
                return Err(ValidationError::missing(Field::Photo).into());
            }
        };
        self.enter(CaptureState::AwaitingResult);

        match outcome {
            Ok(result) => {
                self.last_error = None;
                self.enter(CaptureState::Succeeded);
                Ok(Confirmation {
                    class_name: identity.display_name(),
                    time_slot: slot,
                    timestamp: Local::now(),
                    collection_name: result
                        .collection_name
                        .filter(|c| !c.trim().is_empty())
                        .unwrap_or_else(|| identity.collection_id(slot)),
                    faces_detected: result.faces_detected,
                    attendance: result.attendance,
                })
            }
            Err(e) => {
                let surfaced = match e {
                    AppError::Server { status, message } => AppError::Server { status, message },
                    other => {
                        log::warn!("recognition request failed: {other}");
                        AppError::Server {
                            status: 0,
                            message: GENERIC_FAILURE.to_string(),
                        }
                    }
                };
                self.last_error = Some(surfaced.to_string());
                self.enter(CaptureState::Failed);
                // back to a resubmittable state with the photo still attached
                self.enter(CaptureState::PhotoPending);
                Err(surfaced)
            }
        }
    }
}
