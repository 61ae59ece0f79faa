//! Local profile form. Saved values live in memory only; nothing is written
//! to the database service or to disk.

use crate::config::Config;
use crate::errors::{Field, ValidationError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

impl Profile {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            name: cfg.profile_name.clone(),
            email: cfg.profile_email.clone(),
        }
    }
}

/// Edit session over a profile: draft values, validated on save.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    saved: Profile,
    draft: Option<Profile>,
}

impl ProfileForm {
    pub fn new(profile: Profile) -> Self {
        Self {
            saved: profile,
            draft: None,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.saved
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.saved.clone());
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.edit();
        if let Some(d) = self.draft.as_mut() {
            d.name = name.to_string();
        }
    }

    pub fn set_email(&mut self, email: &str) {
        self.edit();
        if let Some(d) = self.draft.as_mut() {
            d.email = email.to_string();
        }
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Apply the draft when valid; on failure the draft stays open and the
    /// saved profile is unchanged.
    pub fn save(&mut self) -> Result<&Profile, ValidationError> {
        if let Some(draft) = &self.draft {
            validate(draft)?;
            self.saved = Profile {
                name: draft.name.trim().to_string(),
                email: draft.email.trim().to_string(),
            };
            self.draft = None;
        }
        Ok(&self.saved)
    }
}

pub fn validate(p: &Profile) -> Result<(), ValidationError> {
    if p.name.trim().is_empty() {
        return Err(ValidationError::missing(Field::Name));
    }
    let email = p.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::missing(Field::Email));
    }
    Ok(())
}
