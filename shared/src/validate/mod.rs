use log::debug;

use crate::config::RsvpConfig;
use crate::error::ValidationError;
use crate::models::{FieldName, RsvpForm};

/// Decides whether a form may be submitted.
///
/// Only presence is checked. Values are taken as entered, so a name of
/// `" "` passes.
#[derive(Clone, Debug)]
pub struct Validator {
    required: Vec<FieldName>,
    satisfied_by_config: Vec<FieldName>,
    message: String,
}

impl Validator {
    pub fn new(required: Vec<FieldName>, message: impl Into<String>) -> Self {
        Self {
            required,
            satisfied_by_config: Vec::new(),
            message: message.into(),
        }
    }

    pub fn from_config(config: &RsvpConfig) -> Self {
        Self {
            required: config.required.clone(),
            satisfied_by_config: config.fixed_values.keys().copied().collect(),
            message: config.messages.required_missing.clone(),
        }
    }

    pub fn required(&self) -> &[FieldName] {
        &self.required
    }

    pub fn validate(&self, form: &RsvpForm) -> Result<(), ValidationError> {
        let missing: Vec<FieldName> = FieldName::ALL
            .into_iter()
            .filter(|field| self.required.contains(field))
            .filter(|field| !self.satisfied_by_config.contains(field))
            .filter(|field| form.get(*field).map_or(true, str::is_empty))
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        debug!("RSVP form rejected, missing fields: {:?}", missing);
        Err(ValidationError {
            missing,
            message: self.message.clone(),
        })
    }
}
