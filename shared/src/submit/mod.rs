use log::{error, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{Messages, RsvpConfig};
use crate::error::{Result, ServiceError};
use crate::forward::FormForwarder;
use crate::mapping::FieldMapper;
use crate::models::{RsvpForm, SubmissionReceipt};
use crate::validate::Validator;

/// Validates, maps and dispatches one RSVP.
///
/// Every call is a fresh, one-shot attempt. Nothing is kept between calls
/// and failed dispatches are not retried; the guest resubmits by hand.
#[derive(Clone)]
pub struct RsvpSubmitter {
    validator: Validator,
    mapper: FieldMapper,
    forwarder: Arc<dyn FormForwarder>,
    messages: Messages,
}

impl RsvpSubmitter {
    pub fn new(config: &RsvpConfig, forwarder: Arc<dyn FormForwarder>) -> Self {
        Self {
            validator: Validator::from_config(config),
            mapper: FieldMapper::from_config(config),
            forwarder,
            messages: config.messages.clone(),
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub async fn submit(&self, form: &RsvpForm) -> Result<SubmissionReceipt> {
        let submission_id = Uuid::new_v4().to_string();

        if let Err(err) = self.validator.validate(form) {
            warn!(
                "RSVP {} not sent, missing required fields: {:?}",
                submission_id, err.missing
            );
            return Err(ServiceError::Validation(err));
        }

        let mapped = self.mapper.map(form);
        info!(
            "Dispatching RSVP {} with {} fields",
            submission_id,
            mapped.len()
        );

        match self.forwarder.dispatch(&mapped).await {
            Ok(()) => {
                info!("RSVP {} dispatched", submission_id);
                Ok(SubmissionReceipt::dispatched(submission_id))
            }
            Err(ServiceError::Transport { cause, .. }) => {
                error!("RSVP {} failed in transport: {}", submission_id, cause);
                Err(ServiceError::Transport {
                    message: self.messages.transport_failure.clone(),
                    cause,
                })
            }
            Err(err) => {
                error!("RSVP {} failed: {}", submission_id, err);
                Err(err)
            }
        }
    }
}
