use log::{debug, error, info, warn};
use wedding_rsvp_shared::error::{ServiceError, ValidationError};
use wedding_rsvp_shared::models::SubmissionReceipt;
use wedding_rsvp_shared::submit::RsvpSubmitter;

use crate::error::Result;
use crate::lifecycle::PageFeature;
use crate::page::{Page, ScrollRequest, THANK_YOU_ID};

/// What a submit did to the page.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// No wired form on the page; nothing happened.
    NotWired,
    /// A required field was empty. An alert was shown and nothing was sent.
    Rejected(ValidationError),
    /// The request went out. The form is hidden and the thank-you shown.
    Dispatched(SubmissionReceipt),
    /// The request failed in transport. An alert was shown and the form
    /// is still there for another try.
    Failed(String),
}

/// Wires the submit handler on `#rsvpForm` and drives its submit flow.
pub struct RsvpFormController {
    submitter: RsvpSubmitter,
    wired: bool,
}

impl RsvpFormController {
    pub fn new(submitter: RsvpSubmitter) -> Self {
        Self {
            submitter,
            wired: false,
        }
    }

    pub async fn submit(&self, page: &mut Page) -> SubmitOutcome {
        let values = match page.form.as_ref() {
            Some(form) if form.submit_handlers > 0 => form.values.clone(),
            _ => return SubmitOutcome::NotWired,
        };

        match self.submitter.submit(&values).await {
            Ok(receipt) => {
                if let Some(form) = page.form.as_mut() {
                    form.visible = false;
                }
                if let Some(thank_you) = page.thank_you.as_mut() {
                    thank_you.visible = true;
                    page.scroll_requests.push(ScrollRequest::center(THANK_YOU_ID));
                }
                info!("RSVP {} sent from the page", receipt.submission_id);
                SubmitOutcome::Dispatched(receipt)
            }
            Err(ServiceError::Validation(err)) => {
                page.alert(err.message.clone());
                SubmitOutcome::Rejected(err)
            }
            Err(ServiceError::Transport { message, cause }) => {
                warn!("RSVP submit failed: {}", cause);
                page.alert(message.clone());
                SubmitOutcome::Failed(message)
            }
            Err(err) => {
                error!("RSVP submit failed: {}", err);
                let message = self.submitter.messages().transport_failure.clone();
                page.alert(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}

impl PageFeature for RsvpFormController {
    fn name(&self) -> &'static str {
        "form"
    }

    fn setup(&mut self, page: &mut Page) -> Result<()> {
        let Some(form) = page.form.as_mut() else {
            debug!("No RSVP form on the page, skipping");
            return Ok(());
        };

        if !self.wired {
            form.submit_handlers += 1;
            self.wired = true;
        }
        Ok(())
    }
}
