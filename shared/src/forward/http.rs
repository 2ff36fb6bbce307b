use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::multipart::Form;
use reqwest::Client;

use crate::config::RsvpConfig;
use crate::error::{map_transport_error, Result, ServiceError};
use crate::forward::FormForwarder;
use crate::models::MappedSubmission;

// HttpFormForwarder

/// Posts submissions as `multipart/form-data` to the receiving form.
///
/// The receiving form answers cross-origin posts with an unreadable body,
/// so the status and body are dropped unread. Only a transport failure is
/// reported back.
pub struct HttpFormForwarder {
    client: Client,
    action_url: String,
    transport_message: String,
}

impl HttpFormForwarder {
    pub fn new(config: &RsvpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| {
                ServiceError::InternalError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self::with_client(client, config))
    }

    /// Creates a forwarder with the specified client.
    /// This is mainly useful for testing against a local mock server.
    pub fn with_client(client: Client, config: &RsvpConfig) -> Self {
        Self {
            client,
            action_url: config.form_action_url.clone(),
            transport_message: config.messages.transport_failure.clone(),
        }
    }

    fn build_form(submission: &MappedSubmission) -> Form {
        submission
            .fields
            .iter()
            .fold(Form::new(), |form, (key, value)| {
                form.text(key.clone(), value.clone())
            })
    }
}

#[async_trait]
impl FormForwarder for HttpFormForwarder {
    async fn dispatch(&self, submission: &MappedSubmission) -> Result<()> {
        debug!(
            "Posting {} fields to {}",
            submission.len(),
            self.action_url
        );

        let response = self
            .client
            .post(&self.action_url)
            .multipart(Self::build_form(submission))
            .send()
            .await
            .map_err(|e| {
                error!("Form dispatch failed: {}", e);
                map_transport_error(&self.transport_message, e)
            })?;

        info!(
            "Form dispatched to {} (response ignored, status={})",
            self.action_url,
            response.status()
        );
        Ok(())
    }
}
