use async_trait::async_trait;

use crate::error::Result;
use crate::models::MappedSubmission;

// Expose the HTTP forwarder module
pub mod http;

/// FormForwarder trait defining how a mapped submission leaves the system
///
/// Implementations send exactly once and never inspect the response. `Ok`
/// only means the request was dispatched without a transport failure.
#[async_trait]
pub trait FormForwarder: Send + Sync + 'static {
    /// Sends the submission to the receiving form service
    async fn dispatch(&self, submission: &MappedSubmission) -> Result<()>;
}
