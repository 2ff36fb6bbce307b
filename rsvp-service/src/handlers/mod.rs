use std::sync::Arc;

use wedding_rsvp_shared::config::RsvpConfig;
use wedding_rsvp_shared::submit::RsvpSubmitter;

pub mod rsvp_handlers;

/// State shared by the RSVP routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RsvpConfig>,
    pub submitter: RsvpSubmitter,
}
