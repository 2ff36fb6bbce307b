mod lifecycle_tests;

use std::sync::Arc;

use wedding_rsvp_shared::config::Variant;
use wedding_rsvp_shared::models::RsvpForm;
use wedding_rsvp_shared::submit::RsvpSubmitter;
use wedding_rsvp_shared::test_utils::fixtures::test_config;
use wedding_rsvp_shared::test_utils::mock_form_forwarder::MockFormForwarder;
use wedding_rsvp_shared::test_utils::test_logging::init_test_logging;

use crate::features::particles::ParticleField;
use crate::lifecycle::InvitationApp;
use crate::page::{
    FormView, Header, NavLink, Page, Panel, ParticleContainer, Section, Slide,
};
use crate::settings::PageSettings;

/// The full invitation page with the given form values
pub fn invitation_page(values: RsvpForm) -> Page {
    Page {
        form: Some(FormView::new(values)),
        thank_you: Some(Panel::default()),
        particles: Some(ParticleContainer::default()),
        header: Some(Header::default()),
        slides: vec![
            Slide::new("hero-1.jpg"),
            Slide::new("hero-2.jpg"),
            Slide::new("hero-3.jpg"),
        ],
        nav_links: vec![NavLink::new("#message"), NavLink::new("#rsvp")],
        sections: vec![
            Section::new("message", &["message"]),
            Section::new("info", &["info"]),
            Section::new("rsvp", &["rsvp"]),
            Section::new("footer", &["footer"]),
        ],
        ..Default::default()
    }
}

pub fn create_test_app(variant: Variant) -> (InvitationApp, Arc<MockFormForwarder>) {
    init_test_logging();
    let forwarder = Arc::new(MockFormForwarder::new());
    let submitter = RsvpSubmitter::new(&test_config(variant), forwarder.clone());
    let settings = PageSettings::for_variant(variant);
    let particles = ParticleField::with_seed(settings.particle_count, 7);
    let app = InvitationApp::with_particles(particles, settings, submitter);
    (app, forwarder)
}
