use wedding_rsvp_shared::config::Variant;
use wedding_rsvp_shared::test_utils::fixtures::complete_form;

use super::{create_test_app, invitation_page};
use crate::error::{FeatureError, Result};
use crate::features::form::SubmitOutcome;
use crate::lifecycle::{FeatureSupervisor, PageFeature};
use crate::page::{NavLink, Page, ScrollRequest, Section};

#[tokio::test]
async fn test_repeated_initialize_wires_one_submit_handler() {
    let (mut app, forwarder) = create_test_app(Variant::Guest);
    let mut page = invitation_page(complete_form());

    assert!(!app.is_initialized());
    for _ in 0..3 {
        app.initialize(&mut page);
    }
    assert!(app.is_initialized());

    assert_eq!(page.form.as_ref().unwrap().submit_handlers, 1);
    assert!(page.nav_links.iter().all(|l| l.click_handlers == 1));
    assert_eq!(page.header.as_ref().unwrap().scroll_listeners, 1);

    let outcome = app.submit(&mut page).await;
    assert!(matches!(outcome, SubmitOutcome::Dispatched(_)));
    assert_eq!(forwarder.dispatch_count(), 1);
}

#[test]
fn test_initialize_reports_every_feature_in_order() {
    let (mut app, _) = create_test_app(Variant::Guest);
    let mut page = invitation_page(complete_form());

    let report = app.initialize(&mut page);
    let names: Vec<&str> = report.outcomes.iter().map(|o| o.feature).collect();
    assert_eq!(names, vec!["particles", "slideshow", "scroll", "reveal", "form"]);
    assert!(report.is_clean());
}

#[tokio::test]
async fn test_bare_page_initializes_and_form_still_works() {
    let (mut app, forwarder) = create_test_app(Variant::Guest);
    let mut page = Page {
        form: invitation_page(complete_form()).form,
        ..Default::default()
    };

    let report = app.initialize(&mut page);
    assert!(report.is_clean());

    let outcome = app.submit(&mut page).await;
    assert!(matches!(outcome, SubmitOutcome::Dispatched(_)));
    assert_eq!(forwarder.dispatch_count(), 1);
}

#[tokio::test]
async fn test_unsupported_reveal_falls_back_without_blocking_form() {
    let (mut app, forwarder) = create_test_app(Variant::Guest);
    let mut page = invitation_page(complete_form());
    page.viewport.supports_observation = false;
    page.sections[0].visible = false;

    let report = app.initialize(&mut page);
    assert!(!report.is_clean());
    let failures = report.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "reveal");
    assert!(matches!(failures[0].1, FeatureError::Unsupported(_)));
    assert!(matches!(report.outcome("form"), Some(Ok(()))));

    // Reveal targets are shown right away instead of staying hidden
    assert!(page.sections.iter().all(|s| s.visible));

    let outcome = app.submit(&mut page).await;
    assert!(matches!(outcome, SubmitOutcome::Dispatched(_)));
    assert_eq!(forwarder.dispatch_count(), 1);
}

#[test]
fn test_external_nav_link_is_skipped_and_rest_still_wired() {
    let (mut app, _) = create_test_app(Variant::Guest);
    let mut page = invitation_page(complete_form());
    page.nav_links.push(NavLink::new("https://example.test/map"));

    let report = app.initialize(&mut page);
    assert!(report.is_clean());
    assert!(matches!(report.outcome("scroll"), Some(Ok(()))));
    assert_eq!(page.nav_links[2].click_handlers, 0);

    app.on_scroll(&mut page, 500.0);
    assert!(page.header.as_ref().unwrap().scrolled);

    assert!(app.on_nav_click(&mut page, "#rsvp"));
    assert_eq!(page.scroll_requests, vec![ScrollRequest::start("rsvp")]);
    assert!(!app.on_nav_click(&mut page, "https://example.test/map"));
}

struct Broken;

impl PageFeature for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn setup(&mut self, _page: &mut Page) -> Result<()> {
        Err(FeatureError::Internal("boom".to_string()))
    }

    fn fallback(&self, page: &mut Page) {
        page.sections.push(Section::new("fallback", &[]));
    }
}

struct Marker;

impl PageFeature for Marker {
    fn name(&self) -> &'static str {
        "marker"
    }

    fn setup(&mut self, page: &mut Page) -> Result<()> {
        page.alert("marker ran");
        Ok(())
    }
}

#[test]
fn test_supervisor_runs_fallback_and_continues() {
    let mut page = Page::default();
    let mut broken = Broken;
    let mut marker = Marker;

    let mut features: [&mut dyn PageFeature; 2] = [&mut broken, &mut marker];
    let report = FeatureSupervisor::run(&mut features, &mut page);

    assert_eq!(report.failures().len(), 1);
    assert!(matches!(report.outcome("marker"), Some(Ok(()))));
    assert!(page.section("fallback").is_some());
    assert_eq!(page.alerts, vec!["marker ran"]);
}
