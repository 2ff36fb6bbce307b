use log::{debug, error, info};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use wedding_rsvp_shared::submit::RsvpSubmitter;

use crate::error::{FeatureError, Result};
use crate::features::form::{RsvpFormController, SubmitOutcome};
use crate::features::particles::ParticleField;
use crate::features::reveal::ScrollReveal;
use crate::features::scroll::ScrollFeatures;
use crate::features::slideshow::Slideshow;
use crate::page::Page;
use crate::settings::PageSettings;

/// One independently initialized part of the page.
pub trait PageFeature {
    fn name(&self) -> &'static str;

    /// Wires the feature onto the page. Must be safe to call again and must
    /// treat missing elements as a no-op.
    fn setup(&mut self, page: &mut Page) -> Result<()>;

    /// Runs after `setup` failed, to leave the page usable.
    fn fallback(&self, _page: &mut Page) {}
}

#[derive(Debug)]
pub struct FeatureOutcome {
    pub feature: &'static str,
    pub result: Result<()>,
}

#[derive(Debug, Default)]
pub struct InitReport {
    pub outcomes: Vec<FeatureOutcome>,
}

impl InitReport {
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn failures(&self) -> Vec<(&'static str, &FeatureError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.feature, e)))
            .collect()
    }

    pub fn outcome(&self, feature: &str) -> Option<&Result<()>> {
        self.outcomes
            .iter()
            .find(|o| o.feature == feature)
            .map(|o| &o.result)
    }
}

/// Sets up features one after another. A failing feature is recorded and
/// falls back; the rest still run.
pub struct FeatureSupervisor;

impl FeatureSupervisor {
    pub fn run(features: &mut [&mut dyn PageFeature], page: &mut Page) -> InitReport {
        let mut report = InitReport::default();

        for feature in features.iter_mut() {
            let name = feature.name();
            let result = feature.setup(page);
            match &result {
                Ok(()) => debug!("Feature '{}' initialized", name),
                Err(err) => {
                    error!("Feature '{}' failed to initialize: {}", name, err);
                    feature.fallback(page);
                }
            }
            report.outcomes.push(FeatureOutcome {
                feature: name,
                result,
            });
        }

        report
    }
}

/// The page script's application object. The host creates one and calls
/// [`InvitationApp::initialize`] when the page is ready.
pub struct InvitationApp {
    initialized: bool,
    slideshow_started: bool,
    report: InitReport,
    particles: ParticleField,
    slideshow: Slideshow,
    scroll: ScrollFeatures,
    reveal: ScrollReveal,
    form: RsvpFormController,
}

impl InvitationApp {
    pub fn new(settings: PageSettings, submitter: RsvpSubmitter) -> Self {
        Self::with_particles(
            ParticleField::new(settings.particle_count),
            settings,
            submitter,
        )
    }

    pub fn with_particles(
        particles: ParticleField,
        settings: PageSettings,
        submitter: RsvpSubmitter,
    ) -> Self {
        Self {
            initialized: false,
            slideshow_started: false,
            report: InitReport::default(),
            particles,
            slideshow: Slideshow::new(settings.slide_interval),
            scroll: ScrollFeatures::new(settings.header_threshold),
            reveal: ScrollReveal::new(settings.reveal_mode, settings.reveal_classes),
            form: RsvpFormController::new(submitter),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Initializes every feature on the first call. Later calls return the
    /// first report and touch nothing.
    pub fn initialize(&mut self, page: &mut Page) -> &InitReport {
        if self.initialized {
            debug!("Invitation page already initialized");
            return &self.report;
        }
        self.initialized = true;
        info!("Initializing invitation page");

        let mut features: [&mut dyn PageFeature; 5] = [
            &mut self.particles,
            &mut self.slideshow,
            &mut self.scroll,
            &mut self.reveal,
            &mut self.form,
        ];
        let report = FeatureSupervisor::run(&mut features, page);
        self.report = report;
        &self.report
    }

    pub fn report(&self) -> &InitReport {
        &self.report
    }

    pub async fn submit(&self, page: &mut Page) -> SubmitOutcome {
        self.form.submit(page).await
    }

    pub fn on_nav_click(&self, page: &mut Page, href: &str) -> bool {
        self.scroll.on_nav_click(page, href)
    }

    pub fn on_scroll(&self, page: &mut Page, scroll_y: f64) {
        self.scroll.on_scroll(page, scroll_y)
    }

    pub fn on_intersection(&self, page: &mut Page, section_id: &str, intersecting: bool) -> bool {
        self.reveal.on_intersection(page, section_id, intersecting)
    }

    /// Starts the slideshow timer. Returns `None` when there is nothing to
    /// cycle or the timer is already running.
    pub async fn start_slideshow(&mut self, page: Arc<Mutex<Page>>) -> Option<JoinHandle<()>> {
        if self.slideshow_started {
            debug!("Slideshow timer already running");
            return None;
        }
        if page.lock().await.slides.is_empty() {
            return None;
        }
        self.slideshow_started = true;
        Some(self.slideshow.spawn(page))
    }
}
