use serde::Serialize;
use wedding_rsvp_shared::models::RsvpForm;

use crate::features::particles::Particle;

pub const FORM_ID: &str = "rsvpForm";
pub const THANK_YOU_ID: &str = "thankYou";

/// The elements the page script works with. Any of them may be missing;
/// the feature that needs a missing element does nothing.
#[derive(Serialize, Clone, Debug, Default)]
pub struct Page {
    pub form: Option<FormView>,
    pub thank_you: Option<Panel>,
    pub particles: Option<ParticleContainer>,
    pub header: Option<Header>,
    pub slides: Vec<Slide>,
    pub nav_links: Vec<NavLink>,
    pub sections: Vec<Section>,
    pub viewport: Viewport,
    pub alerts: Vec<String>,
    pub scroll_requests: Vec<ScrollRequest>,
}

impl Page {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn active_slide(&self) -> Option<usize> {
        self.slides.iter().position(|s| s.active)
    }
}

/// `#rsvpForm`
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FormView {
    pub values: RsvpForm,
    pub visible: bool,
    pub submit_handlers: usize,
}

impl FormView {
    pub fn new(values: RsvpForm) -> Self {
        Self {
            values,
            visible: true,
            submit_handlers: 0,
        }
    }
}

/// `#thankYou`, hidden until an RSVP goes out
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Panel {
    pub visible: bool,
}

/// `#particles`
#[derive(Serialize, Clone, Debug, Default)]
pub struct ParticleContainer {
    pub particles: Vec<Particle>,
}

/// `#header`
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Header {
    pub scrolled: bool,
    pub scroll_listeners: usize,
}

/// `.hero-slide`
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Slide {
    pub image: String,
    pub active: bool,
}

impl Slide {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            active: false,
        }
    }
}

/// `.nav-link`
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    pub href: String,
    pub click_handlers: usize,
}

impl NavLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            click_handlers: 0,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub classes: Vec<String>,
    pub visible: bool,
    pub observed: bool,
}

impl Section {
    pub fn new(id: impl Into<String>, classes: &[&str]) -> Self {
        Self {
            id: id.into(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            visible: true,
            observed: false,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub supports_observation: bool,
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            supports_observation: true,
            scroll_y: 0.0,
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Start,
    Center,
}

/// A smooth scroll the host should perform.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: String,
    pub block: ScrollBlock,
    pub smooth: bool,
}

impl ScrollRequest {
    pub fn start(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            block: ScrollBlock::Start,
            smooth: true,
        }
    }

    pub fn center(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            block: ScrollBlock::Center,
            smooth: true,
        }
    }
}
