use std::time::Duration;
use wedding_rsvp_shared::config::Variant;

use crate::features::reveal::RevealMode;

pub const DEFAULT_PARTICLE_COUNT: usize = 25;
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Presentation settings for one deployment of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSettings {
    pub particle_count: usize,
    pub slide_interval: Duration,
    pub header_threshold: f64,
    pub reveal_mode: RevealMode,
    pub reveal_classes: Vec<String>,
}

impl PageSettings {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Family => Self {
                particle_count: DEFAULT_PARTICLE_COUNT,
                slide_interval: Duration::from_secs(6),
                header_threshold: HEADER_SCROLL_THRESHOLD,
                reveal_mode: RevealMode::Once,
                reveal_classes: [
                    "section-title",
                    "section-subtitle",
                    "message-text",
                    "couple-card",
                    "info-card",
                    "rsvp-intro",
                    "form-group",
                ]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            },
            Variant::Guest | Variant::Strict => Self {
                particle_count: DEFAULT_PARTICLE_COUNT,
                slide_interval: Duration::from_secs(3),
                header_threshold: HEADER_SCROLL_THRESHOLD,
                reveal_mode: RevealMode::Continuous,
                reveal_classes: ["message", "info", "rsvp"]
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            },
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self::for_variant(Variant::Guest)
    }
}
