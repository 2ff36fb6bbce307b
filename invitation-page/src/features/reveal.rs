use log::debug;
use serde::Serialize;

use crate::error::{FeatureError, Result};
use crate::lifecycle::PageFeature;
use crate::page::Page;

pub const REVEAL_CLASS: &str = "reveal-text";

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// Stop observing a section after its first reveal
    Once,
    /// Keep observing revealed sections
    Continuous,
}

/// Hides marked sections until they scroll into view.
pub struct ScrollReveal {
    mode: RevealMode,
    target_classes: Vec<String>,
}

impl ScrollReveal {
    pub fn new(mode: RevealMode, target_classes: Vec<String>) -> Self {
        Self {
            mode,
            target_classes,
        }
    }

    fn is_target(&self, classes: &[String]) -> bool {
        classes.iter().any(|c| self.target_classes.contains(c))
    }

    /// Viewport observation callback. Returns whether the section changed.
    pub fn on_intersection(&self, page: &mut Page, id: &str, intersecting: bool) -> bool {
        let Some(section) = page.section_mut(id) else {
            return false;
        };
        if !section.observed || !intersecting {
            return false;
        }

        section.visible = true;
        if self.mode == RevealMode::Once {
            section.observed = false;
        }
        true
    }
}

impl PageFeature for ScrollReveal {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn setup(&mut self, page: &mut Page) -> Result<()> {
        if !page.viewport.supports_observation {
            return Err(FeatureError::Unsupported(
                "viewport intersection observation".to_string(),
            ));
        }

        let mut targets = 0;
        for section in page.sections.iter_mut() {
            if self.is_target(&section.classes) {
                // Sections marked on an earlier run keep their visibility
                if !section.has_class(REVEAL_CLASS) {
                    section.add_class(REVEAL_CLASS);
                    section.visible = false;
                    section.observed = true;
                }
                targets += 1;
            }
        }

        debug!("{} reveal targets ({:?})", targets, self.mode);
        Ok(())
    }

    /// Without observation support nothing would ever be revealed, so
    /// every target is shown straight away.
    fn fallback(&self, page: &mut Page) {
        for section in page.sections.iter_mut() {
            if self.is_target(&section.classes) || section.has_class(REVEAL_CLASS) {
                section.visible = true;
                section.observed = false;
            }
        }
    }
}
