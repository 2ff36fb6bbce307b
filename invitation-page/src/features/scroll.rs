use log::debug;

use crate::error::Result;
use crate::lifecycle::PageFeature;
use crate::page::{Page, ScrollRequest};

/// Smooth-scrolling nav links and the header's scrolled style.
pub struct ScrollFeatures {
    header_threshold: f64,
    wired: bool,
}

impl ScrollFeatures {
    pub fn new(header_threshold: f64) -> Self {
        Self {
            header_threshold,
            wired: false,
        }
    }

    /// Click on a nav link. Queues a smooth scroll to the linked section if
    /// the link is wired and the section exists.
    pub fn on_nav_click(&self, page: &mut Page, href: &str) -> bool {
        let wired = page
            .nav_links
            .iter()
            .any(|link| link.href == href && link.click_handlers > 0);
        if !wired {
            return false;
        }

        let Some(target) = href.strip_prefix('#') else {
            return false;
        };
        if page.section(target).is_none() {
            debug!("Nav target '{}' not found on the page", href);
            return false;
        }

        page.scroll_requests.push(ScrollRequest::start(target));
        true
    }

    pub fn on_scroll(&self, page: &mut Page, scroll_y: f64) {
        page.viewport.scroll_y = scroll_y;
        if let Some(header) = page.header.as_mut() {
            if header.scroll_listeners > 0 {
                header.scrolled = scroll_y > self.header_threshold;
            }
        }
    }
}

impl PageFeature for ScrollFeatures {
    fn name(&self) -> &'static str {
        "scroll"
    }

    fn setup(&mut self, page: &mut Page) -> Result<()> {
        if self.wired {
            return Ok(());
        }

        let mut wired_links = 0;
        for link in page.nav_links.iter_mut() {
            if !link.href.starts_with('#') {
                debug!("Skipping nav link '{}', not an in-page anchor", link.href);
                continue;
            }
            link.click_handlers += 1;
            wired_links += 1;
        }
        if let Some(header) = page.header.as_mut() {
            header.scroll_listeners += 1;
        }

        self.wired = true;
        debug!("Wired {} nav links", wired_links);
        Ok(())
    }
}
