use log::{debug, trace};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::error::Result;
use crate::lifecycle::PageFeature;
use crate::page::Page;

/// Cycles the `.hero-slide` images on a fixed timer.
pub struct Slideshow {
    interval: Duration,
}

impl Slideshow {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Moves `active` to the next slide, wrapping around. Returns the new
    /// index, or `None` when the page has no slides.
    pub fn advance(page: &mut Page) -> Option<usize> {
        let len = page.slides.len();
        if len == 0 {
            return None;
        }

        let current = page.active_slide().unwrap_or(0);
        let next = (current + 1) % len;
        for (index, slide) in page.slides.iter_mut().enumerate() {
            slide.active = index == next;
        }

        trace!("Slideshow advanced {} -> {}", current, next);
        Some(next)
    }

    /// Starts the timer. Abort the handle to stop it.
    pub fn spawn(&self, page: Arc<Mutex<Page>>) -> JoinHandle<()> {
        let period = self.interval;
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let mut page = page.lock().await;
                if Self::advance(&mut page).is_none() {
                    debug!("Slides removed from the page, stopping slideshow");
                    break;
                }
            }
        })
    }
}

impl PageFeature for Slideshow {
    fn name(&self) -> &'static str {
        "slideshow"
    }

    fn setup(&mut self, page: &mut Page) -> Result<()> {
        if page.slides.is_empty() {
            debug!("No hero slides on the page, skipping");
            return Ok(());
        }

        for (index, slide) in page.slides.iter_mut().enumerate() {
            slide.active = index == 0;
        }
        debug!(
            "Slideshow ready with {} slides every {:?}",
            page.slides.len(),
            self.interval
        );
        Ok(())
    }
}
