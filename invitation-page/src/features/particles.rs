use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::Result;
use crate::lifecycle::PageFeature;
use crate::page::Page;

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ParticleShape {
    /// Sakura petal, rotated by `rotation_deg`
    Petal { rotation_deg: f64 },
    Round,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParticleColor {
    Gold,
    Blush,
}

impl ParticleColor {
    pub fn hex(&self) -> &'static str {
        match self {
            ParticleColor::Gold => "#e6d370",
            ParticleColor::Blush => "#fddde6",
        }
    }
}

/// One falling decoration in `#particles`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub shape: ParticleShape,
    pub color: ParticleColor,
    pub opacity: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub left_pct: f64,
    pub top_pct: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let size_px = rng.gen_range(4.0..12.0);

        let shape = if rng.gen_bool(0.6) {
            ParticleShape::Petal {
                rotation_deg: rng.gen_range(0.0..360.0),
            }
        } else {
            ParticleShape::Round
        };

        let (color, opacity) = if rng.gen_bool(0.5) {
            (ParticleColor::Gold, rng.gen_range(0.1..0.5))
        } else {
            (ParticleColor::Blush, rng.gen_range(0.2..0.7))
        };

        Self {
            size_px,
            shape,
            color,
            opacity,
            duration_secs: rng.gen_range(10.0..20.0),
            delay_secs: rng.gen_range(0.0..15.0),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(-20.0..0.0),
        }
    }

    /// Inline style for the particle element.
    pub fn css(&self) -> String {
        let (radius, transform) = match self.shape {
            ParticleShape::Petal { rotation_deg } => {
                ("50% 0 50% 0", format!(" transform: rotate({:.1}deg);", rotation_deg))
            }
            ParticleShape::Round => ("50%", String::new()),
        };

        format!(
            "position: absolute; width: {size:.2}px; height: {size:.2}px; border-radius: {radius};{transform} \
             background: {bg}; opacity: {opacity:.2}; \
             animation: sakuraFall {duration:.2}s linear {delay:.2}s infinite; \
             left: {left:.2}%; top: {top:.2}%;",
            size = self.size_px,
            radius = radius,
            transform = transform,
            bg = self.color.hex(),
            opacity = self.opacity,
            duration = self.duration_secs,
            delay = self.delay_secs,
            left = self.left_pct,
            top = self.top_pct,
        )
    }
}

/// Fills `#particles` with randomized petals.
pub struct ParticleField {
    count: usize,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic field for tests and previews
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self {
            count,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PageFeature for ParticleField {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn setup(&mut self, page: &mut Page) -> Result<()> {
        let Some(container) = page.particles.as_mut() else {
            debug!("No particle container on the page, skipping");
            return Ok(());
        };

        container.particles.clear();
        let rng = &mut self.rng;
        container
            .particles
            .extend((0..self.count).map(|_| Particle::random(&mut *rng)));

        debug!("Generated {} particles", self.count);
        Ok(())
    }
}
