use crate::constants::*;
use crate::surface::{Rgba, Surface};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    pub drift: f32,
    pub opacity: f32,
}

pub struct ParticleField<R: Rng = StdRng> {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: R,
}

/// `min(floor(width / 15), 80)`
pub fn particle_count_for(width: u32) -> usize {
    ((width / PARTICLE_SPACING) as usize).min(MAX_PARTICLES)
}

#[inline]
fn sample<R: Rng>(rng: &mut R, (min, max): (f32, f32)) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

impl ParticleField<StdRng> {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    pub fn seeded(width: u32, height: u32, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(width: u32, height: u32, rng: R) -> Self {
        let mut field = Self {
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            rng,
        };
        field.resize(width, height);
        field.reinitialize();
        field
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// New bounds only; existing particles are left alone until [`ParticleField::reinitialize`].
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
    }

    pub fn reinitialize(&mut self) {
        let count = particle_count_for(self.width as u32);
        let (width, height) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle {
                x: sample(rng, (0.0, width)),
                y: sample(rng, (0.0, height)),
                radius: sample(rng, RADIUS_RANGE),
                speed: sample(rng, SPEED_RANGE),
                drift: sample(rng, DRIFT_RANGE),
                opacity: sample(rng, OPACITY_RANGE),
            })
            .collect();
    }

    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();

        let (width, height) = (self.width, self.height);
        for p in self.particles.iter_mut() {
            surface.fill_circle(p.x, p.y, p.radius, Rgba::new(SNOW_COLOR, p.opacity));

            p.y += p.speed;
            p.x += p.drift;

            if p.y > height {
                p.y = -p.radius;
                p.x = sample(&mut self.rng, (0.0, width));
            }
            if p.x > width {
                p.x = 0.0;
            }
            if p.x < 0.0 {
                p.x = width;
            }
        }
    }
}
