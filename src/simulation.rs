use crate::particle::Particle;
use crate::rules::{ParticleType, RuleMatrix, TYPE_COUNT};
use crate::surface::{Bounds, Surface};
use crate::vec2::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Particles spawned per type in a standard world.
pub const PARTICLES_PER_TYPE: usize = 100;

/// The standard population, in spawn order.
pub const DEFAULT_POPULATION: [(ParticleType, usize); TYPE_COUNT] = [
    (ParticleType::Red, PARTICLES_PER_TYPE),
    (ParticleType::Blue, PARTICLES_PER_TYPE),
    (ParticleType::Green, PARTICLES_PER_TYPE),
    (ParticleType::Yellow, PARTICLES_PER_TYPE),
];

/// End-of-run statistics over one world's stability samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityReport {
    pub samples: usize,
    pub mean: f32,
    pub std_dev: f32,
}

/// One world: a particle population, the rule matrix it was built from,
/// and the stability samples collected so far.
pub struct Simulation {
    rules: RuleMatrix,
    particles: Vec<Particle>,
    samples: Vec<f32>,
    bounds: Bounds,
}

impl Simulation {
    /// Build a world from `counts` pairs of (type, population). Each
    /// particle spawns at rest at a uniformly random position inside the
    /// surface extent, with its type's rule row bound to it. The
    /// population is laid out type-major, in `counts` order.
    pub fn new(
        rules: RuleMatrix,
        counts: &[(ParticleType, usize)],
        bounds: Bounds,
        rng: &mut StdRng,
    ) -> Self {
        let total = counts.iter().map(|(_, n)| n).sum();
        let mut particles = Vec::with_capacity(total);
        for &(kind, count) in counts {
            let row = rules.row(kind);
            for _ in 0..count {
                let position = Vec2::new(
                    rng.gen_range(0.0..bounds.width),
                    rng.gen_range(0.0..bounds.height),
                );
                particles.push(Particle::new(position, kind, row));
            }
        }
        Self {
            rules,
            particles,
            samples: Vec::new(),
            bounds,
        }
    }

    /// Advance every particle one frame and redraw the world. Particles
    /// update in storage order, in place: a particle's force sees the
    /// already-moved positions of earlier particles and the pre-step
    /// positions of later ones.
    pub fn step<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();
        for i in 0..self.particles.len() {
            let force = self.particles[i].net_force(&self.particles);
            let particle = &mut self.particles[i];
            particle.apply_force(force);
            particle.integrate(self.bounds);
            particle.draw(surface);
        }
    }

    /// Collect one stability sample, the summed same-type spread over
    /// the whole population. Appends to the sample log and returns the
    /// value.
    pub fn sample(&mut self) -> f32 {
        let mut total = 0.0;
        for particle in &self.particles {
            total += particle.stability(&self.particles);
        }
        self.samples.push(total);
        total
    }

    /// Mean of the collected samples; `None` before any sampling.
    pub fn mean_stability(&self) -> Option<f32> {
        mean(&self.samples)
    }

    /// Mean and population standard deviation of the collected samples;
    /// `None` before any sampling.
    pub fn report(&self) -> Option<StabilityReport> {
        let mean = self.mean_stability()?;
        let variance = self
            .samples
            .iter()
            .map(|s| (s - mean) * (s - mean))
            .sum::<f32>()
            / self.samples.len() as f32;
        Some(StabilityReport {
            samples: self.samples.len(),
            mean,
            std_dev: variance.sqrt(),
        })
    }

    pub fn rules(&self) -> &RuleMatrix {
        &self.rules
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Arithmetic mean, or `None` for an empty slice.
fn mean(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f32>() / values.len() as f32)
}
