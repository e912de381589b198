use crate::rules::{ParticleType, RuleMatrix};
use crate::simulation::{Simulation, DEFAULT_POPULATION};
use crate::surface::{Bounds, Surface};
use rand::rngs::StdRng;

/// Number of independent worlds advanced per tick.
pub const WORLD_COUNT: usize = 4;

/// World extent in world units. Surfaces scale this to whatever display
/// area they have; the physics never sees display coordinates.
pub const WORLD_WIDTH: f32 = 950.0;
pub const WORLD_HEIGHT: f32 = 460.0;

/// Ticks run before sampling begins.
pub const WARMUP_TICKS: u32 = 90;

/// Total ticks in a run. Every tick after the warm-up collects one
/// stability sample per world.
pub const TOTAL_TICKS: u32 = 100;

/// The standard world geometry with no layout offsets.
pub fn world_bounds() -> Bounds {
    Bounds {
        left: 0.0,
        top: 0.0,
        width: WORLD_WIDTH,
        height: WORLD_HEIGHT,
    }
}

/// One world: a simulation bound to its own drawing surface.
pub struct World<S: Surface> {
    pub sim: Simulation,
    pub surface: S,
}

/// A full run: several worlds with independently drawn rule matrices and
/// an explicit tick counter. The caller drives `advance` once per frame
/// until `is_finished`.
pub struct Run<S: Surface> {
    worlds: Vec<World<S>>,
    tick: u32,
}

impl<S: Surface> Run<S> {
    /// One world per surface, each with a fresh random matrix and the
    /// standard population placed inside that surface's bounds.
    pub fn new(surfaces: Vec<S>, rng: &mut StdRng) -> Self {
        Self::with_population(surfaces, &DEFAULT_POPULATION, rng)
    }

    /// Like [`Run::new`] with an explicit per-world population.
    pub fn with_population(
        surfaces: Vec<S>,
        counts: &[(ParticleType, usize)],
        rng: &mut StdRng,
    ) -> Self {
        let worlds = surfaces
            .into_iter()
            .map(|surface| {
                let rules = RuleMatrix::random(rng);
                let sim = Simulation::new(rules, counts, surface.bounds(), rng);
                World { sim, surface }
            })
            .collect();
        Self { worlds, tick: 0 }
    }

    /// Advance every world one tick, sampling on the post-warm-up ticks.
    /// Does nothing once the run is finished.
    pub fn advance(&mut self) {
        if self.is_finished() {
            return;
        }
        self.tick += 1;
        for world in &mut self.worlds {
            world.sim.step(&mut world.surface);
            if self.tick > WARMUP_TICKS {
                world.sim.sample();
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.tick >= TOTAL_TICKS
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn worlds(&self) -> &[World<S>] {
        &self.worlds
    }

    pub fn worlds_mut(&mut self) -> &mut [World<S>] {
        &mut self.worlds
    }
}
