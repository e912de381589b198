use crate::braille::BrailleCanvas;
use crate::run::{world_bounds, Run, WARMUP_TICKS, WORLD_COUNT};
use rand::rngs::StdRng;

/// Where the run currently is, for the status box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Warmup,
    Sampling,
    Done,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Warmup => "warming up",
            Phase::Sampling => "sampling",
            Phase::Done => "done",
        }
    }
}

/// Main application state: the run with one Braille canvas per world,
/// advanced once per displayed frame.
pub struct App {
    pub run: Run<BrailleCanvas>,
}

impl App {
    /// Build the standard worlds, each drawing into a `cols` x `rows`
    /// canvas.
    pub fn new(cols: u16, rows: u16, rng: &mut StdRng) -> Self {
        let surfaces = (0..WORLD_COUNT)
            .map(|_| BrailleCanvas::new(world_bounds(), cols, rows))
            .collect();
        Self {
            run: Run::new(surfaces, rng),
        }
    }

    /// Advance one tick; no-op once the run is finished.
    pub fn tick(&mut self) {
        self.run.advance();
    }

    pub fn phase(&self) -> Phase {
        if self.run.is_finished() {
            Phase::Done
        } else if self.run.tick() >= WARMUP_TICKS {
            Phase::Sampling
        } else {
            Phase::Warmup
        }
    }

    /// Resize every world's canvas to match a new terminal size.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        for world in self.run.worlds_mut() {
            world.surface.resize(cols, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::TOTAL_TICKS;
    use crate::rules::ParticleType::Red;
    use rand::SeedableRng;

    /// App over small worlds, quick enough to drive through a whole run.
    fn small_app(seed: u64) -> App {
        let surfaces = (0..WORLD_COUNT)
            .map(|_| BrailleCanvas::new(world_bounds(), 20, 10))
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        App {
            run: Run::with_population(surfaces, &[(Red, 8)], &mut rng),
        }
    }

    #[test]
    fn phase_follows_the_tick_schedule() {
        let mut app = small_app(1);
        assert_eq!(app.phase(), Phase::Warmup);
        for _ in 0..WARMUP_TICKS {
            app.tick();
        }
        assert_eq!(app.phase(), Phase::Sampling);
        while !app.run.is_finished() {
            app.tick();
        }
        assert_eq!(app.run.tick(), TOTAL_TICKS);
        assert_eq!(app.phase(), Phase::Done);
    }

    #[test]
    fn worlds_keep_drawing_through_a_resize() {
        let mut app = small_app(2);
        app.tick();
        assert!(app.run.worlds().iter().any(|w| w.surface.cells().count() > 0));
        app.resize(40, 20);
        assert!(app.run.worlds().iter().all(|w| w.surface.cells().count() == 0));
        app.tick();
        assert!(app.run.worlds().iter().any(|w| w.surface.cells().count() > 0));
    }
}
