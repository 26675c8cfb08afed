//! Simulation controller: run-state machine and generation stepping.

use crate::grid::{Grid, DIM};
use crate::rules::{next_generation, RuleVariant};
use crate::savefile::{self, SaveError};
use crate::stats::Stats;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use std::time::Duration;

/// Upper bound of the animation rate scale
pub const MAX_RATE: u8 = 100;

/// Whether the animation timer is driving the simulation, and how fast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running {
        /// Generations per second, 1 to [`MAX_RATE`]. 0 keeps the state
        /// machine in `Running` but the timer never fires.
        rate: u8,
    },
}

/// The simulation controller. Owns the grid and the active rule, steps
/// generations, and orchestrates persistence. All mutation happens on the
/// caller's thread; a step either fully commits the new generation or, on
/// error, leaves the grid unchanged.
pub struct Simulation {
    grid: Grid,
    rule: RuleVariant,
    state: RunState,
    generation: u64,
    stats: Stats,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
}

impl Simulation {
    /// Create a stopped simulation with an empty grid
    pub fn new() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(seed)
    }

    /// Create a simulation with a specific seed for reproducible
    /// randomization
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            grid: Grid::new(),
            rule: RuleVariant::default(),
            state: RunState::Stopped,
            generation: 0,
            stats: Stats::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Advance one generation: snapshot, transform, commit
    fn advance(&mut self) {
        let current = self.grid.snapshot();
        let next = next_generation(&current, self.rule);

        let mut births = 0;
        let mut deaths = 0;
        for row in 0..DIM {
            for col in 0..DIM {
                match (current.is_alive(row, col), next.is_alive(row, col)) {
                    (false, true) => births += 1,
                    (true, false) => deaths += 1,
                    _ => {}
                }
            }
        }

        self.grid.apply(&next);
        self.generation += 1;
        self.stats.update(self.generation, &self.grid, births, deaths);
    }

    /// Advance a single generation. Only honored while stopped; the manual
    /// step action is disabled while the timer is driving.
    pub fn step(&mut self) {
        if self.state != RunState::Stopped {
            log::debug!("manual step ignored while running");
            return;
        }
        self.advance();
    }

    /// Start the animation at the given rate (clamped to 0..=100)
    pub fn play(&mut self, rate: u8) {
        let rate = rate.min(MAX_RATE);
        log::debug!("running at rate {}", rate);
        self.state = RunState::Running { rate };
    }

    /// Stop the animation
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// One timer firing. Advances a generation while running; if that
    /// leaves every cell dead, the animation stops itself without caller
    /// intervention. Ignored while stopped.
    pub fn tick(&mut self) {
        if let RunState::Running { .. } = self.state {
            self.advance();
            if self.grid.alive_count() == 0 {
                log::debug!("every cell dead, stopping at generation {}", self.generation);
                self.state = RunState::Stopped;
            }
        }
    }

    /// Time between timer firings for the current state. `None` while
    /// stopped or at rate 0.
    pub fn tick_interval(&self) -> Option<Duration> {
        match self.state {
            RunState::Running { rate } if rate > 0 => {
                Some(Duration::from_millis(1000 / u64::from(rate)))
            }
            _ => None,
        }
    }

    /// Flip a single cell in response to user input. Only honored while
    /// stopped; the grid is click-driven only between runs.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.state != RunState::Stopped {
            log::debug!("toggle ignored while running");
            return;
        }
        self.grid.toggle(row, col);
        self.stats.update(self.generation, &self.grid, 0, 0);
    }

    /// Clear every cell back to never-alive, stop the animation, and reset
    /// the generation counter
    pub fn clear(&mut self) {
        self.state = RunState::Stopped;
        self.grid.clear();
        self.generation = 0;
        self.stats.update(0, &self.grid, 0, 0);
    }

    /// Clear the grid, set each cell alive with probability 0.5, then
    /// immediately advance one generation. The committed state is the
    /// successor of the random pattern, not the pattern itself.
    pub fn randomize(&mut self) {
        self.clear();
        for row in 0..DIM {
            for col in 0..DIM {
                let alive = self.rng.gen_bool(0.5);
                self.grid.set(row, col, alive, alive);
            }
        }
        self.advance();
    }

    /// Switch the active rule variant
    pub fn set_rule(&mut self, rule: RuleVariant) {
        self.rule = rule;
    }

    /// Save the current alive matrix and rule selection. Stops the
    /// animation first.
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SaveError> {
        self.stop();
        savefile::save(&path, &self.grid.snapshot(), self.rule)?;
        log::info!("saved grid to {}", path.as_ref().display());
        Ok(())
    }

    /// Load a save artifact: adopt its rule, reset cell history, then run
    /// one generation seeded from the stored matrix and commit that result.
    /// The stored snapshot itself is never displayed verbatim. On failure
    /// the grid is left untouched.
    pub fn load_from<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SaveError> {
        self.stop();
        let (loaded, rule) = savefile::load(&path)?;

        self.rule = rule;
        self.grid.clear();
        let next = next_generation(&loaded, rule);

        let mut births = 0;
        let mut deaths = 0;
        for row in 0..DIM {
            for col in 0..DIM {
                match (loaded.is_alive(row, col), next.is_alive(row, col)) {
                    (false, true) => births += 1,
                    (true, false) => deaths += 1,
                    _ => {}
                }
            }
        }

        self.grid.apply(&next);
        self.generation = 1;
        self.stats.update(self.generation, &self.grid, births, deaths);
        log::info!(
            "loaded grid from {} (rule {}, {} alive)",
            path.as_ref().display(),
            rule,
            self.grid.alive_count()
        );
        Ok(())
    }

    /// The current grid, for rendering
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active rule variant
    pub fn rule(&self) -> RuleVariant {
        self.rule
    }

    /// Current run state
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// Generations advanced since the last clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of currently live cells
    pub fn alive_count(&self) -> usize {
        self.grid.alive_count()
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.grid.alive_count() == 0
    }

    /// Stats for the latest generation
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Seed used for randomization, for reproducibility
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
