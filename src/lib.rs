//! # lifegrid
//!
//! Conway's Game of Life and the HighLife variant on a fixed 32x32
//! toroidal grid.
//!
//! ## Features
//!
//! - **Toroidal**: the grid edges wrap, so neighbor lookups never go out
//!   of bounds
//! - **Synchronous**: each generation is computed from a single immutable
//!   snapshot of the previous one
//! - **Three-state display**: cells are alive, previously alive, or never
//!   alive since the last clear
//! - **Persistent**: grids save to a compact binary `.lif` artifact
//! - **Reproducible**: seeded random population
//!
//! ## Quick Start
//!
//! ```rust
//! use lifegrid::{RuleVariant, Simulation};
//!
//! let mut sim = Simulation::new_with_seed(42);
//!
//! // A glider, stepped manually
//! for (row, col) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
//!     sim.toggle_cell(row, col);
//! }
//! sim.step();
//! assert_eq!(sim.alive_count(), 5);
//!
//! // Or let the animation timer drive it
//! sim.play(10);
//! sim.tick();
//! ```
//!
//! ## Save files
//!
//! ```rust,no_run
//! use lifegrid::Simulation;
//!
//! let mut sim = Simulation::new();
//! sim.randomize();
//! sim.save_to("pattern.lif").unwrap();
//!
//! let mut other = Simulation::new();
//! other.load_from("pattern.lif").unwrap();
//! ```

pub mod cell;
pub mod config;
pub mod grid;
pub mod rules;
pub mod savefile;
pub mod simulation;
pub mod stats;

// Re-export main types
pub use cell::{Cell, DisplayCategory};
pub use config::Config;
pub use grid::{Grid, Snapshot, DIM};
pub use rules::{next_generation, RuleVariant};
pub use savefile::SaveError;
pub use simulation::{RunState, Simulation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
