//! Statistics tracking for the simulation.

use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Statistics snapshot for one generation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Generation counter at the time of the snapshot
    pub generation: u64,
    /// Currently live cells
    pub alive: usize,
    /// Cells that have been alive since the last clear
    pub ever_alive: usize,
    /// Cells born in the last step
    pub births: usize,
    /// Cells that died in the last step
    pub deaths: usize,
}

impl Stats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats from the current grid state
    pub fn update(&mut self, generation: u64, grid: &Grid, births: usize, deaths: usize) {
        self.generation = generation;
        self.alive = grid.alive_count();
        self.ever_alive = grid.ever_alive_count();
        self.births = births;
        self.deaths = deaths;
    }

    /// Format stats as a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "Gen:{:6} | Alive:{:4} | Ever:{:4} | Births:{:3} | Deaths:{:3}",
            self.generation, self.alive, self.ever_alive, self.births, self.deaths
        )
    }
}

/// Historical statistics tracker
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsHistory {
    /// All recorded stats snapshots
    pub snapshots: Vec<Stats>,
}

impl StatsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stats snapshot
    pub fn record(&mut self, stats: Stats) {
        self.snapshots.push(stats);
    }

    /// Get live-cell count over time
    pub fn alive_series(&self) -> Vec<(u64, usize)> {
        self.snapshots
            .iter()
            .map(|s| (s.generation, s.alive))
            .collect()
    }

    /// Save history to a JSON file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)
    }

    /// Load history from a JSON file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
