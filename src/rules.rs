//! Transition rules: classic Life (B3/S23) and the HighLife variant (B36/S23).

use crate::grid::{Snapshot, DIM};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two supported rule sets. Exactly one is active at a time; switching
/// is an explicit caller action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleVariant {
    #[default]
    Life,
    HighLife,
}

impl RuleVariant {
    /// Does a live cell with `live_neighbors` survive into the next
    /// generation? Both variants survive on 2 or 3.
    #[inline]
    pub fn survives(self, live_neighbors: usize) -> bool {
        live_neighbors == 2 || live_neighbors == 3
    }

    /// Does a dead cell with `live_neighbors` come alive?
    #[inline]
    pub fn born(self, live_neighbors: usize) -> bool {
        match self {
            RuleVariant::Life => live_neighbors == 3,
            RuleVariant::HighLife => live_neighbors == 3 || live_neighbors == 6,
        }
    }
}

impl fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleVariant::Life => write!(f, "life"),
            RuleVariant::HighLife => write!(f, "highlife"),
        }
    }
}

impl FromStr for RuleVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "life" => Ok(RuleVariant::Life),
            "highlife" => Ok(RuleVariant::HighLife),
            other => Err(format!("unknown rule variant: {}", other)),
        }
    }
}

/// Compute the next generation from `current` under `variant`.
///
/// Every cell is evaluated against the same input snapshot, so no cell can
/// observe another cell's already-updated next value. This is a total
/// function: it never fails, for any snapshot and either variant.
pub fn next_generation(current: &Snapshot, variant: RuleVariant) -> Snapshot {
    let mut next = Snapshot::empty();
    for row in 0..DIM {
        for col in 0..DIM {
            let n = current.live_neighbors(row, col);
            let alive = if current.is_alive(row, col) {
                variant.survives(n)
            } else {
                variant.born(n)
            };
            next.set_alive(row, col, alive);
        }
    }
    next
}
