//! Binary `.lif` save files: the alive matrix plus the active rule variant.
//!
//! The format is fixed: DIM*DIM one-byte booleans in row-major order (row 0,
//! col 0 first), then a single one-byte boolean that is `true` for Life and
//! `false` for HighLife. No header, no version field, no compression.
//! Cell history (`ever_alive`) is intentionally not persisted.

use crate::grid::{Snapshot, DIM};
use crate::rules::RuleVariant;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Exact size of a well-formed save artifact
pub const ENCODED_LEN: usize = DIM * DIM + 1;

/// On-disk layout. Field order is the wire order.
#[derive(Serialize, Deserialize)]
struct SaveFile {
    cells: Snapshot,
    life_rule: bool,
}

/// Serialize a snapshot and rule selection to the fixed binary layout
pub fn encode(snapshot: &Snapshot, variant: RuleVariant) -> Result<Vec<u8>, SaveError> {
    let file = SaveFile {
        cells: snapshot.clone(),
        life_rule: variant == RuleVariant::Life,
    };
    Ok(bincode::serialize(&file)?)
}

/// Parse a save artifact back into a snapshot and rule selection.
///
/// Rejects input whose length differs from [`ENCODED_LEN`] or whose bytes
/// are not valid booleans; the caller's grid is never touched on failure.
pub fn decode(bytes: &[u8]) -> Result<(Snapshot, RuleVariant), SaveError> {
    if bytes.len() != ENCODED_LEN {
        return Err(SaveError::Corrupt(format!(
            "expected {} bytes, found {}",
            ENCODED_LEN,
            bytes.len()
        )));
    }

    let file: SaveFile = bincode::deserialize(bytes)?;
    let variant = if file.life_rule {
        RuleVariant::Life
    } else {
        RuleVariant::HighLife
    };

    Ok((file.cells, variant))
}

/// Write a save artifact to disk
pub fn save<P: AsRef<Path>>(
    path: P,
    snapshot: &Snapshot,
    variant: RuleVariant,
) -> Result<(), SaveError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&encode(snapshot, variant)?)?;
    writer.flush()?;
    Ok(())
}

/// Read and parse a save artifact from disk
pub fn load<P: AsRef<Path>>(path: P) -> Result<(Snapshot, RuleVariant), SaveError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    decode(&buffer)
}

/// Errors that can occur while saving or loading
#[derive(Debug)]
pub enum SaveError {
    /// Underlying read or write failure
    Io(std::io::Error),
    /// Input is truncated, oversized, or contains non-boolean bytes
    Corrupt(String),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Corrupt(msg) => write!(f, "corrupt save file: {}", msg),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<bincode::Error> for SaveError {
    fn from(e: bincode::Error) -> Self {
        Self::Corrupt(e.to_string())
    }
}
