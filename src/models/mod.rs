//! Entity model for near-Earth objects and their close approaches.
//!
//! The constructors in this module absorb the quirks of the NASA source data
//! (missing names, unknown diameters, tri-state hazard flags) so the rest of
//! the crate can work with normalized values. Unknown numeric fields are
//! stored as NaN; display code substitutes placeholder literals, writers emit
//! the raw stored values.

pub mod approach;
pub mod neo;
pub mod time;

pub use approach::*;
pub use neo::*;
pub use time::*;

use serde::{Deserialize, Serialize};

use crate::error::{NeoError, NeoResult};

/// Handle to a [`NearEarthObject`] stored in the database arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeoIndex(pub usize);

/// Handle to a [`CloseApproach`] stored in the database arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApproachIndex(pub usize);

impl std::fmt::Display for NeoIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ApproachIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a possibly-empty numeric source field.
///
/// Empty means unknown and maps to the NaN sentinel; anything non-empty must
/// parse as a float or the record is rejected.
pub(crate) fn parse_optional_f64(field: &'static str, raw: &str) -> NeoResult<f64> {
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| NeoError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}
