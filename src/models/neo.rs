//! Near-Earth object entity.

use std::fmt;

use serde::Serialize;

use crate::error::{NeoError, NeoResult};
use crate::models::{parse_optional_f64, ApproachIndex};

/// Designation used by the unlinked placeholder entity. A record with a
/// genuinely absent designation gets this sentinel rather than an empty
/// string, so the gap stays visible downstream.
pub const DESIGNATION_PLACEHOLDER: &str = "{fullname}";

/// Display literal substituted for an unknown diameter.
pub const DIAMETER_PLACEHOLDER: &str = "{diameter}";

/// A near-Earth object: one minor-planet or comet record.
///
/// Carries the primary designation (required, unique), the optional IAU name,
/// the diameter in kilometers (NaN when unknown), and the potentially-
/// hazardous flag. `approaches` holds handles to this object's close
/// approaches; it starts empty and is populated when a
/// [`NeoDatabase`](crate::db::NeoDatabase) links the two record sets.
#[derive(Debug, Clone, Serialize)]
pub struct NearEarthObject {
    pub designation: String,
    pub name: Option<String>,
    pub diameter: f64,
    pub hazardous: bool,
    pub approaches: Vec<ApproachIndex>,
}

impl NearEarthObject {
    /// Build an entity from raw catalog fields.
    ///
    /// Normalization rules:
    /// - empty `designation` falls back to [`DESIGNATION_PLACEHOLDER`]
    /// - empty `name` is stored as `None`
    /// - empty `diameter` is stored as NaN; non-numeric input is rejected
    /// - `hazardous` accepts exactly `Y`/`y` (true), `N`/`n`/empty (false);
    ///   any other token is rejected rather than defaulted
    pub fn new(designation: &str, name: &str, diameter: &str, hazardous: &str) -> NeoResult<Self> {
        let designation = if designation.is_empty() {
            DESIGNATION_PLACEHOLDER.to_string()
        } else {
            designation.to_string()
        };

        let name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };

        let diameter = parse_optional_f64("diameter", diameter)?;

        let hazardous = match hazardous {
            "Y" | "y" => true,
            "N" | "n" | "" => false,
            other => {
                return Err(NeoError::InvalidHazardFlag {
                    designation,
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            designation,
            name,
            diameter,
            hazardous,
            // Each instance gets its own vector; approaches are linked later
            // by the database.
            approaches: Vec::new(),
        })
    }

    /// The name when present and non-empty.
    ///
    /// The CSV writer backfills absent names to `Some("")`; that backfilled
    /// value still counts as absent here.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Full designation-plus-name form: `"433 (Eros)"`, or just the
    /// designation when there is no name.
    pub fn fullname(&self) -> String {
        match self.display_name() {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl Default for NearEarthObject {
    /// The unlinked placeholder entity a [`CloseApproach`] refers to before
    /// database linking.
    ///
    /// [`CloseApproach`]: crate::models::CloseApproach
    fn default() -> Self {
        Self {
            designation: DESIGNATION_PLACEHOLDER.to_string(),
            name: None,
            diameter: f64::NAN,
            hazardous: false,
            approaches: Vec::new(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diameter = if self.diameter.is_nan() {
            DIAMETER_PLACEHOLDER.to_string()
        } else {
            format!("{:.3}", self.diameter)
        };
        let hazard_phrase = if self.hazardous { "is" } else { "is not" };
        write!(
            f,
            "NEO {} has a diameter of {} km and {} potentially hazardous.",
            self.fullname(),
            diameter,
            hazard_phrase
        )
    }
}
