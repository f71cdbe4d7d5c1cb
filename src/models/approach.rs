//! Close-approach entity.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::NeoResult;
use crate::models::time::{cd_to_datetime, datetime_to_str};
use crate::models::{parse_optional_f64, NearEarthObject, NeoIndex};

/// Display literal substituted for an unknown approach time.
pub const TIME_PLACEHOLDER: &str = "{time_str}";

/// Display literal substituted for an unknown approach distance.
pub const DISTANCE_PLACEHOLDER: &str = "{distance}";

/// Display literal substituted for an unknown approach velocity.
pub const VELOCITY_PLACEHOLDER: &str = "{velocity}";

/// One close approach to Earth by an NEO.
///
/// Holds the approach time (naive, UTC semantics), the nominal approach
/// distance in astronomical units, and the relative velocity in km/s, with
/// NaN standing in for unknown numbers. `designation` identifies the
/// approaching object and is the join key used during linking; `neo` is a
/// non-owning handle into the database arena, `None` until linked. The
/// database owns both entities and the lifetime of the link.
#[derive(Debug, Clone, Serialize)]
pub struct CloseApproach {
    pub designation: String,
    pub time: Option<NaiveDateTime>,
    pub distance: f64,
    pub velocity: f64,
    pub neo: Option<NeoIndex>,
}

impl CloseApproach {
    /// Build an entity from raw close-approach table fields.
    ///
    /// An empty `time` is stored as `None`; a non-empty one must parse as a
    /// calendar date string. `distance` and `velocity` follow the usual
    /// empty-means-NaN rule.
    pub fn new(designation: &str, time: &str, distance: &str, velocity: &str) -> NeoResult<Self> {
        let time = if time.is_empty() {
            None
        } else {
            Some(cd_to_datetime(time)?)
        };

        Ok(Self {
            designation: designation.to_string(),
            time,
            distance: parse_optional_f64("distance", distance)?,
            velocity: parse_optional_f64("velocity", velocity)?,
            neo: None,
        })
    }

    /// Minute-precision approach time, or the [`TIME_PLACEHOLDER`] literal
    /// when the time is unknown.
    pub fn time_str(&self) -> String {
        match self.time {
            Some(t) => datetime_to_str(t),
            None => TIME_PLACEHOLDER.to_string(),
        }
    }

    /// Human-readable one-liner embedding the associated NEO's fullname.
    ///
    /// Pass `None` for an approach that has not been linked yet; the
    /// placeholder entity's fullname is used instead.
    pub fn describe(&self, neo: Option<&NearEarthObject>) -> String {
        let fullname = match neo {
            Some(neo) => neo.fullname(),
            None => NearEarthObject::default().fullname(),
        };
        let distance = if self.distance.is_nan() {
            DISTANCE_PLACEHOLDER.to_string()
        } else {
            format!("{:.2}", self.distance)
        };
        let velocity = if self.velocity.is_nan() {
            VELOCITY_PLACEHOLDER.to_string()
        } else {
            format!("{:.2}", self.velocity)
        };
        format!(
            "on '{}' {} approaches Earth at a distance of {} au and velocity of {} km/s",
            self.time_str(),
            fullname,
            distance,
            velocity
        )
    }
}
