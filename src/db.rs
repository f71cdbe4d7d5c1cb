//! In-memory database linking NEOs to their close approaches.
//!
//! The database owns both entity arenas. Linking is performed once, at
//! construction: every approach whose designation matches a known NEO gets
//! its `neo` handle set, and the NEO's `approaches` list gains the approach's
//! handle. Entities are addressed by index handles afterwards; neither entity
//! owns the other.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{ApproachIndex, CloseApproach, NearEarthObject, NeoIndex};

/// Query criteria for selecting close approaches.
///
/// All set criteria must hold for an approach to match. Unknown (NaN) values
/// never satisfy a numeric bound, and an approach without a time never
/// matches a date criterion. `limit` of `None` or `Some(0)` means unlimited.
#[derive(Debug, Clone, Default)]
pub struct ApproachQuery {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    pub min_velocity: Option<f64>,
    pub max_velocity: Option<f64>,
    pub min_diameter: Option<f64>,
    pub max_diameter: Option<f64>,
    pub hazardous: Option<bool>,
    pub limit: Option<usize>,
}

/// The linked collection of NEOs and close approaches.
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoIndex>,
    by_name: HashMap<String, NeoIndex>,
}

impl NeoDatabase {
    /// Take ownership of both record sets and cross-link them.
    ///
    /// Approaches whose designation matches no NEO are kept but stay
    /// unlinked; each one is logged, since it usually means the two input
    /// files are out of sync.
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();
        for (i, neo) in neos.iter().enumerate() {
            by_designation.insert(neo.designation.clone(), NeoIndex(i));
            if let Some(name) = neo.display_name() {
                by_name.insert(name.to_string(), NeoIndex(i));
            }
        }

        let mut unlinked = 0usize;
        for (i, approach) in approaches.iter_mut().enumerate() {
            match by_designation.get(&approach.designation) {
                Some(&neo_index) => {
                    approach.neo = Some(neo_index);
                    neos[neo_index.0].approaches.push(ApproachIndex(i));
                }
                None => {
                    unlinked += 1;
                    log::warn!(
                        "close approach of {:?} matches no known NEO designation",
                        approach.designation
                    );
                }
            }
        }

        log::info!(
            "linked {} close approaches to {} NEOs ({} unlinked)",
            approaches.len() - unlinked,
            neos.len(),
            unlinked
        );

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
        }
    }

    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    pub fn neo(&self, index: NeoIndex) -> &NearEarthObject {
        &self.neos[index.0]
    }

    pub(crate) fn neo_mut(&mut self, index: NeoIndex) -> &mut NearEarthObject {
        &mut self.neos[index.0]
    }

    pub fn approach(&self, index: ApproachIndex) -> &CloseApproach {
        &self.approaches[index.0]
    }

    /// Look up an NEO by its primary designation.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation.get(designation).map(|&i| self.neo(i))
    }

    /// Look up an NEO by its IAU name.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|&i| self.neo(i))
    }

    /// Handles of all approaches in insertion order.
    pub fn all_approaches(&self) -> Vec<ApproachIndex> {
        (0..self.approaches.len()).map(ApproachIndex).collect()
    }

    /// Select approaches matching every criterion of `query`, preserving
    /// insertion order. No sorting or deduplication is performed.
    pub fn query(&self, query: &ApproachQuery) -> Vec<ApproachIndex> {
        let mut matches: Vec<ApproachIndex> = self
            .approaches
            .iter()
            .enumerate()
            .filter(|(_, approach)| self.matches(approach, query))
            .map(|(i, _)| ApproachIndex(i))
            .collect();

        if let Some(limit) = query.limit {
            if limit > 0 {
                matches.truncate(limit);
            }
        }
        matches
    }

    /// Human-readable form of one approach, resolved against the arena.
    pub fn describe_approach(&self, index: ApproachIndex) -> String {
        let approach = self.approach(index);
        approach.describe(approach.neo.map(|i| self.neo(i)))
    }

    fn matches(&self, approach: &CloseApproach, query: &ApproachQuery) -> bool {
        let date = approach.time.map(|t| t.date());

        if let Some(wanted) = query.date {
            if date != Some(wanted) {
                return false;
            }
        }
        if let Some(start) = query.start_date {
            match date {
                Some(d) if d >= start => {}
                _ => return false,
            }
        }
        if let Some(end) = query.end_date {
            match date {
                Some(d) if d <= end => {}
                _ => return false,
            }
        }

        // NaN fails every comparison, so unknown values drop out of any
        // bounded query on their own.
        if let Some(min) = query.min_distance {
            if !(approach.distance >= min) {
                return false;
            }
        }
        if let Some(max) = query.max_distance {
            if !(approach.distance <= max) {
                return false;
            }
        }
        if let Some(min) = query.min_velocity {
            if !(approach.velocity >= min) {
                return false;
            }
        }
        if let Some(max) = query.max_velocity {
            if !(approach.velocity <= max) {
                return false;
            }
        }

        let neo = approach.neo.map(|i| self.neo(i));
        if let Some(min) = query.min_diameter {
            match neo {
                Some(neo) if neo.diameter >= min => {}
                _ => return false,
            }
        }
        if let Some(max) = query.max_diameter {
            match neo {
                Some(neo) if neo.diameter <= max => {}
                _ => return false,
            }
        }
        if let Some(hazardous) = query.hazardous {
            match neo {
                Some(neo) if neo.hazardous == hazardous => {}
                _ => return false,
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NeoResult;

    fn sample_database() -> NeoResult<NeoDatabase> {
        let neos = vec![
            NearEarthObject::new("433", "Eros", "16.84", "N")?,
            NearEarthObject::new("2020 AB", "", "", "Y")?,
        ];
        let approaches = vec![
            CloseApproach::new("433", "2020-Jan-01 12:30", "0.05", "5.32")?,
            CloseApproach::new("2020 AB", "2020-Mar-15 08:00", "0.30", "12.00")?,
            CloseApproach::new("433", "2021-Jun-10 00:00", "", "")?,
            CloseApproach::new("99999", "2020-Jan-02 00:00", "0.10", "1.00")?,
        ];
        Ok(NeoDatabase::new(neos, approaches))
    }

    #[test]
    fn test_linking_populates_both_sides() {
        let db = sample_database().unwrap();
        let eros = db.get_neo_by_designation("433").unwrap();
        assert_eq!(eros.approaches, vec![ApproachIndex(0), ApproachIndex(2)]);
        assert_eq!(db.approach(ApproachIndex(0)).neo, Some(NeoIndex(0)));
        assert_eq!(db.approach(ApproachIndex(1)).neo, Some(NeoIndex(1)));
    }

    #[test]
    fn test_unknown_designation_stays_unlinked() {
        let db = sample_database().unwrap();
        assert_eq!(db.approach(ApproachIndex(3)).neo, None);
    }

    #[test]
    fn test_lookup_by_name() {
        let db = sample_database().unwrap();
        assert_eq!(db.get_neo_by_name("Eros").unwrap().designation, "433");
        assert!(db.get_neo_by_name("Ceres").is_none());
    }

    #[test]
    fn test_query_without_criteria_returns_everything_in_order() {
        let db = sample_database().unwrap();
        assert_eq!(
            db.query(&ApproachQuery::default()),
            vec![
                ApproachIndex(0),
                ApproachIndex(1),
                ApproachIndex(2),
                ApproachIndex(3)
            ]
        );
    }

    #[test]
    fn test_query_by_exact_date() {
        let db = sample_database().unwrap();
        let query = ApproachQuery {
            date: NaiveDate::from_ymd_opt(2020, 1, 1),
            ..Default::default()
        };
        assert_eq!(db.query(&query), vec![ApproachIndex(0)]);
    }

    #[test]
    fn test_query_by_date_range() {
        let db = sample_database().unwrap();
        let query = ApproachQuery {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2020, 12, 31),
            ..Default::default()
        };
        assert_eq!(
            db.query(&query),
            vec![ApproachIndex(0), ApproachIndex(1), ApproachIndex(3)]
        );
    }

    #[test]
    fn test_nan_never_matches_numeric_bounds() {
        let db = sample_database().unwrap();
        // Approach 2 has NaN distance and velocity; it must not appear in
        // either direction of a bounded query.
        let query = ApproachQuery {
            max_distance: Some(1.0),
            ..Default::default()
        };
        assert!(!db.query(&query).contains(&ApproachIndex(2)));
        let query = ApproachQuery {
            min_distance: Some(0.0),
            ..Default::default()
        };
        assert!(!db.query(&query).contains(&ApproachIndex(2)));
    }

    #[test]
    fn test_query_by_hazard_flag() {
        let db = sample_database().unwrap();
        let query = ApproachQuery {
            hazardous: Some(true),
            ..Default::default()
        };
        assert_eq!(db.query(&query), vec![ApproachIndex(1)]);
    }

    #[test]
    fn test_criteria_compose_conjunctively() {
        let db = sample_database().unwrap();
        let query = ApproachQuery {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            max_distance: Some(0.2),
            hazardous: Some(false),
            ..Default::default()
        };
        assert_eq!(db.query(&query), vec![ApproachIndex(0)]);
    }

    #[test]
    fn test_limit_truncates_and_zero_means_unlimited() {
        let db = sample_database().unwrap();
        let query = ApproachQuery {
            limit: Some(2),
            ..Default::default()
        };
        assert_eq!(db.query(&query).len(), 2);
        let query = ApproachQuery {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(db.query(&query).len(), 4);
    }

    #[test]
    fn test_describe_resolves_linked_neo() {
        let db = sample_database().unwrap();
        let text = db.describe_approach(ApproachIndex(0));
        assert!(text.contains("433 (Eros)"));
        assert!(text.contains("2020-01-01 12:30"));
    }

    #[test]
    fn test_describe_unlinked_uses_placeholder_fullname() {
        let db = sample_database().unwrap();
        let text = db.describe_approach(ApproachIndex(3));
        assert!(text.contains("{fullname}"));
    }
}
