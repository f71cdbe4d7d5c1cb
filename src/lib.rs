//! # NEO close-approach core
//!
//! In-memory model of near-Earth objects (NEOs) and their close approaches
//! to Earth, built from NASA's published data sets, with serialization of
//! selected approaches to CSV and JSON.
//!
//! The NASA files are quirky: names are often missing, diameters frequently
//! unknown, hazard flags tri-state. The entity constructors normalize all of
//! that up front so downstream code sees one representation per field —
//! `Option` for missing names and times, NaN for unknown numbers.
//!
//! ## Pipeline
//!
//! Data flows one direction:
//!
//! 1. [`extract`] reads the catalog CSV and close-approach JSON into
//!    entities.
//! 2. [`db::NeoDatabase`] takes ownership of both record sets and
//!    cross-links them by designation.
//! 3. [`db::NeoDatabase::query`] selects approaches by date, distance,
//!    velocity, diameter, and hazard criteria.
//! 4. [`write`] serializes the selection to a CSV or JSON file.
//!
//! Everything is synchronous and single-threaded; data sets are small and
//! processed in a single pass.

pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod write;

pub use db::{ApproachQuery, NeoDatabase};
pub use error::{NeoError, NeoResult};
pub use models::{ApproachIndex, CloseApproach, NearEarthObject, NeoIndex};
pub use write::{write_to_csv, write_to_json};
