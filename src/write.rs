//! Serialize a stream of close approaches to CSV or JSON.
//!
//! Both writers take the handles produced by
//! [`NeoDatabase::query`](crate::db::NeoDatabase::query) and emit rows in
//! exactly that order; neither sorts nor deduplicates. Numeric fields are
//! written as stored, so an unknown value comes out as NaN text rather than a
//! display placeholder.
//!
//! The two writers treat an absent NEO name differently, and that difference
//! is part of the contract: the CSV writer backfills the name to an empty
//! string on the stored entity before writing the row (hence the `&mut`
//! receiver), while the JSON writer computes the empty string at
//! serialization time and leaves the entity untouched.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::db::NeoDatabase;
use crate::error::NeoResult;
use crate::models::{ApproachIndex, NearEarthObject};

/// CSV header, fixed order.
const CSV_FIELDNAMES: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Write the selected approaches to `path` as CSV.
///
/// One header row, then one row per handle in input order. The `designation`
/// column carries the approach's own designation field, not the linked NEO's.
pub fn write_to_csv(db: &mut NeoDatabase, results: &[ApproachIndex], path: &Path) -> NeoResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    writer.write_record(CSV_FIELDNAMES)?;

    for &index in results {
        let (time_str, distance, velocity, designation, neo_index) = {
            let approach = db.approach(index);
            (
                approach.time_str(),
                approach.distance,
                approach.velocity,
                approach.designation.clone(),
                approach.neo,
            )
        };

        let placeholder = NearEarthObject::default();
        let neo = match neo_index {
            Some(neo_index) => {
                let neo = db.neo_mut(neo_index);
                // Deliberate mutation during serialization: an absent name is
                // backfilled to the empty string on the entity itself.
                if neo.name.is_none() {
                    neo.name = Some(String::new());
                }
                &*neo
            }
            None => &placeholder,
        };

        writer.write_record([
            time_str,
            distance.to_string(),
            velocity.to_string(),
            designation,
            neo.name.clone().unwrap_or_default(),
            neo.diameter.to_string(),
            neo.hazardous.to_string(),
        ])?;
    }

    writer.flush()?;
    log::info!("wrote {} close approaches to {}", results.len(), path.display());
    Ok(())
}

/// Write the selected approaches to `path` as a JSON array.
///
/// 2-space indentation, trailing newline. Absent names serialize as `""`
/// without touching the entity. The whole array is built in memory first.
pub fn write_to_json(db: &NeoDatabase, results: &[ApproachIndex], path: &Path) -> NeoResult<()> {
    let placeholder = NearEarthObject::default();
    let mut data = Vec::with_capacity(results.len());

    for &index in results {
        let approach = db.approach(index);
        let neo = approach
            .neo
            .map(|i| db.neo(i))
            .unwrap_or(&placeholder);

        let mut neo_object = Map::new();
        neo_object.insert("designation".into(), json!(neo.designation));
        neo_object.insert(
            "name".into(),
            json!(neo.name.as_deref().unwrap_or_default()),
        );
        neo_object.insert("diameter_km".into(), json_number(neo.diameter));
        neo_object.insert("potentially_hazardous".into(), json!(neo.hazardous));

        let mut approach_object = Map::new();
        approach_object.insert("datetime_utc".into(), json!(approach.time_str()));
        approach_object.insert("distance_au".into(), json_number(approach.distance));
        approach_object.insert("velocity_km_s".into(), json_number(approach.velocity));
        approach_object.insert("neo".into(), Value::Object(neo_object));

        data.push(Value::Object(approach_object));
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &Value::Array(data))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::info!("wrote {} close approaches to {}", results.len(), path.display());
    Ok(())
}

/// JSON has no NaN or infinity; non-finite values fall back to their text
/// form, consistently for every numeric field.
fn json_number(value: f64) -> Value {
    if value.is_finite() {
        json!(value)
    } else {
        Value::String(value.to_string())
    }
}
