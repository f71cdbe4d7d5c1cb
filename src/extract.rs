//! Load NEO and close-approach records from the NASA data files.
//!
//! The NEO catalog is a wide CSV of which only four columns matter here
//! (`pdes`, `name`, `diameter`, `pha`); the close-approach file is JSON in
//! the JPL SBDB table layout, a `fields` list naming the columns and a
//! `data` list of rows. Both loaders feed raw string fields through the
//! entity constructors, which apply all normalization and validation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{CloseApproach, NearEarthObject};

/// Catalog columns consumed from the NEO CSV. Every other column is ignored.
#[derive(Debug, Deserialize)]
struct NeoRecord {
    #[serde(default)]
    pdes: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    diameter: String,
    #[serde(default)]
    pha: String,
}

/// JPL SBDB close-approach table: column names plus rows of string cells.
#[derive(Debug, Deserialize)]
struct ApproachTable {
    fields: Vec<String>,
    data: Vec<Vec<Option<String>>>,
}

impl ApproachTable {
    fn column(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|f| f == name)
            .with_context(|| format!("close-approach data has no {:?} column", name))
    }
}

/// Load the NEO catalog from a CSV file.
pub fn load_neos(path: &Path) -> Result<Vec<NearEarthObject>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open NEO catalog {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut neos = Vec::new();
    for (row, record) in reader.deserialize::<NeoRecord>().enumerate() {
        let record = record.with_context(|| format!("malformed catalog row {}", row + 1))?;
        let neo = NearEarthObject::new(&record.pdes, &record.name, &record.diameter, &record.pha)
            .with_context(|| format!("invalid catalog row {}", row + 1))?;
        neos.push(neo);
    }

    log::info!("loaded {} NEOs from {}", neos.len(), path.display());
    Ok(neos)
}

/// Load the close-approach table from a JSON file.
pub fn load_approaches(path: &Path) -> Result<Vec<CloseApproach>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open close-approach data {}", path.display()))?;
    let table: ApproachTable = serde_json::from_reader(BufReader::new(file))
        .context("failed to parse close-approach JSON")?;

    let des = table.column("des")?;
    let cd = table.column("cd")?;
    let dist = table.column("dist")?;
    let v_rel = table.column("v_rel")?;

    let cell = |row: &[Option<String>], idx: usize| -> String {
        row.get(idx).and_then(|v| v.clone()).unwrap_or_default()
    };

    let mut approaches = Vec::with_capacity(table.data.len());
    for (i, row) in table.data.iter().enumerate() {
        let approach = CloseApproach::new(
            &cell(row, des),
            &cell(row, cd),
            &cell(row, dist),
            &cell(row, v_rel),
        )
        .with_context(|| format!("invalid close-approach row {}", i + 1))?;
        approaches.push(approach);
    }

    log::info!(
        "loaded {} close approaches from {}",
        approaches.len(),
        path.display()
    );
    Ok(approaches)
}
