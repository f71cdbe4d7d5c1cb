//! End-to-end pipeline: extract from the NASA file formats, link, query,
//! and serialize.

use std::fs::{self, File};
use std::io::Write;

use chrono::NaiveDate;
use neo_rust::{extract, write_to_csv, write_to_json, ApproachQuery, NeoDatabase};

const NEO_CSV: &str = "\
id,spkid,full_name,pdes,name,neo,pha,H,diameter,albedo
a0000433,2000433,433 Eros (A898 PA),433,Eros,Y,N,10.4,16.84,0.25
a0002101,2002101,2101 Adonis (1936 CA),2101,Adonis,Y,Y,18.8,0.60,
bK20A00B,54016476,(2020 AB),2020 AB,,Y,,20.6,,
";

const CAD_JSON: &str = r#"{
    "signature": {"source": "NASA/JPL SBDB Close Approach Data API", "version": "1.1"},
    "count": "4",
    "fields": ["des", "orbit_id", "jd", "cd", "dist", "v_rel", "v_inf"],
    "data": [
        ["433", "659", "2415021.0", "1900-Jan-01 00:11", "0.0921", "5.28", "5.28"],
        ["2101", "41", "2458870.1", "2020-Jan-21 13:01", "0.0554", "6.12", "6.11"],
        ["2020 AB", "1", "2458864.4", "2020-Jan-15 21:42", "", "", null],
        ["2101", "41", "2459594.7", "2022-Jan-15 04:50", "0.1201", "7.04", "7.03"]
    ]
}"#;

fn fixture_database(dir: &tempfile::TempDir) -> NeoDatabase {
    let neo_path = dir.path().join("neos.csv");
    File::create(&neo_path)
        .unwrap()
        .write_all(NEO_CSV.as_bytes())
        .unwrap();
    let cad_path = dir.path().join("cad.json");
    File::create(&cad_path)
        .unwrap()
        .write_all(CAD_JSON.as_bytes())
        .unwrap();

    let neos = extract::load_neos(&neo_path).unwrap();
    let approaches = extract::load_approaches(&cad_path).unwrap();
    NeoDatabase::new(neos, approaches)
}

#[test]
fn test_extract_and_link() {
    let dir = tempfile::tempdir().unwrap();
    let db = fixture_database(&dir);

    assert_eq!(db.neos().len(), 3);
    assert_eq!(db.approaches().len(), 4);

    let adonis = db.get_neo_by_name("Adonis").unwrap();
    assert_eq!(adonis.designation, "2101");
    assert!(adonis.hazardous);
    assert_eq!(adonis.approaches.len(), 2);

    let anonymous = db.get_neo_by_designation("2020 AB").unwrap();
    assert_eq!(anonymous.name, None);
    assert!(anonymous.diameter.is_nan());
    assert_eq!(anonymous.fullname(), "2020 AB");
}

#[test]
fn test_query_then_write_csv() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = fixture_database(&dir);

    let query = ApproachQuery {
        start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2020, 12, 31),
        ..Default::default()
    };
    let results = db.query(&query);
    assert_eq!(results.len(), 2);

    let out = dir.path().join("results.csv");
    write_to_csv(&mut db, &results, &out).unwrap();

    let contents = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "2020-01-21 13:01,0.0554,6.12,2101,Adonis,0.6,true");
    assert_eq!(lines[2], "2020-01-15 21:42,NaN,NaN,2020 AB,,NaN,false");
}

#[test]
fn test_query_hazardous_with_limit_then_write_json() {
    let dir = tempfile::tempdir().unwrap();
    let db = fixture_database(&dir);

    let query = ApproachQuery {
        hazardous: Some(true),
        limit: Some(1),
        ..Default::default()
    };
    let results = db.query(&query);
    assert_eq!(results.len(), 1);

    let out = dir.path().join("results.json");
    write_to_json(&db, &results, &out).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["datetime_utc"], "2020-01-21 13:01");
    assert_eq!(array[0]["neo"]["designation"], "2101");
    assert_eq!(array[0]["neo"]["potentially_hazardous"], true);
}

#[test]
fn test_diameter_query_excludes_unknown_diameters() {
    let dir = tempfile::tempdir().unwrap();
    let db = fixture_database(&dir);

    let query = ApproachQuery {
        min_diameter: Some(0.5),
        ..Default::default()
    };
    let results = db.query(&query);
    // 2020 AB's diameter is unknown; only Eros and Adonis approaches remain.
    assert_eq!(results.len(), 3);
    for &index in &results {
        assert_ne!(db.approach(index).designation, "2020 AB");
    }
}
