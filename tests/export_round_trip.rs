use std::fs;

use immo_gen::export::{csv as csv_export, jsonl};
use immo_gen::noise::GaussianNoise;
use immo_gen::{Indicator, build_dataset};

#[test]
fn csv_export_preserves_schema_and_rows() {
    let mut noise = GaussianNoise::seeded(5);
    let dataset = build_dataset("Guadeloupe", &mut noise);

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(csv_export::default_file_name("Guadeloupe"));
    csv_export::write_csv(&dataset, &path).expect("csv export");

    let mut reader = csv::Reader::from_path(&path).expect("csv read");

    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.len(), 17);
    assert_eq!(&headers[0], "year");
    for (pos, indicator) in Indicator::ALL.iter().enumerate() {
        assert_eq!(&headers[pos + 1], indicator.column_name());
    }

    let records: Vec<csv::StringRecord> =
        reader.records().map(|r| r.expect("record")).collect();
    assert_eq!(records.len(), 24);
    assert_eq!(&records[0][0], "2002");
    assert_eq!(&records[23][0], "2025");

    let first_price: f64 = records[0][1].parse().expect("numeric house price");
    assert!(first_price.is_finite() && first_price > 0.0);
}

#[test]
fn jsonl_export_writes_one_object_per_year() {
    let mut noise = GaussianNoise::seeded(5);
    let dataset = build_dataset("Mayotte", &mut noise);

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("mayotte.jsonl");
    jsonl::write_jsonl(&dataset, &path).expect("jsonl export");

    let content = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 24);

    let first: serde_json::Value = serde_json::from_str(lines[0]).expect("valid json");
    assert_eq!(first["year"], 2002);
    assert!(first["house_price_sqm"].is_f64());
    assert!(first["rent_to_income_pct"].is_f64());

    let last: serde_json::Value = serde_json::from_str(lines[23]).expect("valid json");
    assert_eq!(last["year"], 2025);
}
