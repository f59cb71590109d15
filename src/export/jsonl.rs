use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::dataset::TimeSeriesDataset;

/// Write the table as JSONL: one JSON object per year row, every column
/// keyed by name.
pub fn write_jsonl(dataset: &TimeSeriesDataset, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for row in dataset.rows() {
        serde_json::to_writer(&mut writer, &row)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
