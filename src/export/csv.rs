use std::path::Path;

use crate::dataset::{Indicator, TimeSeriesDataset};
use crate::generate::{END_YEAR, START_YEAR};

/// Default output file name for a territory's table.
pub fn default_file_name(territory: &str) -> String {
    format!("{territory}_real_estate_{START_YEAR}_{END_YEAR}.csv")
}

/// Write the table as a delimited file: a header row, then one row per year,
/// columns in the fixed output order.
pub fn write_csv(dataset: &TimeSeriesDataset, path: &Path) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["year".to_string()];
    header.extend(Indicator::ALL.iter().map(|i| i.column_name().to_string()));
    writer.write_record(&header)?;

    for (row, &year) in dataset.years().iter().enumerate() {
        let mut record = vec![year.to_string()];
        record.extend(
            Indicator::ALL
                .iter()
                .map(|&indicator| dataset.value(indicator, row).to_string()),
        );
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
