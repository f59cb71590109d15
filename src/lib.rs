pub mod calendar;
pub mod dataset;
pub mod export;
pub mod generate;
pub mod indicators;
pub mod noise;
pub mod overlay;
pub mod profile;
pub mod report;

pub use dataset::{DatasetRow, Indicator, TimeSeriesDataset};
pub use generate::{END_YEAR, START_YEAR, build_dataset, build_dataset_default};
pub use noise::{GaussianNoise, NoiseSource, ZeroNoise};
pub use profile::TerritoryProfile;
