use std::collections::BTreeMap;

use serde::Serialize;

/// Named indicator columns, declared in the fixed output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Indicator {
    HousePriceSqm,
    ApartmentPriceSqm,
    HouseRentSqm,
    ApartmentRentSqm,
    Transactions,
    SellingDays,
    VacancyRate,
    MedianIncome,
    MortgageRate,
    Unemployment,
    IncomeYearsHouse,
    IncomeYearsApartment,
    RentToIncome,
    BuildingPermits,
    ForeignInvestment,
    RentalInvestment,
}

impl Indicator {
    /// Every column, in the fixed output order.
    pub const ALL: [Indicator; 16] = [
        Indicator::HousePriceSqm,
        Indicator::ApartmentPriceSqm,
        Indicator::HouseRentSqm,
        Indicator::ApartmentRentSqm,
        Indicator::Transactions,
        Indicator::SellingDays,
        Indicator::VacancyRate,
        Indicator::MedianIncome,
        Indicator::MortgageRate,
        Indicator::Unemployment,
        Indicator::IncomeYearsHouse,
        Indicator::IncomeYearsApartment,
        Indicator::RentToIncome,
        Indicator::BuildingPermits,
        Indicator::ForeignInvestment,
        Indicator::RentalInvestment,
    ];

    /// Stable column name used by every downstream consumer.
    pub fn column_name(self) -> &'static str {
        match self {
            Indicator::HousePriceSqm => "house_price_sqm",
            Indicator::ApartmentPriceSqm => "apartment_price_sqm",
            Indicator::HouseRentSqm => "house_rent_sqm",
            Indicator::ApartmentRentSqm => "apartment_rent_sqm",
            Indicator::Transactions => "transactions",
            Indicator::SellingDays => "avg_selling_days",
            Indicator::VacancyRate => "rental_vacancy_pct",
            Indicator::MedianIncome => "median_income",
            Indicator::MortgageRate => "mortgage_rate_pct",
            Indicator::Unemployment => "unemployment_pct",
            Indicator::IncomeYearsHouse => "income_years_house",
            Indicator::IncomeYearsApartment => "income_years_apartment",
            Indicator::RentToIncome => "rent_to_income_pct",
            Indicator::BuildingPermits => "building_permits",
            Indicator::ForeignInvestment => "foreign_investment_meur",
            Indicator::RentalInvestment => "rental_investment_meur",
        }
    }
}

/// The finished annual table: one row per year, one column per indicator.
///
/// Owned by the assembler while columns are inserted; read-only afterwards.
#[derive(Debug, Clone)]
pub struct TimeSeriesDataset {
    territory: String,
    years: Vec<i32>,
    columns: BTreeMap<Indicator, Vec<f64>>,
}

/// Borrowed single-year view, serialized with one field per column.
#[derive(Debug, Serialize)]
pub struct DatasetRow {
    pub year: i32,
    #[serde(flatten)]
    pub values: BTreeMap<&'static str, f64>,
}

impl TimeSeriesDataset {
    pub(crate) fn new(territory: &str, years: Vec<i32>) -> Self {
        Self { territory: territory.to_string(), years, columns: BTreeMap::new() }
    }

    pub(crate) fn insert_column(&mut self, indicator: Indicator, values: Vec<f64>) {
        debug_assert_eq!(
            values.len(),
            self.years.len(),
            "column {} must carry one value per year",
            indicator.column_name()
        );
        self.columns.insert(indicator, values);
    }

    pub(crate) fn column_mut(&mut self, indicator: Indicator) -> &mut [f64] {
        self.columns
            .get_mut(&indicator)
            .expect("column missing from assembled table")
    }

    /// Territory identifier the table was built for.
    pub fn territory(&self) -> &str {
        &self.territory
    }

    /// Year column, strictly increasing.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Number of year rows.
    pub fn row_count(&self) -> usize {
        self.years.len()
    }

    /// One indicator column, aligned with [`TimeSeriesDataset::years`].
    pub fn column(&self, indicator: Indicator) -> &[f64] {
        self.columns
            .get(&indicator)
            .expect("column missing from assembled table")
    }

    /// Value of one indicator at one year row.
    pub fn value(&self, indicator: Indicator, row: usize) -> f64 {
        self.column(indicator)[row]
    }

    /// Iterate year rows in order, each carrying every column by name.
    pub fn rows(&self) -> impl Iterator<Item = DatasetRow> + '_ {
        self.years.iter().enumerate().map(|(row, &year)| DatasetRow {
            year,
            values: Indicator::ALL
                .iter()
                .map(|&indicator| (indicator.column_name(), self.column(indicator)[row]))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> TimeSeriesDataset {
        let mut dataset = TimeSeriesDataset::new("default", vec![2002, 2003]);
        for indicator in Indicator::ALL {
            dataset.insert_column(indicator, vec![1.0, 2.0]);
        }
        dataset
    }

    #[test]
    fn all_lists_every_column_once() {
        assert_eq!(Indicator::ALL.len(), 16);
        for (i, indicator) in Indicator::ALL.iter().enumerate() {
            assert!(
                !Indicator::ALL[i + 1..].contains(indicator),
                "{} listed twice",
                indicator.column_name()
            );
        }
    }

    #[test]
    fn column_names_are_unique() {
        let names: Vec<&str> = Indicator::ALL.iter().map(|i| i.column_name()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate column name {name}");
        }
    }

    #[test]
    fn rows_expose_every_column() {
        let dataset = sample_dataset();
        let rows: Vec<DatasetRow> = dataset.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2002);
        assert_eq!(rows[0].values.len(), 16);
        assert_eq!(rows[1].values["house_price_sqm"], 2.0);
    }

    #[test]
    fn value_reads_by_row() {
        let dataset = sample_dataset();
        assert_eq!(dataset.value(Indicator::MedianIncome, 1), 2.0);
        assert_eq!(dataset.row_count(), 2);
    }
}
