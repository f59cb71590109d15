use tracing::info;

use crate::dataset::{Indicator, TimeSeriesDataset};
use crate::indicators::{derived, economy, investment, market, prices, rents};
use crate::noise::{GaussianNoise, NoiseSource};
use crate::overlay;
use crate::profile;

/// First simulated year, inclusive.
pub const START_YEAR: i32 = 2002;
/// Last simulated year, inclusive.
pub const END_YEAR: i32 = 2025;

/// Build the complete annual table for a territory.
///
/// Resolves the profile (unknown identifiers get the default one), simulates
/// every primary indicator across the year index, derives the accessibility
/// indicators per year, and applies the historical adjustment rules. The
/// schema is deterministic; the values depend on the injected noise source.
pub fn build_dataset(territory: &str, noise: &mut dyn NoiseSource) -> TimeSeriesDataset {
    let profile = profile::resolve(territory);
    let years: Vec<i32> = (START_YEAR..=END_YEAR).collect();
    info!(territory, profile = profile.identifier, "generating real estate dataset");

    let mut table = TimeSeriesDataset::new(territory, years.clone());

    table.insert_column(
        Indicator::HousePriceSqm,
        collect_series(&years, noise, |year, index, noise| {
            prices::house_price_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::ApartmentPriceSqm,
        collect_series(&years, noise, |year, index, noise| {
            prices::apartment_price_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::HouseRentSqm,
        collect_series(&years, noise, |year, index, noise| {
            rents::house_rent_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::ApartmentRentSqm,
        collect_series(&years, noise, |year, index, noise| {
            rents::apartment_rent_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::Transactions,
        collect_series(&years, noise, |year, index, noise| {
            market::transactions_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::SellingDays,
        collect_series(&years, noise, |year, index, noise| {
            market::selling_days_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::VacancyRate,
        collect_series(&years, noise, |year, index, noise| {
            market::vacancy_rate_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::MedianIncome,
        collect_series(&years, noise, |year, index, noise| {
            economy::median_income_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::MortgageRate,
        collect_series(&years, noise, |year, _index, noise| {
            economy::mortgage_rate_at(profile, year, noise)
        }),
    );
    table.insert_column(
        Indicator::Unemployment,
        collect_series(&years, noise, |year, index, noise| {
            economy::unemployment_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::IncomeYearsHouse,
        collect_series(&years, noise, |year, index, noise| {
            derived::income_years_house_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::IncomeYearsApartment,
        collect_series(&years, noise, |year, index, noise| {
            derived::income_years_apartment_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::RentToIncome,
        collect_series(&years, noise, |year, index, noise| {
            derived::rent_to_income_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::BuildingPermits,
        collect_series(&years, noise, |year, index, noise| {
            investment::building_permits_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::ForeignInvestment,
        collect_series(&years, noise, |year, index, noise| {
            investment::foreign_investment_at(profile, year, index, noise)
        }),
    );
    table.insert_column(
        Indicator::RentalInvestment,
        collect_series(&years, noise, |year, index, noise| {
            investment::rental_investment_at(profile, year, index, noise)
        }),
    );

    overlay::apply(&table, territory)
}

/// Build with the default OS-entropy Gaussian noise source, matching
/// interactive use where two runs differ.
pub fn build_dataset_default(territory: &str) -> TimeSeriesDataset {
    let mut noise = GaussianNoise::from_entropy();
    build_dataset(territory, &mut noise)
}

/// One value per year, in year order.
fn collect_series(
    years: &[i32],
    noise: &mut dyn NoiseSource,
    mut value_at: impl FnMut(i32, usize, &mut dyn NoiseSource) -> f64,
) -> Vec<f64> {
    let mut values = Vec::with_capacity(years.len());
    for (index, &year) in years.iter().enumerate() {
        values.push(value_at(year, index, &mut *noise));
    }
    values
}
