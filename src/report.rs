use crate::dataset::{Indicator, TimeSeriesDataset};
use crate::profile::TerritoryProfile;

/// Mean affordability above which ownership-support measures are suggested.
const STRAINED_AFFORDABILITY_YEARS: f64 = 10.0;
/// Mean vacancy above which the rental stock is considered slack.
const HIGH_VACANCY_PCT: f64 = 7.0;

/// Summary statistics over the finished table.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSummary {
    pub mean_house_price: f64,
    pub mean_apartment_price: f64,
    pub mean_house_rent: f64,
    pub mean_apartment_rent: f64,
    /// First-to-last year growth, in %.
    pub house_price_growth_pct: f64,
    pub apartment_price_growth_pct: f64,
    pub mean_income_years_house: f64,
    pub mean_income_years_apartment: f64,
    pub mean_rent_to_income_pct: f64,
    pub mean_transactions: f64,
    pub mean_vacancy_pct: f64,
    pub mean_foreign_investment: f64,
}

impl MarketSummary {
    pub fn from_dataset(dataset: &TimeSeriesDataset) -> Self {
        Self {
            mean_house_price: mean(dataset.column(Indicator::HousePriceSqm)),
            mean_apartment_price: mean(dataset.column(Indicator::ApartmentPriceSqm)),
            mean_house_rent: mean(dataset.column(Indicator::HouseRentSqm)),
            mean_apartment_rent: mean(dataset.column(Indicator::ApartmentRentSqm)),
            house_price_growth_pct: growth_pct(dataset.column(Indicator::HousePriceSqm)),
            apartment_price_growth_pct: growth_pct(dataset.column(Indicator::ApartmentPriceSqm)),
            mean_income_years_house: mean(dataset.column(Indicator::IncomeYearsHouse)),
            mean_income_years_apartment: mean(dataset.column(Indicator::IncomeYearsApartment)),
            mean_rent_to_income_pct: mean(dataset.column(Indicator::RentToIncome)),
            mean_transactions: mean(dataset.column(Indicator::Transactions)),
            mean_vacancy_pct: mean(dataset.column(Indicator::VacancyRate)),
            mean_foreign_investment: mean(dataset.column(Indicator::ForeignInvestment)),
        }
    }
}

/// Render the textual market report: summary statistics, territory
/// specifics, and threshold-driven recommendations.
pub fn render_report(dataset: &TimeSeriesDataset, profile: &TerritoryProfile) -> Vec<String> {
    let summary = MarketSummary::from_dataset(dataset);
    let first = dataset.years().first().copied().unwrap_or_default();
    let last = dataset.years().last().copied().unwrap_or_default();

    let mut lines = vec![
        format!("Market report: {} ({first}-{last})", dataset.territory()),
        format!("Mean house price: {:.0} €/m²", summary.mean_house_price),
        format!("Mean apartment price: {:.0} €/m²", summary.mean_apartment_price),
        format!("Mean house rent: {:.1} €/m²/month", summary.mean_house_rent),
        format!(
            "Mean apartment rent: {:.1} €/m²/month",
            summary.mean_apartment_rent
        ),
        format!(
            "House price growth {first}-{last}: {:.1}%",
            summary.house_price_growth_pct
        ),
        format!(
            "Apartment price growth {first}-{last}: {:.1}%",
            summary.apartment_price_growth_pct
        ),
        format!(
            "Affordability: {:.1} income-years (house), {:.1} (apartment)",
            summary.mean_income_years_house, summary.mean_income_years_apartment
        ),
        format!(
            "Rent burden: {:.1}% of monthly income",
            summary.mean_rent_to_income_pct
        ),
        format!("Mean yearly transactions: {:.0}", summary.mean_transactions),
        format!("Mean rental vacancy: {:.1}%", summary.mean_vacancy_pct),
        format!(
            "Mean foreign investment: {:.1} M€/year",
            summary.mean_foreign_investment
        ),
        format!("Specialties: {}", profile.specialties.join(", ")),
        format!("Key zones: {}", profile.key_zones.join(", ")),
    ];
    for recommendation in recommendations(&summary, profile) {
        lines.push(format!("- {recommendation}"));
    }
    lines
}

/// Recommendation lines driven by affordability, vacancy, and specialties.
pub fn recommendations(summary: &MarketSummary, profile: &TerritoryProfile) -> Vec<&'static str> {
    let mut out = Vec::new();
    if summary.mean_income_years_house > STRAINED_AFFORDABILITY_YEARS {
        out.push("develop ownership-assistance programs and zero-interest loan schemes");
    }
    if summary.mean_vacancy_pct > HIGH_VACANCY_PCT {
        out.push("diversify the rental offer and upgrade the existing stock");
    }
    if profile.specialties.contains(&"tourisme") {
        out.push("grow seasonal-rental capacity and tourism-facing stock");
    }
    if profile.specialties.contains(&"luxe") || profile.specialties.contains(&"ultra-luxe") {
        out.push("position the territory on the international luxury market");
    }
    if profile.specialties.contains(&"croissance") {
        out.push("plan housing and infrastructure ahead of population growth");
    }
    out
}

fn mean(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "summary over an empty column");
    values.iter().sum::<f64>() / values.len() as f64
}

fn growth_pct(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "summary over an empty column");
    (values[values.len() - 1] / values[0] - 1.0) * 100.0
}
