use crate::noise::NoiseSource;
use crate::profile::TerritoryProfile;

use super::{economy, prices, rents};

/// Reference dwelling surfaces behind the accessibility indicators.
const HOUSE_SURFACE_SQM: f64 = 100.0;
const APARTMENT_SURFACE_SQM: f64 = 70.0;

const MONTHS_PER_YEAR: f64 = 12.0;

// Each derived value re-invokes the per-year generators with fresh draws, so
// its noise realization is independent of the primary columns at the same
// year. Under a zero-noise source the identities below hold exactly.

/// Years of median income needed to buy a reference 100 m² house.
pub fn income_years_house_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    let price = prices::house_price_at(profile, year, index, noise) * HOUSE_SURFACE_SQM;
    let income = economy::median_income_at(profile, year, index, noise);
    debug_assert!(income > 0.0, "median income must stay strictly positive");
    price / income
}

/// Years of median income needed to buy a reference 70 m² apartment.
pub fn income_years_apartment_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    let price = prices::apartment_price_at(profile, year, index, noise) * APARTMENT_SURFACE_SQM;
    let income = economy::median_income_at(profile, year, index, noise);
    debug_assert!(income > 0.0, "median income must stay strictly positive");
    price / income
}

/// Share of monthly income spent renting a reference 70 m² apartment, in %.
pub fn rent_to_income_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    let monthly_rent = rents::apartment_rent_at(profile, year, index, noise) * APARTMENT_SURFACE_SQM;
    let income = economy::median_income_at(profile, year, index, noise);
    debug_assert!(income > 0.0, "median income must stay strictly positive");
    monthly_rent / (income / MONTHS_PER_YEAR) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{GaussianNoise, ZeroNoise};
    use crate::profile;

    #[test]
    fn house_affordability_matches_the_identity() {
        let profile = profile::resolve("Guadeloupe");
        for (index, year) in (2002..=2025).enumerate() {
            let expected = prices::house_price_at(profile, year, index, &mut ZeroNoise) * 100.0
                / economy::median_income_at(profile, year, index, &mut ZeroNoise);
            let actual = income_years_house_at(profile, year, index, &mut ZeroNoise);
            assert!((actual - expected).abs() < 1e-12, "mismatch in {year}");
        }
    }

    #[test]
    fn apartment_affordability_matches_the_identity() {
        let profile = profile::resolve("Mayotte");
        let expected = prices::apartment_price_at(profile, 2010, 8, &mut ZeroNoise) * 70.0
            / economy::median_income_at(profile, 2010, 8, &mut ZeroNoise);
        let actual = income_years_apartment_at(profile, 2010, 8, &mut ZeroNoise);
        assert!((actual - expected).abs() < 1e-12);
    }

    #[test]
    fn rent_ratio_is_a_monthly_percentage() {
        let profile = profile::resolve("default");
        // 11.0 × 1.10 × 70 / (18000 / 12) × 100
        let expected = 11.0 * 1.10 * 70.0 / 1500.0 * 100.0;
        let actual = rent_to_income_at(profile, 2002, 0, &mut ZeroNoise);
        assert!((actual - expected).abs() < 1e-9);
    }

    #[test]
    fn noisy_recomputation_is_independent_of_primary_draws() {
        let profile = profile::resolve("Martinique");
        let mut noise = GaussianNoise::seeded(9);
        let primary = prices::house_price_at(profile, 2005, 3, &mut noise);
        let derived = income_years_house_at(profile, 2005, 3, &mut noise);
        let implied_price = derived * economy::median_income_at(profile, 2005, 3, &mut ZeroNoise)
            / 100.0;
        // Fresh draws make the implied price drift from the primary value.
        assert!((implied_price - primary).abs() > f64::EPSILON);
    }

    #[test]
    fn ultra_luxury_markets_are_least_affordable() {
        let barth = profile::resolve("Saint-Barthélemy");
        let mayotte = profile::resolve("Mayotte");
        let barth_years = income_years_house_at(barth, 2002, 0, &mut ZeroNoise);
        let mayotte_years = income_years_house_at(mayotte, 2002, 0, &mut ZeroNoise);
        assert!(barth_years > mayotte_years);
    }
}
