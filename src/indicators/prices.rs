use crate::calendar::CyclicalProfile;
use crate::noise::NoiseSource;
use crate::profile::TerritoryProfile;

use super::base;
use super::tiers::{RateTable, RateTier};

/// Apartments trade at a premium over houses on the same territory base.
const APARTMENT_PRICE_PREMIUM: f64 = 1.15;

const HOUSE_PRICE_CYCLE: CyclicalProfile = CyclicalProfile::new(0.92, 1.08);
const APARTMENT_PRICE_CYCLE: CyclicalProfile = CyclicalProfile::new(0.90, 1.10);

const HOUSE_PRICE_NOISE: f64 = 0.06;
const APARTMENT_PRICE_NOISE: f64 = 0.07;

const HOUSE_PRICE_GROWTH: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 0.045 },
        RateTier { territories: &["Guyane", "Mayotte"], value: 0.038 },
        RateTier { territories: &["Nouvelle-Calédonie", "Polynésie française"], value: 0.032 },
    ],
    standard: 0.028,
};

const APARTMENT_PRICE_GROWTH: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 0.048 },
        RateTier { territories: &["Guyane", "Mayotte"], value: 0.042 },
        RateTier { territories: &["La Réunion", "Martinique"], value: 0.035 },
    ],
    standard: 0.030,
};

/// House sale price in €/m² for one year.
pub fn house_price_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        profile.base_price_sqm,
        HOUSE_PRICE_GROWTH.value_for(profile.identifier),
        HOUSE_PRICE_CYCLE,
        HOUSE_PRICE_NOISE,
        noise,
    )
}

/// Apartment sale price in €/m² for one year.
pub fn apartment_price_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        profile.base_price_sqm * APARTMENT_PRICE_PREMIUM,
        APARTMENT_PRICE_GROWTH.value_for(profile.identifier),
        APARTMENT_PRICE_CYCLE,
        APARTMENT_PRICE_NOISE,
        noise,
    )
}
