use crate::calendar::CyclicalProfile;
use crate::noise::NoiseSource;
use crate::profile::TerritoryProfile;

use super::base;
use super::tiers::{RateTable, RateTier};

/// Apartments rent at a premium over houses on the same territory base.
const APARTMENT_RENT_PREMIUM: f64 = 1.10;

// Rents are far less cyclical than sale prices.
const HOUSE_RENT_CYCLE: CyclicalProfile = CyclicalProfile::new(0.96, 1.04);
const APARTMENT_RENT_CYCLE: CyclicalProfile = CyclicalProfile::new(0.95, 1.05);

const HOUSE_RENT_NOISE: f64 = 0.04;
const APARTMENT_RENT_NOISE: f64 = 0.05;

const HOUSE_RENT_GROWTH: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 0.032 },
        RateTier { territories: &["Guyane", "Mayotte"], value: 0.028 },
    ],
    standard: 0.022,
};

const APARTMENT_RENT_GROWTH: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 0.035 },
        RateTier { territories: &["Guyane", "Mayotte"], value: 0.030 },
    ],
    standard: 0.025,
};

/// House monthly rent in €/m² for one year.
pub fn house_rent_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        profile.base_rent_sqm,
        HOUSE_RENT_GROWTH.value_for(profile.identifier),
        HOUSE_RENT_CYCLE,
        HOUSE_RENT_NOISE,
        noise,
    )
}

/// Apartment monthly rent in €/m² for one year.
pub fn apartment_rent_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        profile.base_rent_sqm * APARTMENT_RENT_PREMIUM,
        APARTMENT_RENT_GROWTH.value_for(profile.identifier),
        APARTMENT_RENT_CYCLE,
        APARTMENT_RENT_NOISE,
        noise,
    )
}
