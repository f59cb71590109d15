use crate::calendar::CyclicalProfile;
use crate::noise::NoiseSource;
use crate::profile::TerritoryProfile;

use super::base;
use super::tiers::{RateTable, RateTier};

const INCOME_CYCLE: CyclicalProfile = CyclicalProfile::new(0.97, 1.04);
const INCOME_NOISE: f64 = 0.03;

const INCOME_GROWTH: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Guyane", "Mayotte"], value: 0.022 },
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 0.018 },
    ],
    standard: 0.015,
};

const UNEMPLOYMENT_CYCLE: CyclicalProfile = CyclicalProfile::new(1.15, 0.92);
const UNEMPLOYMENT_NOISE: f64 = 0.05;

const UNEMPLOYMENT_BASE: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Mayotte", "Guyane"], value: 22.0 },
        RateTier { territories: &["Martinique", "Guadeloupe"], value: 18.0 },
        RateTier { territories: &["La Réunion"], value: 16.0 },
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 12.0 },
    ],
    standard: 14.0,
};

// Negative slope: structural unemployment recedes slowly everywhere.
const UNEMPLOYMENT_TREND: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Mayotte", "Guyane"], value: -0.005 },
        RateTier { territories: &["Martinique", "Guadeloupe"], value: -0.004 },
    ],
    standard: -0.003,
};

/// Headline mortgage base rate per historical year bracket, upper bound
/// inclusive.
const MORTGAGE_RATE_BRACKETS: &[(i32, f64)] = &[
    (2005, 4.2),
    (2008, 4.5),
    (2012, 3.8),
    (2016, 2.9),
    (2020, 1.8),
    (2023, 2.2),
];

/// Base rate past the last bracket.
const MORTGAGE_RATE_LATEST: f64 = 2.8;

const MORTGAGE_NOISE: f64 = 0.05;

/// Additive overseas risk premium on top of the bracket rate.
const MORTGAGE_PREMIUM: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Mayotte", "Guyane", "Wallis-et-Futuna"], value: 0.4 },
        RateTier {
            territories: &["Saint-Pierre-et-Miquelon", "Polynésie française"],
            value: 0.3,
        },
    ],
    standard: 0.2,
};

/// Median annual household income in €.
pub fn median_income_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        profile.median_income,
        INCOME_GROWTH.value_for(profile.identifier),
        INCOME_CYCLE,
        INCOME_NOISE,
        noise,
    )
}

/// Mortgage interest rate in %.
///
/// Structurally unlike the trended indicators: the base follows historical
/// year brackets, a territory risk premium is added, and no growth trend or
/// cyclical multiplier applies.
pub fn mortgage_rate_at(profile: &TerritoryProfile, year: i32, noise: &mut dyn NoiseSource) -> f64 {
    let base_rate = MORTGAGE_RATE_BRACKETS
        .iter()
        .find(|(upper, _)| year <= *upper)
        .map_or(MORTGAGE_RATE_LATEST, |(_, rate)| *rate);
    let premium = MORTGAGE_PREMIUM.value_for(profile.identifier);
    (base_rate + premium) * noise.factor(MORTGAGE_NOISE)
}

/// Unemployment rate in %.
pub fn unemployment_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        UNEMPLOYMENT_BASE.value_for(profile.identifier),
        UNEMPLOYMENT_TREND.value_for(profile.identifier),
        UNEMPLOYMENT_CYCLE,
        UNEMPLOYMENT_NOISE,
        noise,
    )
}
