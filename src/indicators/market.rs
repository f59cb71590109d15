use crate::calendar::CyclicalProfile;
use crate::noise::NoiseSource;
use crate::profile::TerritoryProfile;

use super::base;
use super::tiers::{RateTable, RateTier};

// Transaction volume swings hardest with the macro regime.
const TRANSACTION_CYCLE: CyclicalProfile = CyclicalProfile::new(0.65, 1.25);
const TRANSACTION_NOISE: f64 = 0.12;

const TRANSACTION_BASE: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["La Réunion", "Martinique", "Guadeloupe"], value: 5000.0 },
        RateTier {
            territories: &["Guyane", "Nouvelle-Calédonie", "Polynésie française"],
            value: 2500.0,
        },
        RateTier { territories: &["Mayotte"], value: 1500.0 },
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 500.0 },
    ],
    standard: 1000.0,
};

const TRANSACTION_GROWTH: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Guyane", "Mayotte"], value: 0.035 },
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 0.025 },
    ],
    standard: 0.015,
};

// Selling time stretches in a crisis and shortens in a boom.
const SELLING_DAYS_CYCLE: CyclicalProfile = CyclicalProfile::new(1.35, 0.80);
const SELLING_DAYS_NOISE: f64 = 0.08;

const SELLING_DAYS_BASE: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 60.0 },
        RateTier { territories: &["Guyane", "Mayotte"], value: 90.0 },
        RateTier { territories: &["La Réunion", "Martinique"], value: 75.0 },
    ],
    standard: 85.0,
};

// Negative slope: markets clear a little faster every year.
const SELLING_DAYS_TREND: RateTable = RateTable {
    tiers: &[RateTier { territories: &["Guyane", "Mayotte"], value: -0.010 }],
    standard: -0.005,
};

const VACANCY_CYCLE: CyclicalProfile = CyclicalProfile::new(1.25, 0.85);
const VACANCY_NOISE: f64 = 0.06;

const VACANCY_BASE: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Mayotte", "Guyane"], value: 4.5 },
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 8.0 },
        RateTier { territories: &["La Réunion", "Martinique"], value: 6.0 },
    ],
    standard: 5.5,
};

// Seasonal luxury markets drift up; everywhere else drifts down.
const VACANCY_TREND: RateTable = RateTable {
    tiers: &[RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 0.010 }],
    standard: -0.005,
};

/// Yearly number of sale transactions.
pub fn transactions_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        TRANSACTION_BASE.value_for(profile.identifier),
        TRANSACTION_GROWTH.value_for(profile.identifier),
        TRANSACTION_CYCLE,
        TRANSACTION_NOISE,
        noise,
    )
}

/// Average days on market before a sale closes.
pub fn selling_days_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        SELLING_DAYS_BASE.value_for(profile.identifier),
        SELLING_DAYS_TREND.value_for(profile.identifier),
        SELLING_DAYS_CYCLE,
        SELLING_DAYS_NOISE,
        noise,
    )
}

/// Rental vacancy rate in %.
pub fn vacancy_rate_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        VACANCY_BASE.value_for(profile.identifier),
        VACANCY_TREND.value_for(profile.identifier),
        VACANCY_CYCLE,
        VACANCY_NOISE,
        noise,
    )
}
