use crate::calendar::CyclicalProfile;
use crate::noise::NoiseSource;
use crate::profile::TerritoryProfile;

use super::base;
use super::tiers::{RateTable, RateTier};

// Permits and investment flows are the most regime-sensitive series.
const PERMIT_CYCLE: CyclicalProfile = CyclicalProfile::new(0.60, 1.30);
const PERMIT_NOISE: f64 = 0.10;

const PERMIT_BASE: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["La Réunion", "Martinique", "Guadeloupe"], value: 2000.0 },
        RateTier { territories: &["Guyane", "Nouvelle-Calédonie"], value: 1200.0 },
        RateTier { territories: &["Mayotte"], value: 800.0 },
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 200.0 },
    ],
    standard: 600.0,
};

const PERMIT_GROWTH: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Guyane", "Mayotte"], value: 0.040 },
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 0.025 },
    ],
    standard: 0.015,
};

const FOREIGN_INVESTMENT_CYCLE: CyclicalProfile = CyclicalProfile::new(0.70, 1.40);
const FOREIGN_INVESTMENT_NOISE: f64 = 0.15;

const FOREIGN_INVESTMENT_BASE: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 120.0 },
        RateTier {
            territories: &["Polynésie française", "Nouvelle-Calédonie"],
            value: 80.0,
        },
        RateTier { territories: &["Martinique", "Guadeloupe"], value: 50.0 },
        RateTier { territories: &["La Réunion"], value: 40.0 },
    ],
    standard: 20.0,
};

const FOREIGN_INVESTMENT_GROWTH: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 0.050 },
        RateTier {
            territories: &["Polynésie française", "Nouvelle-Calédonie"],
            value: 0.035,
        },
    ],
    standard: 0.020,
};

const RENTAL_INVESTMENT_CYCLE: CyclicalProfile = CyclicalProfile::new(0.75, 1.25);
const RENTAL_INVESTMENT_NOISE: f64 = 0.12;

const RENTAL_INVESTMENT_BASE: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["La Réunion", "Martinique", "Guadeloupe"], value: 150.0 },
        RateTier { territories: &["Guyane", "Nouvelle-Calédonie"], value: 80.0 },
        RateTier { territories: &["Mayotte"], value: 50.0 },
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 100.0 },
    ],
    standard: 60.0,
};

const RENTAL_INVESTMENT_GROWTH: RateTable = RateTable {
    tiers: &[
        RateTier { territories: &["Guyane", "Mayotte"], value: 0.045 },
        RateTier { territories: &["Saint-Barthélemy", "Saint-Martin"], value: 0.030 },
    ],
    standard: 0.020,
};

/// Yearly building permits issued.
pub fn building_permits_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        PERMIT_BASE.value_for(profile.identifier),
        PERMIT_GROWTH.value_for(profile.identifier),
        PERMIT_CYCLE,
        PERMIT_NOISE,
        noise,
    )
}

/// Foreign real-estate investment in M€.
pub fn foreign_investment_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        FOREIGN_INVESTMENT_BASE.value_for(profile.identifier),
        FOREIGN_INVESTMENT_GROWTH.value_for(profile.identifier),
        FOREIGN_INVESTMENT_CYCLE,
        FOREIGN_INVESTMENT_NOISE,
        noise,
    )
}

/// Rental (buy-to-let) investment in M€.
pub fn rental_investment_at(
    profile: &TerritoryProfile,
    year: i32,
    index: usize,
    noise: &mut dyn NoiseSource,
) -> f64 {
    base::simulate(
        year,
        index,
        RENTAL_INVESTMENT_BASE.value_for(profile.identifier),
        RENTAL_INVESTMENT_GROWTH.value_for(profile.identifier),
        RENTAL_INVESTMENT_CYCLE,
        RENTAL_INVESTMENT_NOISE,
        noise,
    )
}
