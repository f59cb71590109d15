use tracing::debug;

use crate::dataset::{Indicator, TimeSeriesDataset};

/// Years an adjustment rule applies to.
#[derive(Debug, Clone, Copy)]
pub enum YearSpan {
    /// Inclusive range.
    Between(i32, i32),
    /// Every year at or after the given one.
    From(i32),
    /// An explicit year list.
    Years(&'static [i32]),
}

impl YearSpan {
    pub fn contains(self, year: i32) -> bool {
        match self {
            YearSpan::Between(first, last) => (first..=last).contains(&year),
            YearSpan::From(first) => year >= first,
            YearSpan::Years(years) => years.contains(&year),
        }
    }
}

/// One historical adjustment: for matching years (and territory, when set),
/// multiply the listed columns.
#[derive(Debug)]
pub struct AdjustmentRule {
    pub name: &'static str,
    /// `None` applies to every territory.
    pub territory: Option<&'static str>,
    pub span: YearSpan,
    pub effects: &'static [(Indicator, f64)],
}

/// Shared and territory-specific adjustments.
///
/// Applied in declaration order; every effect multiplies only its own
/// column's current value, so the order here is the single source of truth
/// for how overlapping rules stack.
pub const ADJUSTMENTS: &[AdjustmentRule] = &[
    AdjustmentRule {
        name: "global_financial_crisis",
        territory: None,
        span: YearSpan::Between(2008, 2009),
        effects: &[
            (Indicator::HousePriceSqm, 0.88),
            (Indicator::ApartmentPriceSqm, 0.85),
            (Indicator::Transactions, 0.65),
        ],
    },
    AdjustmentRule {
        name: "covid_pandemic",
        territory: None,
        span: YearSpan::Between(2020, 2021),
        effects: &[
            (Indicator::HouseRentSqm, 0.95),
            (Indicator::ApartmentRentSqm, 0.93),
            (Indicator::Transactions, 0.70),
            (Indicator::VacancyRate, 1.20),
        ],
    },
    AdjustmentRule {
        name: "mayotte_departmentalization",
        territory: Some("Mayotte"),
        span: YearSpan::From(2011),
        effects: &[
            (Indicator::ForeignInvestment, 1.15),
            (Indicator::BuildingPermits, 1.20),
        ],
    },
    AdjustmentRule {
        name: "guyane_social_unrest",
        territory: Some("Guyane"),
        span: YearSpan::Between(2017, 2018),
        effects: &[
            (Indicator::Transactions, 0.80),
            (Indicator::BuildingPermits, 0.85),
        ],
    },
    AdjustmentRule {
        name: "caledonia_referendums",
        territory: Some("Nouvelle-Calédonie"),
        span: YearSpan::Years(&[2018, 2020, 2021]),
        effects: &[
            (Indicator::ForeignInvestment, 0.75),
            (Indicator::Transactions, 0.85),
        ],
    },
    AdjustmentRule {
        name: "reunion_telework_uplift",
        territory: Some("La Réunion"),
        span: YearSpan::From(2010),
        effects: &[
            (Indicator::ApartmentRentSqm, 1.03),
            (Indicator::ApartmentPriceSqm, 1.04),
        ],
    },
    AdjustmentRule {
        name: "long_run_price_appreciation",
        territory: None,
        span: YearSpan::From(2015),
        effects: &[
            (Indicator::HousePriceSqm, 1.02),
            (Indicator::ApartmentPriceSqm, 1.03),
        ],
    },
    AdjustmentRule {
        name: "post_covid_recovery",
        territory: None,
        span: YearSpan::From(2022),
        effects: &[
            (Indicator::Transactions, 1.15),
            (Indicator::RentalInvestment, 1.10),
        ],
    },
];

/// Apply every matching rule over a snapshot of the table, producing the
/// adjusted table. The input table is left untouched.
pub fn apply(table: &TimeSeriesDataset, territory: &str) -> TimeSeriesDataset {
    let mut adjusted = table.clone();
    let years: Vec<i32> = adjusted.years().to_vec();

    for rule in ADJUSTMENTS {
        if let Some(scope) = rule.territory
            && scope != territory
        {
            continue;
        }
        let matching = years.iter().filter(|&&year| rule.span.contains(year)).count();
        if matching == 0 {
            continue;
        }
        for &(indicator, factor) in rule.effects {
            let column = adjusted.column_mut(indicator);
            for (row, &year) in years.iter().enumerate() {
                if rule.span.contains(year) {
                    column[row] *= factor;
                }
            }
        }
        debug!(rule = rule.name, years = matching, "applied market adjustment");
    }

    adjusted
}
