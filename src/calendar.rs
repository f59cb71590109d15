/// Years in which a shared macro-economic crisis depresses the market.
pub const CRISIS_YEARS: &[i32] = &[2008, 2009, 2020, 2021];

/// Years in which a shared boom lifts the market.
pub const BOOM_YEARS: &[i32] = &[2006, 2012, 2017, 2023];

/// Shared macro regime for a given year, consumed by every generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Crisis,
    Boom,
    Steady,
}

/// Regime for the given year under the shared calendar.
pub fn regime_for(year: i32) -> Regime {
    if CRISIS_YEARS.contains(&year) {
        Regime::Crisis
    } else if BOOM_YEARS.contains(&year) {
        Regime::Boom
    } else {
        Regime::Steady
    }
}

/// Per-indicator crisis/boom factors.
///
/// The calendar is shared; the magnitude is not. Transaction and permit
/// volumes swing far harder than rents, so each generator carries its own
/// pair of factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CyclicalProfile {
    pub crisis: f64,
    pub boom: f64,
}

impl CyclicalProfile {
    pub const fn new(crisis: f64, boom: f64) -> Self {
        Self { crisis, boom }
    }

    /// Multiplier for the given year: crisis factor, boom factor, or 1.0.
    pub fn multiplier(&self, year: i32) -> f64 {
        match regime_for(year) {
            Regime::Crisis => self.crisis,
            Regime::Boom => self.boom,
            Regime::Steady => 1.0,
        }
    }
}
