/// One tier: the territories it covers and the value they share.
///
/// The same shape serves growth rates, base magnitudes, trend slopes, and
/// risk premiums.
pub struct RateTier {
    pub territories: &'static [&'static str],
    pub value: f64,
}

/// Territory-keyed lookup with a standard fallback.
///
/// Absence from every tier means the standard value; unknown territories
/// therefore always land on the standard tier.
pub struct RateTable {
    pub tiers: &'static [RateTier],
    pub standard: f64,
}

impl RateTable {
    /// Value for the territory, falling back to the standard tier.
    pub fn value_for(&self, territory: &str) -> f64 {
        self.tiers
            .iter()
            .find(|tier| tier.territories.iter().any(|&t| t == territory))
            .map_or(self.standard, |tier| tier.value)
    }
}
