/// Fixed economic parameters for one overseas territory.
///
/// Profiles are static data, resolved once per run and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TerritoryProfile {
    pub identifier: &'static str,
    /// Base sale price in €/m².
    pub base_price_sqm: f64,
    /// Base monthly rent in €/m².
    pub base_rent_sqm: f64,
    /// Median annual household income in €.
    pub median_income: f64,
    /// Market specialty tags consumed by the report collaborator.
    pub specialties: &'static [&'static str],
    /// Key zones, most significant first.
    pub key_zones: &'static [&'static str],
}

/// Profile substituted for any identifier without an explicit entry.
pub const DEFAULT_PROFILE: TerritoryProfile = TerritoryProfile {
    identifier: "default",
    base_price_sqm: 2000.0,
    base_rent_sqm: 11.0,
    median_income: 18000.0,
    specialties: &["résidentiel", "tourisme"],
    key_zones: &["Capitale", "Zone touristique", "Périurbain"],
};

pub const PROFILES: &[TerritoryProfile] = &[
    TerritoryProfile {
        identifier: "Guadeloupe",
        base_price_sqm: 1800.0,
        base_rent_sqm: 10.5,
        median_income: 18000.0,
        specialties: &["tourisme", "résidentiel", "luxe"],
        key_zones: &["Pointe-à-Pitre", "Gosier", "Sainte-Anne", "Basse-Terre"],
    },
    TerritoryProfile {
        identifier: "Martinique",
        base_price_sqm: 2200.0,
        base_rent_sqm: 12.0,
        median_income: 19500.0,
        specialties: &["tourisme", "résidentiel", "vue mer"],
        key_zones: &["Fort-de-France", "Ducos", "Schoelcher", "Trois-Îlets"],
    },
    TerritoryProfile {
        identifier: "Guyane",
        base_price_sqm: 1500.0,
        base_rent_sqm: 9.0,
        median_income: 16500.0,
        specialties: &["spatial", "croissance", "défiscalisation"],
        key_zones: &["Cayenne", "Kourou", "Remire-Montjoly", "Matoury"],
    },
    TerritoryProfile {
        identifier: "La Réunion",
        base_price_sqm: 2100.0,
        base_rent_sqm: 11.5,
        median_income: 19000.0,
        specialties: &["tourisme", "résidentiel", "haute altitude"],
        key_zones: &["Saint-Denis", "Saint-Paul", "Saint-Pierre", "Le Tampon"],
    },
    TerritoryProfile {
        identifier: "Mayotte",
        base_price_sqm: 1200.0,
        base_rent_sqm: 7.5,
        median_income: 9500.0,
        specialties: &["croissance", "accession", "défavorisé"],
        key_zones: &["Mamoudzou", "Dzaoudzi", "Koungou", "Tsingoni"],
    },
    TerritoryProfile {
        identifier: "Saint-Martin",
        base_price_sqm: 3500.0,
        base_rent_sqm: 20.0,
        median_income: 22000.0,
        specialties: &["luxe", "tourisme", "international"],
        key_zones: &["Marigot", "Grand-Case", "Baie Orientale", "Terres Basses"],
    },
    TerritoryProfile {
        identifier: "Saint-Barthélemy",
        base_price_sqm: 8500.0,
        base_rent_sqm: 45.0,
        median_income: 35000.0,
        specialties: &["ultra-luxe", "jet-set", "international"],
        key_zones: &["Gustavia", "Saint-Jean", "Lorient", "Flamands"],
    },
    TerritoryProfile {
        identifier: "Saint-Pierre-et-Miquelon",
        base_price_sqm: 1800.0,
        base_rent_sqm: 9.5,
        median_income: 21000.0,
        specialties: &["pêche", "isolé", "climat froid"],
        key_zones: &["Saint-Pierre", "Miquelon", "Langlade"],
    },
    TerritoryProfile {
        identifier: "Wallis-et-Futuna",
        base_price_sqm: 1300.0,
        base_rent_sqm: 8.0,
        median_income: 12000.0,
        specialties: &["traditionnel", "communautaire", "isolé"],
        key_zones: &["Mata-Utu", "Leava", "Alo", "Sigave"],
    },
    TerritoryProfile {
        identifier: "Polynésie française",
        base_price_sqm: 2800.0,
        base_rent_sqm: 15.0,
        median_income: 18500.0,
        specialties: &["tourisme", "insulaire", "vue lagons"],
        key_zones: &["Papeete", "Punaauia", "Moorea", "Bora-Bora"],
    },
    TerritoryProfile {
        identifier: "Nouvelle-Calédonie",
        base_price_sqm: 2500.0,
        base_rent_sqm: 14.0,
        median_income: 23000.0,
        specialties: &["nickel", "austral", "vue mer"],
        key_zones: &["Nouméa", "Dumbéa", "Mont-Dore", "Païta"],
    },
];

/// Resolve a territory identifier to its profile.
///
/// Never fails: identifiers without an explicit entry get [`DEFAULT_PROFILE`].
pub fn resolve(identifier: &str) -> &'static TerritoryProfile {
    PROFILES
        .iter()
        .find(|p| p.identifier == identifier)
        .unwrap_or(&DEFAULT_PROFILE)
}

/// All registered territory identifiers, in registry order.
pub fn territory_names() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|p| p.identifier)
}
