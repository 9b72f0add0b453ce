//! Territory definitions and metadata for the classic world map.
//!
//! All 42 territories are enumerated continent by continent. Territory
//! metadata (abbreviation, display name, continent) is stored in a
//! compile-time lookup table indexed by the `Territory` enum discriminant.

use serde::{Serialize, Serializer};

use super::continent::Continent;

/// The number of territories on the map.
pub const TERRITORY_COUNT: usize = 42;

/// A territory on the classic map.
///
/// Variants are grouped by continent in board order.
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Territory {
    Alaska = 0,
    NorthwestTerritory = 1,
    Greenland = 2,
    Alberta = 3,
    Ontario = 4,
    Quebec = 5,
    WesternUnitedStates = 6,
    EasternUnitedStates = 7,
    CentralAmerica = 8,
    Venezuela = 9,
    Peru = 10,
    Brazil = 11,
    Argentina = 12,
    Iceland = 13,
    Scandinavia = 14,
    Ukraine = 15,
    GreatBritain = 16,
    NorthernEurope = 17,
    WesternEurope = 18,
    SouthernEurope = 19,
    NorthAfrica = 20,
    Egypt = 21,
    EastAfrica = 22,
    Congo = 23,
    SouthAfrica = 24,
    Madagascar = 25,
    Ural = 26,
    Siberia = 27,
    Yakutsk = 28,
    Kamchatka = 29,
    Irkutsk = 30,
    Mongolia = 31,
    Japan = 32,
    Afghanistan = 33,
    MiddleEast = 34,
    India = 35,
    Siam = 36,
    China = 37,
    Indonesia = 38,
    NewGuinea = 39,
    WesternAustralia = 40,
    EasternAustralia = 41,
}

use Territory::*;

/// All territory variants in index order.
pub const ALL_TERRITORIES: [Territory; TERRITORY_COUNT] = [
    Alaska, NorthwestTerritory, Greenland, Alberta, Ontario, Quebec,
    WesternUnitedStates, EasternUnitedStates, CentralAmerica,
    Venezuela, Peru, Brazil, Argentina,
    Iceland, Scandinavia, Ukraine, GreatBritain, NorthernEurope,
    WesternEurope, SouthernEurope,
    NorthAfrica, Egypt, EastAfrica, Congo, SouthAfrica, Madagascar,
    Ural, Siberia, Yakutsk, Kamchatka, Irkutsk, Mongolia, Japan,
    Afghanistan, MiddleEast, India, Siam, China,
    Indonesia, NewGuinea, WesternAustralia, EasternAustralia,
];

/// Static metadata for a territory.
pub struct TerritoryInfo {
    pub abbr: &'static str,
    pub name: &'static str,
    pub continent: Continent,
}

const fn info(abbr: &'static str, name: &'static str, continent: Continent) -> TerritoryInfo {
    TerritoryInfo { abbr, name, continent }
}

/// Compile-time lookup table: index by `Territory as usize`.
pub static TERRITORY_INFO: [TerritoryInfo; TERRITORY_COUNT] = [
    info("ala", "Alaska", Continent::NorthAmerica),
    info("nwt", "Northwest Territory", Continent::NorthAmerica),
    info("grn", "Greenland", Continent::NorthAmerica),
    info("alb", "Alberta", Continent::NorthAmerica),
    info("ont", "Ontario", Continent::NorthAmerica),
    info("que", "Quebec", Continent::NorthAmerica),
    info("wus", "Western United States", Continent::NorthAmerica),
    info("eus", "Eastern United States", Continent::NorthAmerica),
    info("cam", "Central America", Continent::NorthAmerica),
    info("ven", "Venezuela", Continent::SouthAmerica),
    info("per", "Peru", Continent::SouthAmerica),
    info("bra", "Brazil", Continent::SouthAmerica),
    info("arg", "Argentina", Continent::SouthAmerica),
    info("ice", "Iceland", Continent::Europe),
    info("sca", "Scandinavia", Continent::Europe),
    info("ukr", "Ukraine", Continent::Europe),
    info("gbr", "Great Britain", Continent::Europe),
    info("neu", "Northern Europe", Continent::Europe),
    info("weu", "Western Europe", Continent::Europe),
    info("seu", "Southern Europe", Continent::Europe),
    info("naf", "North Africa", Continent::Africa),
    info("egy", "Egypt", Continent::Africa),
    info("eaf", "East Africa", Continent::Africa),
    info("con", "Congo", Continent::Africa),
    info("saf", "South Africa", Continent::Africa),
    info("mad", "Madagascar", Continent::Africa),
    info("ura", "Ural", Continent::Asia),
    info("sib", "Siberia", Continent::Asia),
    info("yak", "Yakutsk", Continent::Asia),
    info("kam", "Kamchatka", Continent::Asia),
    info("irk", "Irkutsk", Continent::Asia),
    info("mon", "Mongolia", Continent::Asia),
    info("jap", "Japan", Continent::Asia),
    info("afg", "Afghanistan", Continent::Asia),
    info("mid", "Middle East", Continent::Asia),
    info("ind", "India", Continent::Asia),
    info("sia", "Siam", Continent::Asia),
    info("chi", "China", Continent::Asia),
    info("idn", "Indonesia", Continent::Australia),
    info("ngu", "New Guinea", Continent::Australia),
    info("wau", "Western Australia", Continent::Australia),
    info("eau", "Eastern Australia", Continent::Australia),
];

impl Territory {
    /// Returns the 3-letter abbreviation for this territory.
    pub const fn abbr(self) -> &'static str {
        TERRITORY_INFO[self as usize].abbr
    }

    /// Returns the full display name for this territory.
    pub const fn name(self) -> &'static str {
        TERRITORY_INFO[self as usize].name
    }

    /// Returns the continent this territory belongs to.
    pub const fn continent(self) -> Continent {
        TERRITORY_INFO[self as usize].continent
    }

    /// Returns the territory at the given table index.
    pub fn from_index(idx: usize) -> Option<Territory> {
        ALL_TERRITORIES.get(idx).copied()
    }

    /// Looks up a territory by its 3-letter abbreviation.
    pub fn from_abbr(abbr: &str) -> Option<Territory> {
        ALL_TERRITORIES.iter().copied().find(|t| t.abbr() == abbr)
    }

    /// Looks up a territory by its full name, ignoring case.
    ///
    /// Dashes and underscores are accepted in place of spaces so that
    /// multi-word names survive whitespace tokenization.
    pub fn from_name(name: &str) -> Option<Territory> {
        let wanted: String = name
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
            .collect();
        ALL_TERRITORIES
            .iter()
            .copied()
            .find(|t| t.name().to_ascii_lowercase() == wanted)
    }

    /// Resolves user input: abbreviation first, then full name.
    pub fn lookup(input: &str) -> Option<Territory> {
        let lowered = input.trim().to_ascii_lowercase();
        Territory::from_abbr(&lowered).or_else(|| Territory::from_name(&lowered))
    }
}

impl std::fmt::Display for Territory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Territory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
