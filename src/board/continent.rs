//! Continents and their reinforcement bonuses.

use serde::{Serialize, Serializer};

use super::territory::Territory::{self, *};

/// The number of continents on the map.
pub const CONTINENT_COUNT: usize = 6;

/// A named grouping of territories. Owning every territory in a continent
/// grants its bonus during reinforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Continent {
    NorthAmerica = 0,
    SouthAmerica = 1,
    Europe = 2,
    Africa = 3,
    Asia = 4,
    Australia = 5,
}

/// All continents in board order.
pub const ALL_CONTINENTS: [Continent; CONTINENT_COUNT] = [
    Continent::NorthAmerica,
    Continent::SouthAmerica,
    Continent::Europe,
    Continent::Africa,
    Continent::Asia,
    Continent::Australia,
];

static NORTH_AMERICA: [Territory; 9] = [
    Alaska, NorthwestTerritory, Greenland, Alberta, Ontario, Quebec,
    WesternUnitedStates, EasternUnitedStates, CentralAmerica,
];
static SOUTH_AMERICA: [Territory; 4] = [Venezuela, Peru, Brazil, Argentina];
static EUROPE: [Territory; 7] = [
    Iceland, Scandinavia, Ukraine, GreatBritain, NorthernEurope, WesternEurope, SouthernEurope,
];
static AFRICA: [Territory; 6] = [NorthAfrica, Egypt, EastAfrica, Congo, SouthAfrica, Madagascar];
static ASIA: [Territory; 12] = [
    Ural, Siberia, Yakutsk, Kamchatka, Irkutsk, Mongolia, Japan,
    Afghanistan, MiddleEast, India, Siam, China,
];
static AUSTRALIA: [Territory; 4] = [Indonesia, NewGuinea, WesternAustralia, EasternAustralia];

impl Continent {
    /// Returns the display name.
    pub const fn name(self) -> &'static str {
        match self {
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Europe => "Europe",
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Australia => "Australia",
        }
    }

    /// Returns the reinforcement bonus for holding the whole continent.
    pub const fn bonus(self) -> u32 {
        match self {
            Continent::NorthAmerica => 5,
            Continent::SouthAmerica => 2,
            Continent::Europe => 5,
            Continent::Africa => 3,
            Continent::Asia => 7,
            Continent::Australia => 2,
        }
    }

    /// Returns the member territories in board order.
    pub fn territories(self) -> &'static [Territory] {
        match self {
            Continent::NorthAmerica => &NORTH_AMERICA,
            Continent::SouthAmerica => &SOUTH_AMERICA,
            Continent::Europe => &EUROPE,
            Continent::Africa => &AFRICA,
            Continent::Asia => &ASIA,
            Continent::Australia => &AUSTRALIA,
        }
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Continent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::territory::{ALL_TERRITORIES, TERRITORY_COUNT};

    #[test]
    fn every_territory_in_exactly_one_continent() {
        let mut seen = [0u8; TERRITORY_COUNT];
        for c in ALL_CONTINENTS {
            for t in c.territories() {
                seen[*t as usize] += 1;
                assert_eq!(t.continent(), c, "{:?} listed under {:?}", t, c);
            }
        }
        for t in ALL_TERRITORIES {
            assert_eq!(seen[t as usize], 1, "{:?} appears {} times", t, seen[t as usize]);
        }
    }

    #[test]
    fn classic_bonuses() {
        let total: u32 = ALL_CONTINENTS.iter().map(|c| c.bonus()).sum();
        assert_eq!(total, 24);
        assert_eq!(Continent::Asia.bonus(), 7);
        assert_eq!(Continent::Australia.bonus(), 2);
    }

    #[test]
    fn continent_sizes() {
        let sizes: Vec<usize> = ALL_CONTINENTS.iter().map(|c| c.territories().len()).collect();
        assert_eq!(sizes, vec![9, 4, 7, 6, 12, 4]);
    }
}
