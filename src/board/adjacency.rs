//! Adjacency graph for the classic world map.
//!
//! Each border is stored once as an undirected pair. A per-territory
//! neighbor index covering both directions is built on first access, so
//! the graph is symmetric by construction. All border data is compile-time
//! `static`.

use std::sync::LazyLock;

use super::territory::Territory::{self, *};
use super::territory::{ALL_TERRITORIES, TERRITORY_COUNT};

/// Total number of undirected borders on the map.
pub const BORDER_COUNT: usize = 83;

/// Complete border table, grouped by the territory that first lists it.
pub static BORDERS: [(Territory, Territory); BORDER_COUNT] = [
    // North America
    (Alaska, NorthwestTerritory), (Alaska, Alberta), (Alaska, Kamchatka),
    (NorthwestTerritory, Alberta), (NorthwestTerritory, Ontario), (NorthwestTerritory, Greenland),
    (Greenland, Ontario), (Greenland, Quebec), (Greenland, Iceland),
    (Alberta, Ontario), (Alberta, WesternUnitedStates),
    (Ontario, Quebec), (Ontario, EasternUnitedStates), (Ontario, WesternUnitedStates),
    (Quebec, EasternUnitedStates),
    (WesternUnitedStates, EasternUnitedStates), (WesternUnitedStates, CentralAmerica),
    (EasternUnitedStates, CentralAmerica),
    (CentralAmerica, Venezuela),
    // South America
    (Venezuela, Brazil), (Venezuela, Peru),
    (Peru, Brazil), (Peru, Argentina),
    (Brazil, Argentina), (Brazil, NorthAfrica),
    // Europe
    (Iceland, GreatBritain), (Iceland, Scandinavia),
    (Scandinavia, Ukraine), (Scandinavia, NorthernEurope), (Scandinavia, GreatBritain),
    (Ukraine, NorthernEurope), (Ukraine, Ural), (Ukraine, Afghanistan),
    (Ukraine, MiddleEast), (Ukraine, SouthernEurope),
    (GreatBritain, NorthernEurope), (GreatBritain, WesternEurope),
    (NorthernEurope, SouthernEurope), (NorthernEurope, WesternEurope),
    (WesternEurope, SouthernEurope), (WesternEurope, NorthAfrica),
    (SouthernEurope, MiddleEast), (SouthernEurope, Egypt), (SouthernEurope, NorthAfrica),
    // Africa
    (NorthAfrica, Egypt), (NorthAfrica, EastAfrica), (NorthAfrica, Congo),
    (Egypt, MiddleEast), (Egypt, EastAfrica),
    (EastAfrica, Congo), (EastAfrica, SouthAfrica), (EastAfrica, Madagascar),
    (EastAfrica, MiddleEast),
    (Congo, SouthAfrica),
    (SouthAfrica, Madagascar),
    // Asia
    (Ural, Siberia), (Ural, China), (Ural, Afghanistan),
    (Siberia, Yakutsk), (Siberia, Irkutsk), (Siberia, Mongolia), (Siberia, China),
    (Yakutsk, Kamchatka), (Yakutsk, Irkutsk),
    (Kamchatka, Irkutsk), (Kamchatka, Mongolia), (Kamchatka, Japan),
    (Irkutsk, Mongolia),
    (Mongolia, Japan), (Mongolia, China),
    (Afghanistan, China), (Afghanistan, MiddleEast), (Afghanistan, India),
    (MiddleEast, India),
    (India, China), (India, Siam),
    (Siam, China), (Siam, Indonesia),
    // Australia
    (Indonesia, NewGuinea), (Indonesia, WesternAustralia),
    (NewGuinea, WesternAustralia), (NewGuinea, EasternAustralia),
    (WesternAustralia, EasternAustralia),
];

/// Pre-computed per-territory neighbor lists, sorted by territory index.
static NEIGHBORS: LazyLock<[Vec<Territory>; TERRITORY_COUNT]> = LazyLock::new(|| {
    let mut lists: [Vec<Territory>; TERRITORY_COUNT] = std::array::from_fn(|_| Vec::new());
    for &(a, b) in BORDERS.iter() {
        lists[a as usize].push(b);
        lists[b as usize].push(a);
    }
    for list in lists.iter_mut() {
        list.sort();
        list.dedup();
    }
    lists
});

/// Returns the territories bordering the given one.
#[inline]
pub fn neighbors(territory: Territory) -> &'static [Territory] {
    &NEIGHBORS[territory as usize]
}

/// Returns true if the two territories share a border.
pub fn is_adjacent(a: Territory, b: Territory) -> bool {
    neighbors(a).contains(&b)
}

/// Returns every border once, lower-indexed territory first.
pub fn edges() -> Vec<(Territory, Territory)> {
    let mut out = Vec::with_capacity(BORDER_COUNT);
    for t in ALL_TERRITORIES {
        for &n in neighbors(t) {
            if t < n {
                out.push((t, n));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn border_count() {
        assert_eq!(BORDERS.len(), BORDER_COUNT);
        assert_eq!(edges().len(), BORDER_COUNT);
    }

    #[test]
    fn no_duplicate_borders() {
        let mut seen = HashSet::new();
        for &(a, b) in BORDERS.iter() {
            let key = if a < b { (a, b) } else { (b, a) };
            assert!(seen.insert(key), "duplicate border {:?} - {:?}", a, b);
        }
    }

    #[test]
    fn no_self_adjacency() {
        for &(a, b) in BORDERS.iter() {
            assert_ne!(a, b, "self-border at {:?}", a);
        }
    }

    #[test]
    fn adjacency_symmetry() {
        for t in ALL_TERRITORIES {
            for &n in neighbors(t) {
                assert!(is_adjacent(n, t), "missing reverse border {:?} -> {:?}", n, t);
            }
        }
    }

    #[test]
    fn every_territory_has_a_neighbor() {
        for t in ALL_TERRITORIES {
            assert!(!neighbors(t).is_empty(), "{:?} is isolated", t);
        }
    }

    #[test]
    fn known_adjacencies_sample() {
        assert!(is_adjacent(Alaska, Kamchatka));
        assert!(is_adjacent(Brazil, NorthAfrica));
        assert!(is_adjacent(Greenland, Iceland));
        assert!(is_adjacent(Siam, Indonesia));
        assert!(!is_adjacent(Alaska, Greenland));
        assert!(!is_adjacent(Japan, China));
    }

    #[test]
    fn east_africa_neighbors() {
        assert_eq!(
            neighbors(EastAfrica),
            &[NorthAfrica, Egypt, Congo, SouthAfrica, Madagascar, MiddleEast]
        );
    }
}
