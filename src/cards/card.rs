//! Territory cards and set validation.

use serde::Serialize;

use crate::board::Territory;

/// The printed type of a territory card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardKind {
    Infantry,
    Cavalry,
    Artillery,
}

impl CardKind {
    /// Returns the type assigned to a territory's card by its table index.
    pub const fn for_territory(territory: Territory) -> CardKind {
        match territory as usize % 3 {
            0 => CardKind::Infantry,
            1 => CardKind::Cavalry,
            _ => CardKind::Artillery,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Infantry => "infantry",
            CardKind::Cavalry => "cavalry",
            CardKind::Artillery => "artillery",
        }
    }
}

/// A card in a player's hand: bound to a territory, or a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Card {
    Territory { territory: Territory, kind: CardKind },
    Wildcard,
}

impl Card {
    /// Creates the card for a territory with its table-assigned type.
    pub const fn for_territory(territory: Territory) -> Card {
        Card::Territory {
            territory,
            kind: CardKind::for_territory(territory),
        }
    }

    /// Returns the card type, or None for a wildcard.
    pub const fn kind(self) -> Option<CardKind> {
        match self {
            Card::Territory { kind, .. } => Some(kind),
            Card::Wildcard => None,
        }
    }

    pub const fn is_wildcard(self) -> bool {
        matches!(self, Card::Wildcard)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Territory { territory, kind } => write!(f, "{} ({})", territory, kind.name()),
            Card::Wildcard => f.write_str("wildcard"),
        }
    }
}

/// Returns true if the three cards may be traded in together.
///
/// Accepted: two or three wildcards; one wildcard with any two typed cards
/// (one or two distinct types); or three typed cards that are all the same
/// type or all different.
pub fn is_valid_set(cards: &[Card; 3]) -> bool {
    let kinds: Vec<CardKind> = cards.iter().filter_map(|c| c.kind()).collect();
    let wildcards = cards.len() - kinds.len();

    match wildcards {
        2 | 3 => true,
        1 => {
            let distinct = distinct_kinds(&kinds);
            distinct == 1 || distinct == 2
        }
        _ => {
            let distinct = distinct_kinds(&kinds);
            distinct == 1 || distinct == 3
        }
    }
}

fn distinct_kinds(kinds: &[CardKind]) -> usize {
    let mut seen: Vec<CardKind> = Vec::with_capacity(3);
    for k in kinds {
        if !seen.contains(k) {
            seen.push(*k);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Territory::*;

    const INF: Card = Card::Territory { territory: Alaska, kind: CardKind::Infantry };
    const INF2: Card = Card::Territory { territory: Ontario, kind: CardKind::Infantry };
    const INF3: Card = Card::Territory { territory: Peru, kind: CardKind::Infantry };
    const CAV: Card = Card::Territory { territory: Brazil, kind: CardKind::Cavalry };
    const ART: Card = Card::Territory { territory: Egypt, kind: CardKind::Artillery };
    const WILD: Card = Card::Wildcard;

    #[test]
    fn three_of_a_kind_is_valid() {
        assert!(is_valid_set(&[INF, INF2, INF3]));
    }

    #[test]
    fn one_of_each_is_valid() {
        assert!(is_valid_set(&[INF, CAV, ART]));
    }

    #[test]
    fn wildcard_combinations() {
        assert!(is_valid_set(&[WILD, WILD, INF]));
        assert!(is_valid_set(&[WILD, INF, INF2]));
        assert!(is_valid_set(&[WILD, INF, CAV]));
        assert!(is_valid_set(&[CAV, WILD, ART]));
        assert!(is_valid_set(&[WILD, WILD, WILD]));
    }

    #[test]
    fn pair_plus_odd_card_is_invalid() {
        assert!(!is_valid_set(&[INF, INF2, CAV]));
        assert!(!is_valid_set(&[ART, CAV, CAV]));
    }

    #[test]
    fn territory_kinds_cycle() {
        assert_eq!(CardKind::for_territory(Alaska), CardKind::Infantry);
        assert_eq!(CardKind::for_territory(NorthwestTerritory), CardKind::Cavalry);
        assert_eq!(CardKind::for_territory(Greenland), CardKind::Artillery);
        assert_eq!(Card::for_territory(Alberta).kind(), Some(CardKind::Infantry));
    }

    #[test]
    fn card_json_shape() {
        let json = serde_json::to_value(Card::for_territory(Egypt)).unwrap();
        assert_eq!(json["type"], "territory");
        assert_eq!(json["territory"], "Egypt");
        let wild = serde_json::to_value(Card::Wildcard).unwrap();
        assert_eq!(wild["type"], "wildcard");
    }
}
