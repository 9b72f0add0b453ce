//! Plain-text rendering of game state for the terminal.

use std::fmt::Write;

use crate::board::{PlayerId, ALL_CONTINENTS};
use crate::game::{AttackOutcome, GameSnapshot};

/// Renders the board grouped by continent, one territory per line.
pub fn render_board(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    for (continent, view) in ALL_CONTINENTS.iter().zip(&snapshot.continents) {
        let held = match view.holder {
            Some(p) => format!(" held by {}", p),
            None => String::new(),
        };
        let _ = writeln!(out, "{} (+{}){}", continent, view.bonus, held);
        for &t in continent.territories() {
            let tv = &snapshot.territories[t as usize];
            let marker = match tv.owner {
                PlayerId::Human => 'H',
                PlayerId::Bot => 'B',
            };
            let _ = writeln!(out, "  {:<22} {} {} {:>3}", tv.name.name(), tv.abbr, marker, tv.armies);
        }
    }
    out
}

/// Renders the turn summary line plus player totals.
pub fn render_status(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "turn {} | {} | {} to move",
        snapshot.turn, snapshot.phase, snapshot.current_player
    );
    if snapshot.reinforcements > 0 {
        let _ = write!(out, " | {} reinforcements", snapshot.reinforcements);
    }
    if let Some(m) = snapshot.pending_move {
        let _ = write!(out, " | move {}..={} from {} into {}", m.min, m.max, m.from, m.to);
    }
    if snapshot.has_fortified {
        out.push_str(" | fortified");
    }
    if let Some(w) = snapshot.winner {
        let _ = write!(out, " | {} wins", w);
    }
    for p in &snapshot.players {
        let _ = write!(
            out,
            "\n{}: {} territories, {} armies, {} cards",
            p.id,
            p.territories,
            p.armies,
            p.hand.len()
        );
    }
    out
}

/// Renders the dice and result of one attack.
pub fn render_attack(outcome: &AttackOutcome) -> String {
    let mut out = format!(
        "{} -> {}: rolled {:?} vs {:?}, attacker lost {}, defender lost {}",
        outcome.from,
        outcome.to,
        outcome.attacker_rolls,
        outcome.defender_rolls,
        outcome.attacker_losses,
        outcome.defender_losses
    );
    if outcome.conquered {
        let _ = write!(out, "\nconquered {}", outcome.to);
    }
    if let Some(m) = outcome.pending_move {
        let _ = write!(out, "; move {} to {} armies in with 'move <n>'", m.min, m.max);
    }
    if outcome.game_over {
        out.push_str("\ngame over");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Territory;
    use crate::game::{Game, PendingMove};

    #[test]
    fn board_lists_every_territory() {
        let game = Game::with_seed(1);
        let text = render_board(&game.snapshot());
        assert_eq!(text.lines().count(), 42 + 6);
        assert!(text.contains("North America (+5)"));
        assert!(text.contains("Eastern Australia"));
    }

    #[test]
    fn status_mentions_phase_and_player() {
        let game = Game::with_seed(1);
        let text = render_status(&game.snapshot());
        assert!(text.starts_with("turn 1 | DEPLOY | human to move"));
        assert!(text.contains("bot: 21 territories"));
    }

    #[test]
    fn attack_text() {
        let outcome = AttackOutcome {
            from: Territory::Alaska,
            to: Territory::Kamchatka,
            attacker_rolls: vec![6, 5, 4],
            defender_rolls: vec![1],
            attacker_losses: 0,
            defender_losses: 1,
            conquered: true,
            pending_move: Some(PendingMove {
                from: Territory::Alaska,
                to: Territory::Kamchatka,
                min: 3,
                max: 3,
            }),
            game_over: false,
        };
        let text = render_attack(&outcome);
        assert!(text.starts_with("Alaska -> Kamchatka: rolled [6, 5, 4] vs [1]"));
        assert!(text.contains("conquered Kamchatka"));
    }
}
