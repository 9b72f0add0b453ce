//! The turn/phase state machine.
//!
//! `Game` owns the authoritative mutable state (ownership, armies, current
//! player, phase, hands, deck) and exposes one method per player action.
//! Every method validates against the current phase and player before
//! touching anything; a rejected call returns a `RuleError` and leaves the
//! game unchanged.

pub mod combat;
pub mod config;
pub mod economy;
pub mod error;
pub mod phase;
pub mod player;
pub mod snapshot;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::board::{connected, is_adjacent, BoardState, PlayerId, Territory, ALL_PLAYERS, ALL_TERRITORIES};
use crate::bot::{self, ActionLog, LoggedAction, TurnSummary};
use crate::cards::{is_valid_set, Card, Deck};

pub use combat::{AttackOutcome, Casualties, MAX_ATTACK_DICE, MAX_DEFENSE_DICE};
pub use config::{GameConfig, DEFAULT_BOT_ATTACK_LIMIT};
pub use economy::TradeLadder;
pub use error::RuleError;
pub use phase::{transition, PendingMove, Phase, PhaseKind, Transition};
pub use player::Player;
pub use snapshot::GameSnapshot;

/// An internal inconsistency that was detected and corrected by forcing a
/// safe phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    pub detected_in: PhaseKind,
    pub forced_to: PhaseKind,
    pub detail: String,
}

/// A single two-player game.
pub struct Game {
    config: GameConfig,
    rng: SmallRng,
    board: BoardState,
    players: [Player; 2],
    current: PlayerId,
    phase: Phase,
    reinforcements: u32,
    has_fortified: bool,
    ladder: TradeLadder,
    deck: Deck,
    bot_log: ActionLog,
    anomalies: Vec<Anomaly>,
    turn: u32,
}

impl Game {
    /// Starts a new game: territories are shuffled and dealt round-robin
    /// with one army each, and the human opens in the deploy phase.
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let board = deal_board(&mut rng);
        let deck = Deck::shuffled(&mut rng);
        Game::assemble(config, rng, board, deck)
    }

    /// Starts a new game with default options and a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Game::new(GameConfig::seeded(seed))
    }

    /// Starts a game from a prepared position instead of a random deal.
    /// The human opens in the deploy phase.
    pub fn with_board(config: GameConfig, board: BoardState) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let deck = Deck::shuffled(&mut rng);
        Game::assemble(config, rng, board, deck)
    }

    fn assemble(config: GameConfig, rng: SmallRng, board: BoardState, deck: Deck) -> Self {
        let reinforcements = economy::reinforcements(&board, PlayerId::Human);
        let mut game = Game {
            config,
            rng,
            board,
            players: [Player::new(PlayerId::Human), Player::new(PlayerId::Bot)],
            current: PlayerId::Human,
            phase: Phase::Deploy,
            reinforcements,
            has_fortified: false,
            ladder: TradeLadder::default(),
            deck,
            bot_log: ActionLog::default(),
            anomalies: Vec::new(),
            turn: 1,
        };
        game.check_game_over();
        info!(reinforcements, "new game");
        game
    }

    /// Discards all state and deals a fresh game from the same random source.
    pub fn restart(&mut self) {
        let board = deal_board(&mut self.rng);
        let deck = Deck::shuffled(&mut self.rng);
        self.reinforcements = economy::reinforcements(&board, PlayerId::Human);
        self.board = board;
        self.deck = deck;
        self.players = [Player::new(PlayerId::Human), Player::new(PlayerId::Bot)];
        self.current = PlayerId::Human;
        self.phase = Phase::Deploy;
        self.has_fortified = false;
        self.ladder = TradeLadder::default();
        self.bot_log.clear();
        self.anomalies.clear();
        self.turn = 1;
        info!("game restarted");
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Reinforcements still to be placed in the current deploy phase.
    pub fn reinforcements_remaining(&self) -> u32 {
        self.reinforcements
    }

    /// Reinforcements `player` would receive at the start of a turn now.
    pub fn reinforcements_for(&self, player: PlayerId) -> u32 {
        economy::reinforcements(&self.board, player)
    }

    pub fn has_fortified(&self) -> bool {
        self.has_fortified
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn hand(&self, id: PlayerId) -> &[Card] {
        &self.players[id.index()].hand
    }

    pub fn pending_move(&self) -> Option<PendingMove> {
        self.phase.pending_move()
    }

    /// Bonus the next successful card trade will pay.
    pub fn trade_bonus(&self) -> u32 {
        self.ladder.current()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Turns started so far, counting the opening turn as 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The player holding every territory, once the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.phase != Phase::GameOver {
            return None;
        }
        self.board.sole_owner()
    }

    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// Returns and clears the recorded anomalies.
    pub fn take_anomalies(&mut self) -> Vec<Anomaly> {
        std::mem::take(&mut self.anomalies)
    }

    pub fn bot_log(&self) -> &ActionLog {
        &self.bot_log
    }

    /// Pops the oldest unreplayed bot action, if any.
    pub fn pop_bot_action(&mut self) -> Option<LoggedAction> {
        self.bot_log.pop_front()
    }

    /// Removes and returns every unreplayed bot action in order.
    pub fn drain_bot_actions(&mut self) -> Vec<LoggedAction> {
        self.bot_log.drain()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    pub(crate) fn bot_log_mut(&mut self) -> &mut ActionLog {
        &mut self.bot_log
    }

    pub(crate) fn rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    #[cfg(test)]
    pub(crate) fn hand_mut(&mut self, id: PlayerId) -> &mut Vec<Card> {
        &mut self.players[id.index()].hand
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Places `count` reinforcements on an owned territory.
    ///
    /// Returns the reinforcements left afterwards. Does not advance the
    /// phase when they reach zero.
    pub fn deploy(&mut self, player: PlayerId, territory: Territory, count: u32) -> Result<u32, RuleError> {
        self.audit();
        self.ensure_turn(player, "deploy", PhaseKind::Deploy)?;
        if !self.board.owns(player, territory) {
            return Err(RuleError::NotOwner(territory));
        }
        if count == 0 {
            return Err(RuleError::ZeroArmies);
        }
        if count > self.reinforcements {
            return Err(RuleError::ExceedsReinforcements {
                requested: count,
                remaining: self.reinforcements,
            });
        }

        self.board.armies[territory as usize] += count;
        self.reinforcements -= count;
        debug!(%player, %territory, count, remaining = self.reinforcements, "deploy");
        Ok(self.reinforcements)
    }

    /// Attacks `to` from `from` rolling `dice` attacker dice.
    ///
    /// On conquest the game enters the attack-move phase, unless the
    /// defender has nothing left, in which case the committed attackers
    /// advance and the game ends.
    pub fn attack(
        &mut self,
        player: PlayerId,
        from: Territory,
        to: Territory,
        dice: u32,
    ) -> Result<AttackOutcome, RuleError> {
        self.audit();
        self.ensure_turn(player, "attack", PhaseKind::Attack)?;
        if !self.board.owns(player, from) {
            return Err(RuleError::NotOwner(from));
        }
        if self.board.owns(player, to) {
            return Err(RuleError::OwnTerritory(to));
        }
        if !is_adjacent(from, to) {
            return Err(RuleError::NotAdjacent { from, to });
        }
        if !(1..=MAX_ATTACK_DICE).contains(&dice) {
            return Err(RuleError::InvalidDiceCount(dice));
        }
        let available = self.board.armies_at(from);
        if available <= dice {
            return Err(RuleError::NotEnoughArmies {
                territory: from,
                available,
                needed: dice,
            });
        }

        let defending = combat::defender_dice(self.board.armies_at(to));
        let attacker_rolls = combat::roll_dice(dice, &mut self.rng);
        let defender_rolls = combat::roll_dice(defending, &mut self.rng);
        let losses = combat::resolve_rolls(&attacker_rolls, &defender_rolls);

        self.board.armies[from as usize] -= losses.attacker;
        let left = self.board.armies_at(to).saturating_sub(losses.defender);
        self.board.set_armies(to, left);

        let mut outcome = AttackOutcome {
            from,
            to,
            attacker_rolls,
            defender_rolls,
            attacker_losses: losses.attacker,
            defender_losses: losses.defender,
            conquered: false,
            pending_move: None,
            game_over: false,
        };
        debug!(
            %player, %from, %to,
            attacker = ?outcome.attacker_rolls,
            defender = ?outcome.defender_rolls,
            "attack"
        );

        if left == 0 {
            let defender = self.board.owner_of(to);
            self.board.set_owner(to, player);
            self.board.set_armies(to, 0);
            self.players[player.index()].conquered_this_turn = true;
            outcome.conquered = true;
            info!(%player, %from, %to, "territory conquered");

            let pending = PendingMove {
                from,
                to,
                min: dice,
                max: self.board.armies_at(from) - 1,
            };
            if self.board.territory_count(defender) == 0 {
                self.board.armies[from as usize] -= pending.min;
                self.board.set_armies(to, pending.min);
                self.advance(Transition::EndGame, Phase::GameOver)?;
                outcome.game_over = true;
                info!(winner = %player, "game over");
            } else {
                self.advance(Transition::Conquer, Phase::AttackMove(pending))?;
                outcome.pending_move = Some(pending);
            }
        }

        Ok(outcome)
    }

    /// Completes the mandatory move after a conquest.
    pub fn move_after_conquest(&mut self, player: PlayerId, count: u32) -> Result<PendingMove, RuleError> {
        self.audit();
        self.ensure_turn(player, "move after conquest", PhaseKind::AttackMove)?;
        let pending = match self.phase {
            Phase::AttackMove(m) => m,
            other => {
                return Err(RuleError::WrongPhase {
                    action: "move after conquest",
                    phase: other.kind(),
                })
            }
        };
        if !pending.allows(count) {
            return Err(RuleError::MoveOutOfRange {
                count,
                min: pending.min,
                max: pending.max,
            });
        }

        self.board.armies[pending.from as usize] -= count;
        self.board.set_armies(pending.to, count);
        self.advance(Transition::CompleteMove, Phase::Attack)?;
        debug!(%player, from = %pending.from, to = %pending.to, count, "conquest move");
        Ok(pending)
    }

    /// Moves armies between two owned territories joined by owned territory.
    /// Allowed once per turn.
    pub fn fortify(&mut self, player: PlayerId, from: Territory, to: Territory, count: u32) -> Result<(), RuleError> {
        self.audit();
        self.ensure_turn(player, "fortify", PhaseKind::Fortify)?;
        if self.has_fortified {
            return Err(RuleError::AlreadyFortified);
        }
        if from == to {
            return Err(RuleError::SameTerritory);
        }
        if !self.board.owns(player, from) {
            return Err(RuleError::NotOwner(from));
        }
        if !self.board.owns(player, to) {
            return Err(RuleError::NotOwner(to));
        }
        if count == 0 {
            return Err(RuleError::ZeroArmies);
        }
        let available = self.board.armies_at(from);
        if available <= count {
            return Err(RuleError::NotEnoughArmies {
                territory: from,
                available,
                needed: count,
            });
        }
        if !connected(from, to, player, &self.board) {
            return Err(RuleError::NotConnected { from, to });
        }

        self.board.armies[from as usize] -= count;
        self.board.armies[to as usize] += count;
        self.has_fortified = true;
        debug!(%player, %from, %to, count, "fortify");
        Ok(())
    }

    /// Trades three cards from `player`'s hand for the current ladder bonus.
    ///
    /// Returns the bonus added to the remaining reinforcements.
    pub fn trade_in_cards(&mut self, player: PlayerId, indices: [usize; 3]) -> Result<u32, RuleError> {
        self.audit();
        self.ensure_turn(player, "trade in cards", PhaseKind::Deploy)?;
        let hand = &self.players[player.index()].hand;
        for &index in &indices {
            if index >= hand.len() {
                return Err(RuleError::CardIndexOutOfRange {
                    index,
                    hand_size: hand.len(),
                });
            }
        }
        let [a, b, c] = indices;
        if a == b || b == c || a == c {
            return Err(RuleError::DuplicateCardIndex);
        }
        if !is_valid_set(&[hand[a], hand[b], hand[c]]) {
            return Err(RuleError::InvalidCardSet);
        }

        let bonus = self.ladder.redeem();
        self.reinforcements += bonus;
        self.players[player.index()].remove_cards(indices);
        info!(%player, bonus, next = self.ladder.current(), "cards traded");
        Ok(bonus)
    }

    /// Advances the phase.
    ///
    /// Deploy moves on only once every reinforcement is placed. Ending the
    /// fortify phase ends the turn: the ending player draws a card if they
    /// conquered, the other player starts deploying, and the bot plays its
    /// whole turn immediately when automatic bot turns are enabled.
    pub fn next_phase(&mut self) -> Result<PhaseKind, RuleError> {
        self.audit();
        match self.phase {
            Phase::GameOver => return Err(RuleError::GameOver),
            Phase::AttackMove(_) => return Err(RuleError::ConquestMovePending),
            Phase::Deploy => {
                if self.reinforcements != 0 {
                    return Err(RuleError::ReinforcementsRemaining {
                        remaining: self.reinforcements,
                    });
                }
                self.advance(Transition::BeginAttack, Phase::Attack)?;
            }
            Phase::Attack => self.advance(Transition::BeginFortify, Phase::Fortify)?,
            Phase::Fortify => self.end_turn()?,
        }
        debug!(phase = %self.phase.kind(), player = %self.current, "phase advanced");
        Ok(self.phase.kind())
    }

    /// Plays the bot's turn synchronously. Fails unless the bot is to move.
    pub fn run_bot_turn(&mut self) -> Result<TurnSummary, RuleError> {
        self.audit();
        if self.phase == Phase::GameOver {
            return Err(RuleError::GameOver);
        }
        if !self.players[self.current.index()].is_bot {
            return Err(RuleError::NotBotTurn);
        }
        Ok(bot::play_turn(self))
    }

    /// Ends the game if either player holds no territory. Returns the
    /// winner once the game is over.
    pub fn check_game_over(&mut self) -> Option<PlayerId> {
        if self.phase != Phase::GameOver
            && ALL_PLAYERS.iter().any(|&p| self.board.territory_count(p) == 0)
            && self.advance(Transition::EndGame, Phase::GameOver).is_ok()
        {
            info!(winner = ?self.board.sole_owner(), "game over");
        }
        self.winner()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn end_turn(&mut self) -> Result<(), RuleError> {
        let ending = self.current;
        let seat = &mut self.players[ending.index()];
        if seat.conquered_this_turn {
            if let Some(card) = self.deck.draw() {
                debug!(player = %ending, %card, "card drawn");
                seat.hand.push(card);
            }
        }
        seat.conquered_this_turn = false;

        self.advance(Transition::EndTurn, Phase::Deploy)?;
        self.current = ending.opponent();
        self.reinforcements = economy::reinforcements(&self.board, self.current);
        self.has_fortified = false;
        self.turn += 1;
        info!(player = %self.current, turn = self.turn, reinforcements = self.reinforcements, "turn started");

        if self.players[self.current.index()].is_bot && self.config.auto_bot_turn {
            bot::play_turn(self);
        }
        Ok(())
    }

    /// Checks that `player` may act now in the given phase.
    fn ensure_turn(&self, player: PlayerId, action: &'static str, phase: PhaseKind) -> Result<(), RuleError> {
        if self.phase == Phase::GameOver {
            return Err(RuleError::GameOver);
        }
        if player != self.current {
            return Err(RuleError::NotYourTurn { current: self.current });
        }
        if self.phase.kind() != phase {
            return Err(RuleError::WrongPhase {
                action,
                phase: self.phase.kind(),
            });
        }
        Ok(())
    }

    /// Moves to `next` if the transition table allows it from here.
    fn advance(&mut self, requested: Transition, next: Phase) -> Result<(), RuleError> {
        match transition(self.phase.kind(), requested) {
            Some(kind) if kind == next.kind() => {
                self.phase = next;
                Ok(())
            }
            _ => Err(RuleError::WrongPhase {
                action: requested.action(),
                phase: self.phase.kind(),
            }),
        }
    }

    /// Detects phase/board disagreements and forces a safe phase.
    fn audit(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        if let Some(&loser) = ALL_PLAYERS.iter().find(|&&p| self.board.territory_count(p) == 0) {
            self.record_anomaly(PhaseKind::GameOver, format!("{} holds no territory", loser));
            // Forced correction; bypasses the transition table.
            self.phase = Phase::GameOver;
            return;
        }
        if let Phase::AttackMove(pending) = self.phase {
            if let Some(detail) = self.pending_move_problem(&pending) {
                let to = pending.to;
                if self.board.owns(self.current, to) && self.board.armies_at(to) == 0 {
                    if self.board.owns(self.current, pending.from) && self.board.armies_at(pending.from) > 1 {
                        self.board.armies[pending.from as usize] -= 1;
                    }
                    self.board.set_armies(to, 1);
                }
                self.record_anomaly(PhaseKind::Attack, detail);
                self.phase = Phase::Attack;
            }
        }
    }

    fn pending_move_problem(&self, pending: &PendingMove) -> Option<String> {
        if !self.board.owns(self.current, pending.from) {
            return Some(format!("conquest source {} is not held by {}", pending.from, self.current));
        }
        if !self.board.owns(self.current, pending.to) {
            return Some(format!("conquered {} is not held by {}", pending.to, self.current));
        }
        if pending.min == 0 || pending.min > pending.max {
            return Some(format!("empty conquest move range {}..={}", pending.min, pending.max));
        }
        let available = self.board.armies_at(pending.from);
        if available <= pending.max {
            return Some(format!(
                "{} has {} armies, cannot move up to {}",
                pending.from, available, pending.max
            ));
        }
        None
    }

    fn record_anomaly(&mut self, forced_to: PhaseKind, detail: String) {
        let detected_in = self.phase.kind();
        warn!(%detected_in, %forced_to, %detail, "phase anomaly corrected");
        self.anomalies.push(Anomaly {
            detected_in,
            forced_to,
            detail,
        });
    }
}

/// Shuffles the territories and deals them round-robin.
fn deal_board(rng: &mut SmallRng) -> BoardState {
    let mut order = ALL_TERRITORIES;
    order.shuffle(rng);
    BoardState::deal(&order)
}
