//! Bot-vs-bot self-play.
//!
//! Plays whole games with the scripted policy in both seats and records a
//! per-turn summary of each. Independent games run in parallel on a rayon
//! pool; each game gets its own seeded random source so a run is
//! reproducible from its base seed.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::{PlayerId, ALL_PLAYERS};
use crate::bot::{self, TurnSummary};
use crate::game::{Game, GameConfig, DEFAULT_BOT_ATTACK_LIMIT};

/// Configuration for a self-play run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Turns (one player each) before a game is abandoned as undecided.
    pub max_turns: u32,
    /// Attack cap per bot turn.
    pub bot_attack_limit: usize,
    /// Worker threads; 1 plays sequentially.
    pub threads: usize,
    /// Base seed, 0 for entropy. Game `i` uses `seed + i`.
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            max_turns: 500,
            bot_attack_limit: DEFAULT_BOT_ATTACK_LIMIT,
            threads: 4,
            seed: 0,
        }
    }
}

/// One played turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub player: PlayerId,
    pub summary: TurnSummary,
    /// Territories held by (human seat, bot seat) after the turn.
    pub territories: [usize; 2],
    /// Armies on the board for (human seat, bot seat) after the turn.
    pub armies: [u32; 2],
}

/// A complete self-play game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub seed: Option<u64>,
    pub winner: Option<PlayerId>,
    pub turns: u32,
    /// True when the game hit `max_turns` or stopped making progress.
    pub abandoned: bool,
    pub anomalies: usize,
    pub history: Vec<TurnRecord>,
}

/// Seed for game `game_id`, or None for entropy.
fn game_seed(config: &SelfPlayConfig, game_id: usize) -> Option<u64> {
    (config.seed != 0).then(|| config.seed.wrapping_add(game_id as u64))
}

/// Plays one game to completion or to the turn cap.
pub fn play_game(config: &SelfPlayConfig, game_id: usize) -> GameRecord {
    let seed = game_seed(config, game_id);
    let mut game = Game::new(GameConfig {
        seed,
        auto_bot_turn: false,
        bot_attack_limit: config.bot_attack_limit,
    });
    let mut history = Vec::new();
    let mut abandoned = false;

    while !game.is_over() {
        if game.turn() > config.max_turns {
            abandoned = true;
            break;
        }
        let player = game.current_player();
        let turn = game.turn();
        let summary = bot::play_turn(&mut game);
        let board = game.board();
        history.push(TurnRecord {
            turn,
            player,
            summary,
            territories: ALL_PLAYERS.map(|p| board.territory_count(p)),
            armies: ALL_PLAYERS.map(|p| board.total_armies(p)),
        });
        if !summary.ended_turn && !game.is_over() {
            warn!(game_id, turn, "turn did not finish, abandoning game");
            abandoned = true;
            break;
        }
    }

    debug!(game_id, turns = game.turn(), winner = ?game.winner(), "game finished");
    GameRecord {
        game_id,
        seed,
        winner: game.winner(),
        turns: game.turn(),
        abandoned,
        anomalies: game.anomalies().len(),
        history,
    }
}

/// Plays `config.num_games` games, in parallel when `config.threads > 1`.
///
/// Records are returned in game-id order.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, rayon::ThreadPoolBuildError> {
    if config.threads <= 1 {
        return Ok((0..config.num_games).map(|i| timed_game(config, i, None)).collect());
    }

    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    let completed = AtomicUsize::new(0);
    let games = pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| timed_game(config, i, Some(&completed)))
            .collect()
    });
    Ok(games)
}

fn timed_game(config: &SelfPlayConfig, game_id: usize, completed: Option<&AtomicUsize>) -> GameRecord {
    let start = Instant::now();
    let game = play_game(config, game_id);
    let n = match completed {
        Some(c) => c.fetch_add(1, Ordering::Relaxed) + 1,
        None => game_id + 1,
    };
    let outcome = match game.winner {
        Some(w) => format!("{} wins", w),
        None => "undecided".to_string(),
    };
    info!(
        "game {}/{}: {} after {} turns ({:.2}s)",
        n,
        config.num_games,
        outcome,
        game.turns,
        start.elapsed().as_secs_f64()
    );
    game
}

/// Writes game records as JSONL, one game per line.
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Aggregate results of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub games: usize,
    pub human_seat_wins: usize,
    pub bot_seat_wins: usize,
    pub abandoned: usize,
    pub avg_turns: f64,
    pub anomalies: usize,
}

pub fn summarize(games: &[GameRecord]) -> Summary {
    let mut s = Summary {
        games: games.len(),
        ..Summary::default()
    };
    let mut turns = 0u64;
    for g in games {
        match g.winner {
            Some(PlayerId::Human) => s.human_seat_wins += 1,
            Some(PlayerId::Bot) => s.bot_seat_wins += 1,
            None => {}
        }
        if g.abandoned {
            s.abandoned += 1;
        }
        s.anomalies += g.anomalies;
        turns += g.turns as u64;
    }
    s.avg_turns = turns as f64 / games.len().max(1) as f64;
    s
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: usize| 100.0 * n as f64 / self.games.max(1) as f64;
        writeln!(f, "=== Self-Play Summary ===")?;
        writeln!(f, "Games: {}", self.games)?;
        writeln!(f, "Avg turns/game: {:.1}", self.avg_turns)?;
        writeln!(f, "First seat wins: {} ({:.1}%)", self.human_seat_wins, pct(self.human_seat_wins))?;
        writeln!(f, "Second seat wins: {} ({:.1}%)", self.bot_seat_wins, pct(self.bot_seat_wins))?;
        writeln!(f, "Abandoned: {}", self.abandoned)?;
        write!(f, "Anomalies: {}", self.anomalies)
    }
}
