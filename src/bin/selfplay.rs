//! Bot-vs-bot self-play CLI.
//!
//! Plays games with the scripted policy in both seats and writes one JSON
//! record per game (JSONL) to stdout or a file. A summary goes to stderr.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use conquest::game::DEFAULT_BOT_ATTACK_LIMIT;
use conquest::selfplay::{self, SelfPlayConfig};

#[derive(Debug, Parser)]
#[command(name = "selfplay", version, about = "Bot-vs-bot self-play")]
struct Args {
    /// Number of games to play.
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Turns before a game is abandoned.
    #[arg(long, default_value_t = 500)]
    max_turns: u32,

    /// Maximum attacks per bot turn.
    #[arg(long, default_value_t = DEFAULT_BOT_ATTACK_LIMIT)]
    bot_attack_limit: usize,

    /// Number of parallel threads.
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Base random seed, 0 for entropy.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output file path (default: stdout).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Suppress the summary.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = SelfPlayConfig {
        num_games: args.games,
        max_turns: args.max_turns,
        bot_attack_limit: args.bot_attack_limit,
        threads: args.threads,
        seed: args.seed,
    };

    if !args.quiet {
        eprintln!(
            "Self-play: {} games, max {} turns, attack limit {}, {} threads",
            config.num_games, config.max_turns, config.bot_attack_limit, config.threads
        );
    }

    let start = Instant::now();
    let games = selfplay::run_self_play(&config)?;
    let elapsed = start.elapsed();

    if !args.quiet {
        eprintln!(
            "Completed {} games in {:.1}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        eprintln!("{}", selfplay::summarize(&games));
    }

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            selfplay::write_jsonl(&games, &mut writer)?;
            if !args.quiet {
                eprintln!("Wrote {} games to {}", games.len(), path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer)?;
        }
    }

    Ok(())
}
