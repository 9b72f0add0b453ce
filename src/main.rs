//! Conquest -- play a territory-conquest game against the bot from a
//! terminal.
//!
//! Reads one command per line from stdin and writes one response per
//! command to stdout, as text or as JSON lines. Diagnostics go to stderr
//! and are controlled by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use conquest::game::{GameConfig, DEFAULT_BOT_ATTACK_LIMIT};
use conquest::protocol::{parse_command, Command, Response};
use conquest::session::Session;

#[derive(Debug, Parser)]
#[command(name = "conquest", version, about = "Territory conquest against a scripted bot")]
struct Args {
    /// Seed for the deal and the dice; omitted draws from entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Emit one JSON object per response instead of text.
    #[arg(long)]
    json: bool,

    /// Do not play the bot's turn automatically; use the `bot` command.
    #[arg(long)]
    no_auto_bot: bool,

    /// Maximum attacks the bot makes in one turn.
    #[arg(long, default_value_t = DEFAULT_BOT_ATTACK_LIMIT)]
    bot_attack_limit: usize,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn emit<W: Write>(out: &mut W, response: &Response, json: bool) -> io::Result<()> {
    if json {
        writeln!(out, "{}", response.to_json())?;
    } else {
        writeln!(out, "{}", response)?;
    }
    out.flush()
}

/// Runs the command loop until `quit` or end of input.
fn main() -> io::Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut session = Session::new(GameConfig {
        seed: args.seed,
        auto_bot_turn: !args.no_auto_bot,
        bot_attack_limit: args.bot_attack_limit,
    });

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !args.json {
        let status = session.execute(Command::Status);
        emit(&mut out, &status, false)?;
    }

    for line in stdin.lock().lines() {
        let line = line?;
        let response = match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => {
                emit(&mut out, &Response::Bye, args.json)?;
                break;
            }
            Ok(Some(cmd)) => session.execute(cmd),
            Err(e) => Response::error(e),
        };
        emit(&mut out, &response, args.json)?;
    }

    Ok(())
}
