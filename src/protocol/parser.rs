//! Line command parser.
//!
//! Parses one line of player input into a structured `Command` that the
//! session dispatches on. Territories are given by abbreviation (`kam`) or
//! by name, with `-` or `_` standing in for spaces (`north-africa`).

use crate::board::Territory;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `deploy <territory> <count>`
    Deploy { territory: Territory, count: u32 },

    /// `attack <from> <to> <dice>`
    Attack { from: Territory, to: Territory, dice: u32 },

    /// `move <count>`: the mandatory move after a conquest.
    Move { count: u32 },

    /// `fortify <from> <to> <count>`
    Fortify { from: Territory, to: Territory, count: u32 },

    /// `trade <i> <j> <k>`: hand indices, zero-based.
    Trade { indices: [usize; 3] },

    /// `next` (or `pass`): advance the phase.
    Next,

    Board,
    Status,
    Hand,

    /// Full game snapshot as JSON.
    State,

    /// Pop one logged bot action.
    Log,

    /// Drain every logged bot action.
    Replay,

    Restart,

    /// Play the bot's turn now, when automatic bot turns are off.
    Bot,

    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command: '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown territory: '{0}'")]
    UnknownTerritory(String),

    #[error("invalid number: '{0}'")]
    InvalidNumber(String),
}

/// One-line usage text for every command, in help order.
pub const USAGE: &[&str] = &[
    "deploy <territory> <count>",
    "attack <from> <to> <dice>",
    "move <count>",
    "fortify <from> <to> <count>",
    "trade <i> <j> <k>",
    "next | pass",
    "board",
    "status",
    "hand",
    "state",
    "log",
    "replay",
    "restart",
    "bot",
    "help",
    "quit",
];

/// Parses a single line of input.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let args = &tokens[1..];
    let keyword = tokens[0].to_ascii_lowercase();

    let cmd = match keyword.as_str() {
        "deploy" => parse_deploy(args)?,
        "attack" => parse_attack(args)?,
        "move" => match args {
            [count] => Command::Move { count: parse_number(count)? },
            _ => return Err(ParseError::Usage("move <count>")),
        },
        "fortify" => parse_fortify(args)?,
        "trade" => parse_trade(args)?,
        "next" | "pass" => Command::Next,
        "board" => Command::Board,
        "status" => Command::Status,
        "hand" => Command::Hand,
        "state" => Command::State,
        "log" => Command::Log,
        "replay" => Command::Replay,
        "restart" => Command::Restart,
        "bot" => Command::Bot,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(ParseError::UnknownCommand(tokens[0].to_string())),
    };
    Ok(Some(cmd))
}

/// Parses `deploy <territory> <count>`. The territory may span several
/// words.
fn parse_deploy(args: &[&str]) -> Result<Command, ParseError> {
    let (count, name) = match args.split_last() {
        Some((count, name)) if !name.is_empty() => (count, name),
        _ => return Err(ParseError::Usage("deploy <territory> <count>")),
    };
    Ok(Command::Deploy {
        territory: parse_territory(&name.join(" "))?,
        count: parse_number(count)?,
    })
}

/// Parses `attack <from> <to> <dice>`.
fn parse_attack(args: &[&str]) -> Result<Command, ParseError> {
    match args {
        [from, to, dice] => Ok(Command::Attack {
            from: parse_territory(from)?,
            to: parse_territory(to)?,
            dice: parse_number(dice)?,
        }),
        _ => Err(ParseError::Usage("attack <from> <to> <dice>")),
    }
}

/// Parses `fortify <from> <to> <count>`.
fn parse_fortify(args: &[&str]) -> Result<Command, ParseError> {
    match args {
        [from, to, count] => Ok(Command::Fortify {
            from: parse_territory(from)?,
            to: parse_territory(to)?,
            count: parse_number(count)?,
        }),
        _ => Err(ParseError::Usage("fortify <from> <to> <count>")),
    }
}

/// Parses `trade <i> <j> <k>`.
fn parse_trade(args: &[&str]) -> Result<Command, ParseError> {
    match args {
        [i, j, k] => Ok(Command::Trade {
            indices: [parse_number(i)?, parse_number(j)?, parse_number(k)?],
        }),
        _ => Err(ParseError::Usage("trade <i> <j> <k>")),
    }
}

fn parse_territory(token: &str) -> Result<Territory, ParseError> {
    Territory::lookup(token).ok_or_else(|| ParseError::UnknownTerritory(token.to_string()))
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Territory::*;

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   \t"), Ok(None));
        assert_eq!(parse_command("# setup"), Ok(None));
    }

    #[test]
    fn simple_keywords() {
        assert_eq!(parse_command("next"), Ok(Some(Command::Next)));
        assert_eq!(parse_command("pass"), Ok(Some(Command::Next)));
        assert_eq!(parse_command("QUIT"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("state"), Ok(Some(Command::State)));
        assert_eq!(parse_command("replay"), Ok(Some(Command::Replay)));
    }

    #[test]
    fn deploy_by_abbreviation_and_name() {
        assert_eq!(
            parse_command("deploy kam 3"),
            Ok(Some(Command::Deploy { territory: Kamchatka, count: 3 }))
        );
        assert_eq!(
            parse_command("deploy North Africa 2"),
            Ok(Some(Command::Deploy { territory: NorthAfrica, count: 2 }))
        );
        assert_eq!(
            parse_command("deploy north-africa 2"),
            Ok(Some(Command::Deploy { territory: NorthAfrica, count: 2 }))
        );
    }

    #[test]
    fn attack_and_fortify() {
        assert_eq!(
            parse_command("attack ala kam 3"),
            Ok(Some(Command::Attack { from: Alaska, to: Kamchatka, dice: 3 }))
        );
        assert_eq!(
            parse_command("fortify bra naf 4"),
            Ok(Some(Command::Fortify { from: Brazil, to: NorthAfrica, count: 4 }))
        );
    }

    #[test]
    fn trade_indices() {
        assert_eq!(parse_command("trade 0 2 4"), Ok(Some(Command::Trade { indices: [0, 2, 4] })));
    }

    #[test]
    fn malformed_lines() {
        assert_eq!(parse_command("deploy 3"), Err(ParseError::Usage("deploy <territory> <count>")));
        assert_eq!(parse_command("attack ala kam"), Err(ParseError::Usage("attack <from> <to> <dice>")));
        assert_eq!(parse_command("move"), Err(ParseError::Usage("move <count>")));
        assert_eq!(
            parse_command("deploy atlantis 3"),
            Err(ParseError::UnknownTerritory("atlantis".to_string()))
        );
        assert_eq!(
            parse_command("move -1"),
            Err(ParseError::InvalidNumber("-1".to_string()))
        );
        assert_eq!(
            parse_command("foobar"),
            Err(ParseError::UnknownCommand("foobar".to_string()))
        );
    }

    #[test]
    fn every_command_has_usage() {
        assert_eq!(USAGE.len(), 16);
    }
}
