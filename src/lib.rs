//! Conquest engine library.
//!
//! A two-player territory-conquest game: the static world map, cards, the
//! turn/phase state machine with dice combat, the scripted opponent, and a
//! line-oriented text protocol for driving a game from a terminal.

pub mod board;
pub mod bot;
pub mod cards;
pub mod game;
pub mod protocol;
pub mod selfplay;
pub mod session;
