//! Line-oriented text protocol.
//!
//! Parses player commands from text and renders structured responses as
//! terminal text or JSON lines.

pub mod parser;
pub mod render;
pub mod response;

pub use parser::{parse_command, Command, ParseError, USAGE};
pub use render::{render_attack, render_board, render_status};
pub use response::Response;
