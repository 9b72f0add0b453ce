//! Scripted opponent: board heuristics, the turn policy, and the action log
//! the presentation layer replays.

pub mod heuristic;
pub mod log;
pub mod policy;

pub use heuristic::{best_attack, deploy_target, find_trade, fortify_plan, AttackChoice, FortifyPlan};
pub use log::{ActionLog, BotAction, LoggedAction};
pub use policy::{play_turn, TurnSummary};
