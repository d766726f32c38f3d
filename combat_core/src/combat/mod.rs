//! Combat resolution - Processing attack sequences against a defender

mod resolution;
mod result;

pub use resolution::{resolve, resolve_single};
pub use result::{AttackOutcome, BattleReport};
