//! combat_core - Core combat math library
//!
//! This library provides:
//! - BuffStack: Ordered percentage/fixed stat modifiers
//! - Attack: A single hit and its mitigation-bypass capabilities
//! - DefenderProfile / Shield: A defender's passive and consumable defenses
//! - Damage Resolution: Processing attack sequences against those defenses

pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod modifier;
pub mod prelude;

// Re-export core types for convenience
pub use combat::{resolve, resolve_single, AttackOutcome, BattleReport};
pub use config::{default_scenarios, ConfigError, Scenario};
pub use damage::Attack;
pub use defense::{apply_damage_reduction, apply_flat_defense, DefenderProfile, Shield};
pub use modifier::{Buff, BuffError, BuffStack};
