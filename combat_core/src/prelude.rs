//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Modifier engine
pub use crate::modifier::{Buff, BuffError, BuffStack};

// Combat descriptors
pub use crate::damage::Attack;
pub use crate::defense::{DefenderProfile, Shield};

// Resolution
pub use crate::combat::{resolve, resolve_single, AttackOutcome, BattleReport};

// Config
pub use crate::config::{default_scenarios, Scenario};
