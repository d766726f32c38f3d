//! Buff - A single stat modifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stat modifier, either multiplicative (percentage) or additive (fixed)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Buff {
    /// Percentage modifier stored as a fraction (0.25 = +25%)
    Percentage(f64),
    /// Flat modifier, applied after all percentage scaling
    Fixed(f64),
}

impl Buff {
    /// The stored value (a fraction for percentage buffs, raw for fixed)
    pub fn value(&self) -> f64 {
        match self {
            Buff::Percentage(v) | Buff::Fixed(v) => *v,
        }
    }

    /// Whether this modifier reduces the stat
    pub fn is_debuff(&self) -> bool {
        self.value() < 0.0
    }
}

impl fmt::Display for Buff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Buff::Percentage(v) => write!(f, "{:.1}%", v * 100.0),
            Buff::Fixed(v) => write!(f, "{}", v),
        }
    }
}
