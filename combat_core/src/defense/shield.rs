//! Shield - Consumable physical damage absorber

use serde::{Deserialize, Serialize};

/// A consumable physical barrier
///
/// Shields sit in an ordered list and absorption is attempted front to
/// back. `durability` never goes negative; a shield at zero durability is
/// inert and gets pruned from the running list after each attack's
/// absorption step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shield {
    /// Remaining absorbable damage
    pub durability: f64,
    /// Flat reduction applied before absorption
    #[serde(default)]
    pub def: f64,
    /// Shield-local flat reduction applied before absorption
    #[serde(default)]
    pub fake_hp: f64,
    /// Percentage mitigation applied before the flat subtractions (25 = 25%)
    #[serde(default)]
    pub damage_reduction: f64,
}

impl Shield {
    /// Create a bare shield with durability only
    pub fn new(durability: f64) -> Self {
        Shield {
            durability,
            def: 0.0,
            fake_hp: 0.0,
            damage_reduction: 0.0,
        }
    }

    /// Create a shield from all four stats
    pub fn with_stats(durability: f64, def: f64, fake_hp: f64, damage_reduction: f64) -> Self {
        Shield {
            durability,
            def,
            fake_hp,
            damage_reduction,
        }
    }

    /// Whether this shield can still absorb damage
    pub fn is_active(&self) -> bool {
        self.durability > 0.0
    }

    /// Absorb as much of `remaining` as this shield's stats allow
    ///
    /// The shield's own percentage mitigation applies first, then its fake
    /// HP and def floored at zero, then durability is consumed. Returns the
    /// amount absorbed, which the caller subtracts from the hit's remaining
    /// damage.
    pub fn absorb(&mut self, remaining: f64) -> f64 {
        let mitigated = remaining * (1.0 - self.damage_reduction / 100.0);
        let to_shield = (mitigated - self.fake_hp - self.def).max(0.0);
        let absorbed = to_shield.min(self.durability);
        self.durability -= absorbed;
        absorbed
    }
}
