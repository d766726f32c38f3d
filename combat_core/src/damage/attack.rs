//! Attack - A single incoming hit and its bypass capabilities

use serde::{Deserialize, Serialize};

/// One incoming hit
///
/// The five flags are orthogonal capabilities, each evaluated independently
/// by the resolution pipeline, so every combination is well-defined. A
/// front-end may present some pairs as mutually exclusive, but the engine
/// does not rely on that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    /// Raw damage before any mitigation
    pub incoming_damage: f64,
    /// Bypass the flat defense subtraction only
    #[serde(default)]
    pub def_pierce: bool,
    /// Bypass physical shields entirely
    #[serde(default)]
    pub piercing: bool,
    /// Bypass flat damage-reduction and defense; still absorbed by shields
    /// and fake HP
    #[serde(default)]
    pub true_damage: bool,
    /// Bypass damage-reduction, fake HP and defense; still absorbed by
    /// shields
    #[serde(default)]
    pub fatal: bool,
    /// Constant damage: cannot finish off a shield whose durability is at
    /// or below the hit's remaining damage
    #[serde(default)]
    pub constant: bool,
}

impl Default for Attack {
    fn default() -> Self {
        Attack::new(0.0)
    }
}

impl Attack {
    /// A plain hit with no bypass capabilities
    pub fn new(incoming_damage: f64) -> Self {
        Attack {
            incoming_damage,
            def_pierce: false,
            piercing: false,
            true_damage: false,
            fatal: false,
            constant: false,
        }
    }

    /// Mark this hit as def-piercing
    pub fn with_def_pierce(mut self) -> Self {
        self.def_pierce = true;
        self
    }

    /// Mark this hit as shield-piercing
    pub fn with_piercing(mut self) -> Self {
        self.piercing = true;
        self
    }

    /// Mark this hit as true damage
    pub fn with_true_damage(mut self) -> Self {
        self.true_damage = true;
        self
    }

    /// Mark this hit as fatal damage
    pub fn with_fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    /// Mark this hit as constant damage
    pub fn with_constant(mut self) -> Self {
        self.constant = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_attack_has_no_flags() {
        let attack = Attack::new(100.0);
        assert!((attack.incoming_damage - 100.0).abs() < f64::EPSILON);
        assert!(!attack.def_pierce);
        assert!(!attack.piercing);
        assert!(!attack.true_damage);
        assert!(!attack.fatal);
        assert!(!attack.constant);
    }

    #[test]
    fn test_builder_flags() {
        let attack = Attack::new(50.0).with_true_damage().with_constant();
        assert!(attack.true_damage);
        assert!(attack.constant);
        assert!(!attack.fatal);
    }

    #[test]
    fn test_flags_are_independent() {
        // The engine accepts combinations a front-end would forbid
        let attack = Attack::new(50.0).with_piercing().with_fatal();
        assert!(attack.piercing);
        assert!(attack.fatal);
    }
}
