//! DefenderProfile - A defender's passive mitigation stats

use serde::{Deserialize, Serialize};

/// Passive mitigation for one defender
///
/// `fake_hp` is a pool: one resolution call depletes it monotonically
/// across the whole attack sequence and it does not regenerate within the
/// call. Numeric ranges are not validated here; the input-collection layer
/// is expected to hand over finite numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DefenderProfile {
    /// Flat damage subtracted at the end of the pipeline
    #[serde(default)]
    pub defense: f64,
    /// Non-regenerating damage buffer, distinct from physical shields
    #[serde(default)]
    pub fake_hp: f64,
    /// Percentage reduction applied before everything else (25 = 25%)
    #[serde(default)]
    pub damage_reduction: f64,
}

impl DefenderProfile {
    /// Create a profile from the three mitigation stats
    pub fn new(defense: f64, fake_hp: f64, damage_reduction: f64) -> Self {
        DefenderProfile {
            defense,
            fake_hp,
            damage_reduction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unarmored() {
        let profile = DefenderProfile::default();
        assert!((profile.defense - 0.0).abs() < f64::EPSILON);
        assert!((profile.fake_hp - 0.0).abs() < f64::EPSILON);
        assert!((profile.damage_reduction - 0.0).abs() < f64::EPSILON);
    }
}
