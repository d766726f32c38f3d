//! BattleReport - Outcome of resolving an attack sequence

use crate::defense::Shield;
use serde::{Deserialize, Serialize};

/// Mitigation breakdown for a single attack in the sequence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Raw damage before any mitigation
    pub raw_damage: f64,
    /// Amount removed by the defender's flat damage-reduction
    pub reduced_by_damage_reduction: f64,
    /// Amount absorbed by physical shields
    pub absorbed_by_shields: f64,
    /// Amount absorbed by the fake-HP pool
    pub absorbed_by_fake_hp: f64,
    /// Amount blocked by flat defense
    pub blocked_by_defense: f64,
    /// Damage that reached the defender
    pub final_damage: f64,
    /// Shields that hit zero durability during this attack
    pub shields_broken: u32,
}

impl AttackOutcome {
    /// Create an outcome for a hit of the given raw damage
    pub fn new(raw_damage: f64) -> Self {
        AttackOutcome {
            raw_damage,
            ..Default::default()
        }
    }

    /// Total amount removed by all defenses
    pub fn total_mitigated(&self) -> f64 {
        self.reduced_by_damage_reduction
            + self.absorbed_by_shields
            + self.absorbed_by_fake_hp
            + self.blocked_by_defense
    }

    /// Mitigation as a percentage of the raw damage
    pub fn mitigation_percent(&self) -> f64 {
        if self.raw_damage <= 0.0 {
            return 0.0;
        }
        (self.total_mitigated() / self.raw_damage * 100.0).clamp(0.0, 100.0)
    }
}

/// Result of resolving an ordered attack sequence against one defender
///
/// `shields` and `fake_hp_remaining` are the depleted working state; the
/// caller decides whether to commit them for the next round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleReport {
    /// Per-attack breakdown, in attack order
    pub attacks: Vec<AttackOutcome>,
    /// Total damage that reached the defender
    pub total_damage: f64,
    /// Shield list after the sequence, spent shields pruned
    pub shields: Vec<Shield>,
    /// What is left of the defender's fake-HP pool
    pub fake_hp_remaining: f64,
}

impl BattleReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Total raw damage across the sequence
    pub fn total_raw_damage(&self) -> f64 {
        self.attacks.iter().map(|a| a.raw_damage).sum()
    }

    /// Total absorbed by shields across the sequence
    pub fn total_absorbed_by_shields(&self) -> f64 {
        self.attacks.iter().map(|a| a.absorbed_by_shields).sum()
    }

    /// Shields broken across the sequence
    pub fn shields_broken(&self) -> u32 {
        self.attacks.iter().map(|a| a.shields_broken).sum()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.total_damage > 0.0 {
            parts.push(format!("{:.2} damage taken", self.total_damage));
        }

        let shielded = self.total_absorbed_by_shields();
        if shielded > 0.0 {
            parts.push(format!("{:.2} absorbed by shields", shielded));
        }

        let faked: f64 = self.attacks.iter().map(|a| a.absorbed_by_fake_hp).sum();
        if faked > 0.0 {
            parts.push(format!("{:.2} absorbed by fake HP", faked));
        }

        let blocked: f64 = self.attacks.iter().map(|a| a.blocked_by_defense).sum();
        if blocked > 0.0 {
            parts.push(format!("{:.2} blocked by defense", blocked));
        }

        let broken = self.shields_broken();
        if broken > 0 {
            parts.push(format!("{} shield(s) broken", broken));
        }

        if parts.is_empty() {
            "No damage".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_totals() {
        let mut outcome = AttackOutcome::new(100.0);
        outcome.reduced_by_damage_reduction = 10.0;
        outcome.absorbed_by_shields = 30.0;
        outcome.absorbed_by_fake_hp = 20.0;
        outcome.blocked_by_defense = 15.0;
        outcome.final_damage = 25.0;

        assert!((outcome.total_mitigated() - 75.0).abs() < f64::EPSILON);
        assert!((outcome.mitigation_percent() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mitigation_percent_zero_raw() {
        let outcome = AttackOutcome::new(0.0);
        assert!((outcome.mitigation_percent() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_aggregates() {
        let mut report = BattleReport::new();
        let mut first = AttackOutcome::new(100.0);
        first.absorbed_by_shields = 60.0;
        first.shields_broken = 1;
        let mut second = AttackOutcome::new(50.0);
        second.absorbed_by_shields = 40.0;
        report.attacks.push(first);
        report.attacks.push(second);

        assert!((report.total_raw_damage() - 150.0).abs() < f64::EPSILON);
        assert!((report.total_absorbed_by_shields() - 100.0).abs() < f64::EPSILON);
        assert_eq!(report.shields_broken(), 1);
    }

    #[test]
    fn test_summary_lists_mitigation() {
        let mut report = BattleReport::new();
        report.total_damage = 80.0;
        let mut outcome = AttackOutcome::new(100.0);
        outcome.blocked_by_defense = 20.0;
        report.attacks.push(outcome);

        let summary = report.summary();
        assert!(summary.contains("80.00 damage taken"));
        assert!(summary.contains("blocked by defense"));
    }

    #[test]
    fn test_summary_no_damage() {
        let report = BattleReport::new();
        assert_eq!(report.summary(), "No damage");
    }
}
