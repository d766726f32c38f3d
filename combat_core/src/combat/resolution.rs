//! Damage resolution - Apply an attack sequence to a defender

use super::result::{AttackOutcome, BattleReport};
use crate::damage::Attack;
use crate::defense::{apply_damage_reduction, apply_flat_defense, DefenderProfile, Shield};

/// Resolve an ordered attack sequence against a defender
///
/// Attacks are processed in order against the running shield list and
/// fake-HP pool: each attack sees the depleted state left behind by the
/// previous one. The caller keeps ownership of its shield list; the
/// depleted copy comes back in the report for the caller to commit or
/// discard.
///
/// Per attack the pipeline is fixed:
/// 1. Flat damage-reduction (bypassed by true and fatal damage)
/// 2. Shield absorption, front to back (bypassed by piercing damage only)
/// 3. Fake-HP pool (bypassed by fatal damage)
/// 4. Flat defense (bypassed by def-pierce and fatal damage)
/// 5. Whatever remains is damage taken
pub fn resolve(attacks: &[Attack], defender: &DefenderProfile, shields: &[Shield]) -> BattleReport {
    let mut report = BattleReport::new();
    let mut running_shields: Vec<Shield> = shields.to_vec();
    let mut fake_hp = defender.fake_hp;

    for attack in attacks {
        let outcome = resolve_one(attack, defender, &mut running_shields, &mut fake_hp);
        report.total_damage += outcome.final_damage;
        report.attacks.push(outcome);
    }

    report.shields = running_shields;
    report.fake_hp_remaining = fake_hp;
    report
}

/// Resolve a single attack (one-element sequence)
pub fn resolve_single(
    attack: &Attack,
    defender: &DefenderProfile,
    shields: &[Shield],
) -> BattleReport {
    resolve(std::slice::from_ref(attack), defender, shields)
}

/// Run one attack through the five-step pipeline, mutating the running state
fn resolve_one(
    attack: &Attack,
    defender: &DefenderProfile,
    shields: &mut Vec<Shield>,
    fake_hp: &mut f64,
) -> AttackOutcome {
    let mut outcome = AttackOutcome::new(attack.incoming_damage);
    let mut remaining = attack.incoming_damage;

    // Step 1: Flat damage-reduction. True and fatal damage bypass it.
    if !attack.true_damage && !attack.fatal {
        let reduced = apply_damage_reduction(remaining, defender.damage_reduction);
        outcome.reduced_by_damage_reduction = remaining - reduced;
        remaining = reduced;
    }

    // Step 2: Shield absorption. Only piercing damage skips shields; fatal
    // damage is still absorbed.
    if !attack.piercing {
        for shield in shields.iter_mut() {
            if !shield.is_active() {
                continue;
            }
            // Constant damage cannot finish off a shield whose durability
            // is at or below the hit's remaining damage; such a shield is
            // skipped untouched.
            if attack.constant && shield.durability <= remaining {
                continue;
            }
            let absorbed = shield.absorb(remaining);
            remaining -= absorbed;
            outcome.absorbed_by_shields += absorbed;
            if !shield.is_active() {
                outcome.shields_broken += 1;
            }
            if remaining <= 0.0 {
                break;
            }
        }
        shields.retain(|s| s.is_active());
    }

    // Step 3: Fake-HP pool, shared across the whole sequence. Fatal damage
    // bypasses it. The floor keeps an over-reduced hit from refilling the
    // pool.
    if !attack.fatal && *fake_hp > 0.0 {
        let absorbed = remaining.min(*fake_hp).max(0.0);
        *fake_hp -= absorbed;
        remaining -= absorbed;
        outcome.absorbed_by_fake_hp = absorbed;
    }

    // Step 4: Flat defense. Def-pierce and fatal damage bypass it.
    if !attack.def_pierce && !attack.fatal {
        let after = apply_flat_defense(remaining, defender.defense);
        outcome.blocked_by_defense = (remaining - after).max(0.0);
        remaining = after;
    }

    // Step 5: Whatever is left lands on the defender.
    outcome.final_damage = remaining.max(0.0);
    outcome
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_attack() -> impl Strategy<Value = Attack> {
        (
            0.0f64..1e4,
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(dmg, dp, pi, tr, fa, co)| Attack {
                incoming_damage: dmg,
                def_pierce: dp,
                piercing: pi,
                true_damage: tr,
                fatal: fa,
                constant: co,
            })
    }

    fn arb_shield() -> impl Strategy<Value = Shield> {
        (0.0f64..1e3, 0.0f64..100.0, 0.0f64..100.0, 0.0f64..100.0)
            .prop_map(|(d, def, fh, dr)| Shield::with_stats(d, def, fh, dr))
    }

    proptest! {
        #[test]
        fn resolution_is_bounded_and_depleting(
            attacks in proptest::collection::vec(arb_attack(), 0..6),
            shields in proptest::collection::vec(arb_shield(), 0..4),
            defense in 0.0f64..1e3,
            fake_hp in 0.0f64..1e3,
            reduction in 0.0f64..100.0,
        ) {
            let defender = DefenderProfile::new(defense, fake_hp, reduction);
            let report = resolve(&attacks, &defender, &shields);

            let incoming: f64 = attacks.iter().map(|a| a.incoming_damage).sum();
            prop_assert!(report.total_damage >= 0.0);
            prop_assert!(report.total_damage <= incoming + 1e-6);
            prop_assert!(report.shields.iter().all(|s| s.durability >= 0.0));
            prop_assert!(report.fake_hp_remaining >= 0.0);
            prop_assert!(report.fake_hp_remaining <= fake_hp);
        }
    }
}
