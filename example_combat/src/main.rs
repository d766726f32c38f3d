//! Example Combat - A minimal non-interactive demo of combat_core
//!
//! The demo shows:
//! - Buffing a base stat and a skill hit with BuffStack
//! - Resolving a multi-attack sequence against shields and fake HP
//! - Running the bundled scenarios

use combat_core::prelude::*;

fn main() {
    buff_stack_demo();
    println!();
    battle_demo();
    println!();
    scenario_demo();
}

fn buff_stack_demo() {
    println!("=== Stat buffing ===");
    let mut buffs = BuffStack::new();
    buffs.add_percentage(10.0);
    buffs.add_percentage(20.0);
    buffs.add_fixed(15.0);

    for buff in buffs.buffs() {
        println!("  buff: {buff}");
    }
    println!("  base stat 100 -> {:.2}", buffs.calculate_stat(100.0));
    println!(
        "  skill 200 base at 150% multiplier -> {:.2}",
        buffs.calculate_skill_damage(200.0, 150.0)
    );
}

fn battle_demo() {
    println!("=== Shielded defender vs attack sequence ===");
    let mut buffs = BuffStack::new();
    buffs.add_percentage(25.0);
    let opener = buffs.calculate_skill_damage(80.0, 200.0);

    let defender = DefenderProfile::new(15.0, 40.0, 10.0);
    let shields = vec![Shield::with_stats(120.0, 5.0, 0.0, 25.0), Shield::new(60.0)];
    let attacks = vec![
        Attack::new(opener),
        Attack::new(70.0).with_constant(),
        Attack::new(55.0).with_fatal(),
    ];

    let report = resolve(&attacks, &defender, &shields);

    for (i, outcome) in report.attacks.iter().enumerate() {
        println!(
            "  attack {}: {:.2} raw -> {:.2} taken ({:.1}% mitigated)",
            i + 1,
            outcome.raw_damage,
            outcome.final_damage,
            outcome.mitigation_percent()
        );
    }
    println!("  {}", report.summary());
    println!("  fake HP left: {:.2}", report.fake_hp_remaining);

    // Hand the surviving shields to the persistence collaborator as plain
    // numeric records
    if let Ok(json) = serde_json::to_string_pretty(&report.shields) {
        println!("  surviving shields: {json}");
    }
}

fn scenario_demo() {
    println!("=== Bundled scenarios ===");
    let scenarios = default_scenarios();
    let mut names: Vec<&String> = scenarios.keys().collect();
    names.sort();

    for name in names {
        let scenario = &scenarios[name];
        let report = resolve(&scenario.attacks, &scenario.defender, &scenario.shields);
        println!("  {name}: {}", report.summary());
    }
}
