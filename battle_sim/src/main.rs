//! Battle Sim - a seeded command-line duel demonstrating battle_core
//!
//! Runs a duel between two combatants until one drops, printing every
//! judgement and damage breakdown. Usage:
//!
//! ```text
//! battle_sim [SEED] [ROSTER.toml]
//! ```
//!
//! With a roster file the first two entries fight; otherwise a built-in
//! raider/warden pair is used. The same seed always replays the same
//! battle.

use battle_core::prelude::*;
use battle_core::load_combatant_configs;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use std::process::ExitCode;

const MAX_TURNS: u32 = 100;

/// Prints each resolution as it happens
struct Announcer {
    attacker_name: String,
    defender_name: String,
}

impl EffectSink for Announcer {
    fn on_damage(&mut self, result: &DamageResult) {
        println!(
            "  {} -> {}: {}",
            self.attacker_name,
            self.defender_name,
            result.summary()
        );
    }

    fn on_heal(&mut self, amount: f64) {
        println!("  {} recovers {:.0} HP", self.attacker_name, amount);
    }
}

struct Combatant {
    name: String,
    profile: StatProfile,
}

/// Built-in pair used when no roster file is given
fn default_combatants() -> (Combatant, Combatant) {
    let mut raider = StatProfile::new(120.0, 900.0);
    raider.element_type = ElementType::Plasma;
    raider.set_crit_rate(0.25);
    raider.set_crit_damage(1.8);
    raider.set_dodge_rate(12.0);
    raider.variant_damage = 0.1;
    raider.set_lifesteal(15.0);

    let mut warden = StatProfile::new(90.0, 1200.0);
    warden.element_type = ElementType::Power;
    warden.defense = 900.0;
    warden.set_block_rate(35.0);
    warden.set_block_power(45.0);
    warden.set_counter(25.0);
    warden.set_heal_power(30.0);
    warden.add_shield(100.0);

    (
        Combatant {
            name: "Raider".to_string(),
            profile: raider,
        },
        Combatant {
            name: "Warden".to_string(),
            profile: warden,
        },
    )
}

/// Load the first two roster entries, sorted by name for determinism
fn load_combatants(path: &Path) -> Result<(Combatant, Combatant), String> {
    let roster = load_combatant_configs(path).map_err(|e| e.to_string())?;
    let mut names: Vec<&String> = roster.keys().collect();
    names.sort();
    if names.len() < 2 {
        return Err(format!(
            "roster {} needs at least two combatants, found {}",
            path.display(),
            names.len()
        ));
    }
    let first = Combatant {
        name: names[0].clone(),
        profile: roster[names[0]].clone(),
    };
    let second = Combatant {
        name: names[1].clone(),
        profile: roster[names[1]].clone(),
    };
    Ok((first, second))
}

/// Resolve one attack from `attacker` onto `defender`, apply it, and
/// run the defender's counter if it triggers.
fn take_turn(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    rng: &mut impl RandomSource,
) -> Result<(), CombatError> {
    let mut sink = Announcer {
        attacker_name: attacker.name.clone(),
        defender_name: defender.name.clone(),
    };

    // Every third-ish attack spends a skill and a Break Point for variety
    let params = if rng.unit() < 0.3 {
        AttackParams::skill(150.0).with_bp(1)
    } else {
        AttackParams::basic()
    };

    let result = resolve_attack_mut(
        &mut attacker.profile,
        &mut defender.profile,
        params,
        rng,
        &mut sink,
    )?;
    defender.profile.apply_hp_loss(result.final_damage);

    if !defender.profile.is_alive() || result.judgement.short_circuits() {
        return Ok(());
    }

    if let Some(counter_damage) = resolve_counter(&defender.profile, result.final_damage, rng) {
        println!(
            "  {} counters for {:.0}!",
            defender.name, counter_damage
        );
        attacker.profile.apply_hp_loss(counter_damage);
    }

    // A wounded defender with healing spends its reaction patching up
    if defender.profile.heal_power > 0.0
        && defender.profile.missing_hp() > defender.profile.max_hp * 0.3
    {
        let heal = resolve_heal(&defender.profile, &defender.profile, 100.0, rng);
        defender.profile.apply_healing(heal.amount);
        println!("  {} mends {:.0} HP", defender.name, heal.amount);
    }

    Ok(())
}

fn run_duel(mut first: Combatant, mut second: Combatant, seed: u64) -> Result<(), CombatError> {
    let mut rng = RngSource(ChaCha8Rng::seed_from_u64(seed));

    println!("=== {} vs {} (seed {}) ===", first.name, second.name, seed);
    println!("{}: {}", first.name, first.profile.summary());
    println!("{}: {}", second.name, second.profile.summary());

    for turn in 1..=MAX_TURNS {
        println!("-- turn {} --", turn);

        take_turn(&mut first, &mut second, &mut rng)?;
        if !second.profile.is_alive() {
            println!("{} falls. {} wins on turn {}.", second.name, first.name, turn);
            return Ok(());
        }

        take_turn(&mut second, &mut first, &mut rng)?;
        if !first.profile.is_alive() {
            println!("{} falls. {} wins on turn {}.", first.name, second.name, turn);
            return Ok(());
        }

        println!(
            "  [{} {:.0}/{:.0}] [{} {:.0}/{:.0}]",
            first.name,
            first.profile.hp,
            first.profile.max_hp,
            second.name,
            second.profile.hp,
            second.profile.max_hp
        );
    }

    println!("Draw after {} turns.", MAX_TURNS);
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = match args.get(1).map(|s| s.parse()) {
        Some(Ok(seed)) => seed,
        Some(Err(_)) => {
            eprintln!("usage: battle_sim [SEED] [ROSTER.toml]");
            return ExitCode::FAILURE;
        }
        None => 42,
    };

    let combatants = match args.get(2) {
        Some(path) => match load_combatants(Path::new(path)) {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => default_combatants(),
    };

    if let Err(e) = run_duel(combatants.0, combatants.1, seed) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
