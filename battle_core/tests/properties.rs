//! Property-based invariants over the resolution pipeline

use battle_core::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

prop_compose! {
    fn arb_offense()(
        attack in 1.0f64..5000.0,
        crit_rate in 0.0f64..1.0,
        crit_damage in 1.0f64..3.5,
        variant in 0.0f64..0.5,
        penetration in 0.0f64..100.0,
        elemental_atk in -100.0f64..200.0,
        element in 0usize..6,
        ranged in any::<bool>(),
    ) -> StatProfile {
        let mut p = StatProfile::new(attack, 1000.0);
        p.set_crit_rate(crit_rate);
        p.set_crit_damage(crit_damage);
        p.variant_damage = variant;
        p.set_penetration(penetration);
        p.set_elemental_atk(elemental_atk);
        p.element_type = ElementType::all()[element];
        if ranged {
            p.attack_range = AttackRange::Ranged;
        }
        p
    }
}

prop_compose! {
    fn arb_defense()(
        max_hp in 1.0f64..10_000.0,
        defense in 0.0f64..10_000.0,
        dodge_rate in 0.0f64..100.0,
        block_rate in 0.0f64..100.0,
        block_power in 0.0f64..80.0,
        damage_reduce in 0.0f64..90.0,
        elemental_res in -100.0f64..100.0,
        shield in 0.0f64..500.0,
        element in 0usize..6,
    ) -> StatProfile {
        let mut p = StatProfile::new(10.0, max_hp);
        p.defense = defense;
        p.set_dodge_rate(dodge_rate);
        p.set_block_rate(block_rate);
        p.set_block_power(block_power);
        p.set_damage_reduce(damage_reduce);
        p.set_elemental_res(elemental_res);
        p.add_shield(shield);
        p.element_type = ElementType::all()[element];
        p
    }
}

fn resolve_seeded(
    attacker: &StatProfile,
    defender: &StatProfile,
    params: AttackParams,
    seed: u64,
) -> DamageResult {
    let ctx = BattleContext::new(attacker, defender, params);
    let mut rng = RngSource(StdRng::seed_from_u64(seed));
    resolve_attack_with(&ctx, &mut rng, &mut NullEffectSink).unwrap()
}

proptest! {
    #[test]
    fn final_damage_never_negative(
        attacker in arb_offense(),
        defender in arb_defense(),
        bp in 0u32..5,
        seed in any::<u64>(),
    ) {
        let result = resolve_seeded(&attacker, &defender, AttackParams::basic().with_bp(bp), seed);
        prop_assert!(result.final_damage >= 0.0);
        prop_assert!(result.original_damage >= 0.0);
        prop_assert!(result.shield_absorbed >= 0.0);
    }

    #[test]
    fn short_circuit_means_zero_damage(
        attacker in arb_offense(),
        defender in arb_defense(),
        seed in any::<u64>(),
    ) {
        let result = resolve_seeded(&attacker, &defender, AttackParams::basic(), seed);
        if result.judgement.short_circuits() {
            prop_assert!(result.final_damage == 0.0);
            prop_assert!(result.trace.is_empty());
        } else {
            prop_assert!(result.judgement.hit);
        }
    }

    #[test]
    fn critical_and_strike_never_coincide(
        attacker in arb_offense(),
        defender in arb_defense(),
        seed in any::<u64>(),
    ) {
        let result = resolve_seeded(&attacker, &defender, AttackParams::basic(), seed);
        prop_assert!(!(result.judgement.critical && result.judgement.strike));
    }

    #[test]
    fn shield_never_absorbs_more_than_it_has(
        attacker in arb_offense(),
        defender in arb_defense(),
        seed in any::<u64>(),
    ) {
        let result = resolve_seeded(&attacker, &defender, AttackParams::basic(), seed);
        prop_assert!(result.shield_absorbed <= defender.shield);
        // What the shield soaked plus what lands equals the pipeline's
        // post-block output
        if !result.judgement.short_circuits() {
            let post_block = result.original_damage - result.blocked_damage;
            prop_assert!((result.shield_absorbed + result.final_damage - post_block).abs() < 1e-9);
        }
    }

    #[test]
    fn true_damage_ignores_defense_and_bp(
        attack in 1.0f64..5000.0,
        defense in 0.0f64..10_000.0,
        damage_reduce in 0.0f64..90.0,
        bp in 0u32..5,
        seed in any::<u64>(),
    ) {
        let attacker = StatProfile::new(attack, 1000.0);
        let mut defender = StatProfile::new(10.0, 1000.0);
        defender.defense = defense;
        defender.set_damage_reduce(damage_reduce);

        let params = AttackParams::basic()
            .with_bp(bp)
            .with_options(DamageOptions::true_damage());
        let result = resolve_seeded(&attacker, &defender, params, seed);
        if result.judgement.connects() && !result.judgement.block {
            prop_assert!((result.final_damage - attack.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn lifesteal_capped_at_missing_hp(
        attacker in arb_offense(),
        defender in arb_defense(),
        lifesteal in 0.0f64..100.0,
        hp_frac in 0.1f64..1.0,
        seed in any::<u64>(),
    ) {
        let mut attacker = attacker;
        attacker.set_lifesteal(lifesteal);
        attacker.hp = attacker.max_hp * hp_frac;
        let missing = attacker.missing_hp();

        let ctx = BattleContext::new(&attacker, &defender, AttackParams::basic());
        let mut rng = RngSource(StdRng::seed_from_u64(seed));
        let result = resolve_attack_with(&ctx, &mut rng, &mut NullEffectSink).unwrap();

        prop_assert!(result.life_steal_amount >= 0.0);
        prop_assert!(result.life_steal_amount <= missing + 1e-9);
    }

    #[test]
    fn resolution_is_deterministic(
        attacker in arb_offense(),
        defender in arb_defense(),
        seed in any::<u64>(),
    ) {
        let a = resolve_seeded(&attacker, &defender, AttackParams::basic(), seed);
        let b = resolve_seeded(&attacker, &defender, AttackParams::basic(), seed);
        prop_assert_eq!(a.judgement, b.judgement);
        prop_assert!((a.final_damage - b.final_damage).abs() < f64::EPSILON);
        prop_assert_eq!(a.trace, b.trace);
    }

    #[test]
    fn elemental_table_reciprocity(a in 0usize..8, b in 0usize..8) {
        use battle_core::element;
        let all = [
            ElementType::None, ElementType::Power, ElementType::Plasma,
            ElementType::Bio, ElementType::Chemical, ElementType::Electrical,
            ElementType::Network, ElementType::Max,
        ];
        let (x, y) = (all[a], all[b]);
        // A direction is never both advantaged and disadvantaged, and
        // every disadvantage is the reverse of someone's advantage
        prop_assert!(!(element::is_advantage(x, y) && element::is_disadvantage(x, y)));
        if element::is_disadvantage(x, y) {
            prop_assert!(element::is_advantage(y, x));
        }
    }

    #[test]
    fn heal_never_overfills(
        attack in 1.0f64..5000.0,
        heal_power in -100.0f64..200.0,
        skill_power in 1.0f64..300.0,
        hp_frac in 0.0f64..1.0,
        seed in any::<u64>(),
    ) {
        let mut healer = StatProfile::new(attack, 1000.0);
        healer.set_heal_power(heal_power);
        let mut target = StatProfile::new(10.0, 2000.0);
        target.hp = target.max_hp * hp_frac;

        let mut rng = RngSource(StdRng::seed_from_u64(seed));
        let heal = resolve_heal(&healer, &target, skill_power, &mut rng);

        prop_assert!(heal.amount >= 0.0);
        prop_assert!(heal.amount <= heal.raw_amount);
        prop_assert!(target.hp + heal.amount <= target.max_hp + 1e-9);
    }

    #[test]
    fn cc_duration_at_least_one_turn(
        base in 0.0f64..10.0,
        enhance in -100.0f64..100.0,
        tenacity in 0.0f64..80.0,
    ) {
        prop_assert!(cc_duration(base, enhance, tenacity) >= 1);
    }
}
