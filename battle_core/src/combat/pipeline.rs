//! Damage pipeline - ordered arithmetic stages from base value to final damage
//!
//! Stage order is load-bearing: base, skill multiplier, critical/strike,
//! elemental, range penalty, defense, variance, damage-reduce, BP bonus,
//! true-damage override, final rounding. Block mitigation applies after
//! the pipeline, not as a stage. Each stage's output lands in the trace.

use super::constants::{
    ADVANTAGE_BASE_RATE, BP_DAMAGE_PER_POINT, DEFENSE_MAX_MITIGATION, DEFENSE_SOFT_CAP,
    DISADVANTAGE_RES_FACTOR, RANGED_VS_FRONT_PENALTY, STRIKE_MULTIPLIER,
};
use super::{clamp01, DamageResult};
use crate::context::BattleContext;
use crate::element;
use crate::profile::ranges::{CRIT_DAMAGE_MAX, CRIT_DAMAGE_MIN};
use crate::rng::RandomSource;
use crate::types::{AttackRange, Judgement, RowPosition};

/// Run the damage pipeline for a judgement that did not short-circuit
pub fn compute_damage(
    ctx: &BattleContext,
    judgement: Judgement,
    rng: &mut impl RandomSource,
) -> DamageResult {
    let attacker = ctx.attacker;
    let defender = ctx.defender;
    let opts = ctx.params.options;
    let mut result = DamageResult::new(judgement);

    // Stage 1: base damage, fixed range when set, flat attack otherwise
    let base = attacker.effective_attack(rng);
    let mut damage = base;
    result.record("base", damage);

    // Stage 2: skill multiplier
    if ctx.params.is_skill_attack {
        damage *= ctx.params.skill_power / 100.0;
        result.record("skill", damage);
    }

    // Stage 3: critical or strike multiplier
    let origin = damage;
    if judgement.critical {
        let crit_mult = attacker.crit_damage.clamp(CRIT_DAMAGE_MIN, CRIT_DAMAGE_MAX);
        damage = (origin * crit_mult).ceil();
        result.critical_bonus = damage - origin;
        result.record("critical", damage);
    } else if judgement.strike {
        damage = (origin * STRIKE_MULTIPLIER).ceil();
        result.record("strike", damage);
    }

    // Critical nullify clears the reporting flag only; the damage keeps
    // its critical magnitude (parity with the source system)
    if judgement.critical && rng.unit() < defender.crit_nullify_chance {
        result.judgement.critical = false;
        result.record("crit_nullified", 1.0);
    }

    // Stage 4: elemental multiplier
    let origin = damage;
    let element_rate = if element::is_advantage(attacker.element_type, defender.element_type) {
        ADVANTAGE_BASE_RATE + attacker.elemental_atk / 100.0
    } else if element::is_disadvantage(attacker.element_type, defender.element_type) {
        (1.0 / ADVANTAGE_BASE_RATE)
            * (1.0 - defender.elemental_res / 100.0 * DISADVANTAGE_RES_FACTOR)
    } else {
        1.0
    };
    result.element_multiplier = element_rate;
    damage = (origin * element_rate).ceil();
    result.record("elemental", damage);

    // Stage 5: ranged attackers lose damage into the front row
    if attacker.attack_range == AttackRange::Ranged && defender.row == RowPosition::Front {
        damage *= RANGED_VS_FRONT_PENALTY;
        result.record("range_penalty", damage);
    }

    // Stage 6: defense mitigation
    if !opts.ignore_defense && !opts.true_damage {
        let origin = damage;
        let defence_value =
            defender.defense * (1.0 - attacker.penetration.clamp(0.0, 100.0) / 100.0);
        let reduction = clamp01(
            1.0 - (defence_value / (defence_value + DEFENSE_SOFT_CAP)) * DEFENSE_MAX_MITIGATION,
        );
        damage = (origin * reduction).floor().max(1.0);
        result.defense_absorbed = origin - damage;
        result.record("defense", damage);
    }

    // Stage 7: variance
    let variance = rng.symmetric(attacker.variant_damage);
    if variance != 0.0 {
        damage *= 1.0 + variance;
        result.record("variance", damage);
    }

    // Stage 8: defender's flat damage reduction
    if defender.damage_reduce > 0.0 {
        damage *= 1.0 - defender.damage_reduce.clamp(0.0, 90.0) / 100.0;
        result.record("damage_reduce", damage);
    }

    // Stage 9: BP bonus
    if ctx.params.used_bp > 0 {
        damage *= 1.0 + ctx.params.used_bp as f64 * BP_DAMAGE_PER_POINT;
        result.record("bp_bonus", damage);
    }

    // Stage 10: true damage discards every stage above and keeps the base
    if opts.true_damage {
        damage = base;
        result.record("true_damage", damage);
    }

    // Stage 11: final rounding, never negative
    let mut final_damage = damage.round().max(0.0);
    result.original_damage = final_damage;
    result.record("pipeline", final_damage);

    // Block mitigation, after the full pipeline
    if judgement.block {
        let block_power = defender.effective_block_power();
        let before = final_damage;
        final_damage = (final_damage * (1.0 - block_power / 100.0)).round().max(1.0);
        result.blocked_damage = before - final_damage;
        result.record("block", final_damage);
    }

    result.final_damage = final_damage;
    result
}
