//! Judgement resolution - the probabilistic state machine deciding what happens
//!
//! Strictly ordered: immunity, miss, dodge, hit, block, critical,
//! strike, skill resist. Miss and dodge short-circuit; immunity has the
//! highest precedence. Draw policy: the miss, dodge, block and critical
//! checks each consume one draw unless their skip option applies; the
//! strike draw happens only when critical did not land; the resist draw
//! only on skill attacks. At most five draws per call.

use super::constants::{
    ADVANTAGE_CRIT_BONUS, ADVANTAGE_DODGE_FACTOR, BP_CRIT_PER_POINT, DISADVANTAGE_HIT_PENALTY,
    STRIKE_CHANCE,
};
use super::clamp01;
use crate::context::BattleContext;
use crate::element;
use crate::rng::RandomSource;
use crate::types::{AttackType, Judgement};

/// Resolve the judgement for one attack
pub fn resolve_judgement(ctx: &BattleContext, rng: &mut impl RandomSource) -> Judgement {
    let attacker = ctx.attacker;
    let defender = ctx.defender;
    let opts = ctx.params.options;

    // 1. Immunity: highest precedence, no other flag may accompany it
    if defender.is_immune_to(ctx.params.attack_type, attacker.element_type)
        || (defender.is_boss && ctx.params.attack_type == AttackType::Special)
    {
        return Judgement::immune();
    }

    let advantaged = element::is_advantage(attacker.element_type, defender.element_type);
    let disadvantaged = element::is_disadvantage(attacker.element_type, defender.element_type);

    // 2. Miss
    if !opts.cannot_miss {
        let penalty = if disadvantaged {
            DISADVANTAGE_HIT_PENALTY
        } else {
            0.0
        };
        let hit_rate = clamp01(
            attacker.hit_rate / 100.0 + 1.0 - defender.dodge_rate / 100.0 - penalty,
        );
        if rng.unit() >= hit_rate {
            return Judgement::miss();
        }
    }

    // 3. Dodge
    if !opts.ignore_dodge && !opts.cannot_miss {
        let mut dodge_chance = defender.dodge_rate / 100.0;
        if advantaged {
            dodge_chance *= ADVANTAGE_DODGE_FACTOR;
        }
        if rng.unit() < dodge_chance {
            return Judgement::dodge();
        }
    }

    // 4. The attack connects
    let mut judgement = Judgement::hit();
    judgement.weakness = advantaged;

    // 5. Block: mitigates, does not short-circuit
    if !opts.ignore_block && rng.unit() < defender.block_rate / 100.0 {
        judgement.block = true;
    }

    // 6. Critical
    let critical_value =
        clamp01(attacker.crit_rate) + ctx.params.used_bp as f64 * BP_CRIT_PER_POINT;
    let advantage_bonus = if advantaged { ADVANTAGE_CRIT_BONUS } else { 0.0 };
    let critical_rate = clamp01(critical_value - defender.critical_resist + advantage_bonus);
    if rng.unit() < critical_rate {
        judgement.critical = true;
    }

    // 7. Strike: only rolled when critical did not land
    if !judgement.critical && rng.unit() < STRIKE_CHANCE {
        judgement.strike = true;
    }

    // 8. Skill-effect resist: informational; damage still applies
    if ctx.params.is_skill_attack {
        let skill_hit_rate = attacker.skill_hit_rate + attacker.cc_enhance;
        let skill_resist_rate = defender.skill_resist_rate + defender.tenacity;
        let resist_chance = clamp01(skill_resist_rate - skill_hit_rate);
        if rng.unit() < resist_chance {
            judgement.resist = true;
        }
    }

    judgement
}
