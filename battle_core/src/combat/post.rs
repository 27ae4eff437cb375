//! Post-processing - shield absorption and lifesteal
//!
//! Runs after the pipeline on the already-final damage. Both effects
//! are computed as deltas on the result; [`DamageResult::apply_to`]
//! performs the actual mutation so the calculation itself stays pure.

use super::DamageResult;
use crate::context::BattleContext;

/// Apply shield absorption then lifesteal to a computed result
pub fn post_process(ctx: &BattleContext, result: &mut DamageResult) {
    // Shield soaks damage first
    if !ctx.params.options.ignore_shield {
        let absorbed = ctx.defender.shield.min(result.final_damage).max(0.0);
        if absorbed > 0.0 {
            result.shield_absorbed = absorbed;
            result.final_damage -= absorbed;
            result.record("shield", result.final_damage);
        }
    }

    // Lifesteal heals from the damage that actually lands
    let rate = ctx.attacker.lifesteal.clamp(0.0, 100.0);
    if rate > 0.0 && result.final_damage > 0.0 {
        let heal = (result.final_damage * rate / 100.0).round();
        let capped = heal.min(ctx.attacker.missing_hp());
        if capped > 0.0 {
            result.has_life_steal = true;
            result.life_steal_amount = capped;
            result.record("lifesteal", capped);
        }
    }
}
