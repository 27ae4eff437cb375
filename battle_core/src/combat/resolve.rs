//! Attack resolution entry points

use super::{compute_damage, post_process, resolve_judgement, DamageResult};
use crate::context::{AttackParams, BattleContext};
use crate::effect::{EffectSink, NullEffectSink};
use crate::error::CombatError;
use crate::profile::StatProfile;
use crate::rng::{RandomSource, RngSource};

/// Resolve one attack with ambient randomness and no observer
///
/// Convenience wrapper over [`resolve_attack_with`].
pub fn resolve_attack(ctx: &BattleContext) -> Result<DamageResult, CombatError> {
    resolve_attack_with(ctx, &mut RngSource(rand::thread_rng()), &mut NullEffectSink)
}

/// Resolve one attack with an injected random source and effect sink
///
/// Control flow: validate, judge, short-circuit on immune/miss/dodge,
/// otherwise run the damage pipeline and post-processing. The returned
/// result carries deltas only; nothing has been applied to either
/// profile.
pub fn resolve_attack_with(
    ctx: &BattleContext,
    rng: &mut impl RandomSource,
    sink: &mut impl EffectSink,
) -> Result<DamageResult, CombatError> {
    ctx.validate()?;

    let judgement = resolve_judgement(ctx, rng);
    let result = if judgement.short_circuits() {
        DamageResult::no_damage(judgement)
    } else {
        let mut result = compute_damage(ctx, judgement, rng);
        post_process(ctx, &mut result);
        result
    };

    sink.on_judgement(&result.judgement);
    sink.on_damage(&result);
    if result.has_life_steal {
        sink.on_heal(result.life_steal_amount);
    }
    Ok(result)
}

/// Resolve one attack and apply the engine-owned side effects in place
///
/// Side-effecting contract: the defender's shield is debited and the
/// attacker heals lifesteal. Debiting `final_damage` from the defender's
/// HP remains the caller's responsibility. Callers must serialize
/// resolutions per combatant; no two may run against the same profile
/// concurrently.
pub fn resolve_attack_mut(
    attacker: &mut StatProfile,
    defender: &mut StatProfile,
    params: AttackParams,
    rng: &mut impl RandomSource,
    sink: &mut impl EffectSink,
) -> Result<DamageResult, CombatError> {
    let result = {
        let ctx = BattleContext::new(attacker, defender, params);
        resolve_attack_with(&ctx, rng, sink)?
    };
    result.apply_to(attacker, defender);
    Ok(result)
}
