//! Auxiliary formulas - heal, crowd-control duration, counter, cooperation
//!
//! Same module family as the attack pipeline but with simpler contracts:
//! each is a single formula over two profiles and an optional draw.

use crate::profile::StatProfile;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Heal formula constants
pub mod constants {
    /// Fraction of the healer's attack a heal starts from
    pub const HEAL_ATTACK_RATIO: f64 = 0.5;

    /// Symmetric heal variance (uniform in [0.9, 1.1])
    pub const HEAL_VARIANCE: f64 = 0.1;

    /// Counter attacks return this fraction of the incoming damage
    pub const COUNTER_DAMAGE_RATIO: f64 = 0.5;
}

use constants::{COUNTER_DAMAGE_RATIO, HEAL_ATTACK_RATIO, HEAL_VARIANCE};

/// Outcome of a heal resolution
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealResult {
    /// Heal value before the missing-HP cap
    pub raw_amount: f64,
    /// Heal value the target can actually receive
    pub amount: f64,
}

/// Resolve a heal from `healer` onto `target`
///
/// `heal = attack * 0.5 * skill_power/100 * (1 + heal_power/100) *
/// variance[0.9, 1.1]`, capped at the target's missing HP. Computed as
/// a delta; the caller applies it.
pub fn resolve_heal(
    healer: &StatProfile,
    target: &StatProfile,
    skill_power: f64,
    rng: &mut impl RandomSource,
) -> HealResult {
    let variance = 1.0 + rng.symmetric(HEAL_VARIANCE);
    let raw = healer.attack
        * HEAL_ATTACK_RATIO
        * (skill_power / 100.0)
        * (1.0 + healer.heal_power / 100.0)
        * variance;
    let raw = raw.round().max(0.0);

    HealResult {
        raw_amount: raw,
        amount: raw.min(target.missing_hp()),
    }
}

/// Crowd-control duration in turns
///
/// `max(1, round(base * (1 + cc_enhance/100) * (1 - tenacity/100)))` -
/// tenacity shortens, enhancement stretches, but a landed effect always
/// lasts at least one turn.
pub fn cc_duration(base_turns: f64, caster_cc_enhance: f64, target_tenacity: f64) -> u32 {
    let duration =
        base_turns * (1.0 + caster_cc_enhance / 100.0) * (1.0 - target_tenacity / 100.0);
    duration.round().max(1.0) as u32
}

/// Roll a counter attack for `defender` against `incoming_damage`
///
/// Triggers with probability `counter` percent; counter damage is half
/// the original incoming damage.
pub fn resolve_counter(
    defender: &StatProfile,
    incoming_damage: f64,
    rng: &mut impl RandomSource,
) -> Option<f64> {
    let chance = defender.counter.clamp(0.0, 100.0) / 100.0;
    if chance > 0.0 && rng.unit() < chance {
        Some((incoming_damage * COUNTER_DAMAGE_RATIO).round().max(0.0))
    } else {
        None
    }
}

/// Roll whether `attacker` triggers a cooperation follow-up
pub fn check_cooperation(attacker: &StatProfile, rng: &mut impl RandomSource) -> bool {
    let chance = attacker.cooperation.clamp(0.0, 1.0);
    chance > 0.0 && rng.unit() < chance
}
