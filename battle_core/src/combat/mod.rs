//! Combat resolution - judgement, damage pipeline, post-processing

mod judgement;
mod pipeline;
mod post;
mod resolve;
mod result;

pub use judgement::resolve_judgement;
pub use pipeline::compute_damage;
pub use post::post_process;
pub use resolve::{resolve_attack, resolve_attack_mut, resolve_attack_with};
pub use result::DamageResult;

/// Combat tuning constants
pub mod constants {
    /// Critical chance added per Break Point spent
    pub const BP_CRIT_PER_POINT: f64 = 0.1;

    /// Damage multiplier bonus per Break Point spent
    pub const BP_DAMAGE_PER_POINT: f64 = 0.5;

    /// Critical chance bonus when elementally advantaged
    pub const ADVANTAGE_CRIT_BONUS: f64 = 0.15;

    /// Hit chance penalty when elementally disadvantaged
    pub const DISADVANTAGE_HIT_PENALTY: f64 = 0.5;

    /// Dodge chance factor against an advantaged attacker (halved)
    pub const ADVANTAGE_DODGE_FACTOR: f64 = 0.5;

    /// Strike trigger chance, rolled only when critical did not land
    pub const STRIKE_CHANCE: f64 = 0.30;

    /// Strike damage multiplier
    pub const STRIKE_MULTIPLIER: f64 = 1.3;

    /// Base elemental rate when advantaged (plus elemental attack)
    pub const ADVANTAGE_BASE_RATE: f64 = 1.1;

    /// Portion of elemental resistance applied on a disadvantaged attack
    pub const DISADVANTAGE_RES_FACTOR: f64 = 0.5;

    /// Defense soft-cap constant (higher = defense less effective)
    pub const DEFENSE_SOFT_CAP: f64 = 2600.0;

    /// Maximum fraction of damage defense can mitigate
    pub const DEFENSE_MAX_MITIGATION: f64 = 0.7;

    /// Block mitigation percent substituted when block power is unset
    pub const DEFAULT_BLOCK_POWER: f64 = 50.0;

    /// Damage factor for ranged attackers hitting the front row
    pub const RANGED_VS_FRONT_PENALTY: f64 = 0.8;
}

/// Clamp a probability to `[0, 1]`
pub(crate) fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
