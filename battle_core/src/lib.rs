//! battle_core - turn-based combat resolution engine
//!
//! This library provides:
//! - StatProfile: one combatant's combat-relevant attributes
//! - Judgement resolution: hit/miss/dodge/block/critical/strike/immune
//! - DamagePipeline: the ordered arithmetic stages producing damage
//! - Post-processing: shield absorption and lifesteal as deltas
//! - Auxiliary formulas: heal, crowd-control duration, counter, cooperation
//!
//! All randomness is injected through [`rng::RandomSource`], so a fixed
//! draw sequence reproduces a byte-identical [`combat::DamageResult`].

pub mod combat;
pub mod config;
pub mod context;
pub mod effect;
pub mod element;
pub mod error;
pub mod prelude;
pub mod profile;
pub mod rng;
pub mod support;
pub mod types;

// Re-export core types for convenience
pub use combat::{
    compute_damage, post_process, resolve_attack, resolve_attack_mut, resolve_attack_with,
    resolve_judgement, DamageResult,
};
pub use config::{load_combatant_configs, parse_combatant_configs, ConfigError};
pub use context::{AttackParams, BattleContext};
pub use effect::{EffectSink, NullEffectSink};
pub use error::CombatError;
pub use profile::StatProfile;
pub use rng::{RandomSource, RngSource, ScriptedSource};
pub use support::{cc_duration, check_cooperation, resolve_counter, resolve_heal, HealResult};
pub use types::{
    AttackRange, AttackType, DamageOptions, ElementType, Immunity, Judgement, RowPosition,
};
