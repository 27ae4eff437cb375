//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::profile::StatProfile;
pub use crate::types::{
    AttackRange, AttackType, DamageOptions, ElementType, Immunity, Judgement, RowPosition,
};

// Resolution
pub use crate::combat::{resolve_attack, resolve_attack_mut, resolve_attack_with, DamageResult};
pub use crate::context::{AttackParams, BattleContext};

// Auxiliary formulas
pub use crate::support::{cc_duration, check_cooperation, resolve_counter, resolve_heal};

// Randomness and observation
pub use crate::effect::{EffectSink, NullEffectSink};
pub use crate::rng::{RandomSource, RngSource, ScriptedSource};

// Errors
pub use crate::error::CombatError;
