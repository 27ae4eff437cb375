//! EffectSink - feedback seam for presentation layers
//!
//! The engine reports judgement and damage events through an injected
//! sink instead of reaching into effect/UI singletons, so resolution
//! stays testable in isolation. Implementations must not mutate combat
//! state; they only observe.

use crate::combat::DamageResult;
use crate::types::Judgement;

/// Observer for resolution events
pub trait EffectSink {
    /// Called once per resolution with the final judgement
    fn on_judgement(&mut self, _judgement: &Judgement) {}

    /// Called when a resolution produced a damage result
    fn on_damage(&mut self, _result: &DamageResult) {}

    /// Called when a resolution healed the attacker through lifesteal.
    /// Standalone heals go through [`crate::support::resolve_heal`],
    /// which returns a delta; callers applying one report it here
    /// themselves.
    fn on_heal(&mut self, _amount: f64) {}
}

/// Sink that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEffectSink;

impl EffectSink for NullEffectSink {}
