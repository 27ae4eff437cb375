//! DamageResult - outcome of one attack resolution

use crate::profile::StatProfile;
use crate::types::Judgement;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Result of resolving one attack, created fresh per call
///
/// All mitigation amounts are reported as deltas; nothing here has been
/// applied to the participants. [`DamageResult::apply_to`] performs the
/// engine-owned side effects (defender shield debit, attacker lifesteal
/// heal). Debiting `final_damage` from the defender's HP is the
/// caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageResult {
    /// The judgement this result was computed under; the critical flag
    /// may have been nullified for reporting after damage was computed
    pub judgement: Judgement,

    // === Damage ===
    /// Damage remaining after block and shield, never negative
    pub final_damage: f64,
    /// Pipeline output before block mitigation and shield absorption
    pub original_damage: f64,

    // === Mitigation deltas ===
    /// Extra damage added by the critical multiplier
    pub critical_bonus: f64,
    /// Damage removed by the defense mitigation stage
    pub defense_absorbed: f64,
    /// Damage removed by block mitigation
    pub blocked_damage: f64,
    /// Damage soaked by the defender's shield, never negative
    pub shield_absorbed: f64,
    /// Elemental rate applied in the pipeline
    pub element_multiplier: f64,

    // === Lifesteal ===
    pub has_life_steal: bool,
    /// HP the attacker recovers, capped at missing HP, never negative
    pub life_steal_amount: f64,

    /// Named per-stage values for diagnostics, in stage order
    #[serde(default)]
    pub trace: IndexMap<String, f64>,
}

impl DamageResult {
    /// Create an empty result under the given judgement
    pub fn new(judgement: Judgement) -> Self {
        DamageResult {
            judgement,
            final_damage: 0.0,
            original_damage: 0.0,
            critical_bonus: 0.0,
            defense_absorbed: 0.0,
            blocked_damage: 0.0,
            shield_absorbed: 0.0,
            element_multiplier: 1.0,
            has_life_steal: false,
            life_steal_amount: 0.0,
            trace: IndexMap::new(),
        }
    }

    /// Zero-damage result for a short-circuited judgement
    pub fn no_damage(judgement: Judgement) -> Self {
        DamageResult::new(judgement)
    }

    /// Record a named stage value in the trace
    pub(crate) fn record(&mut self, stage: &str, value: f64) {
        self.trace.insert(stage.to_string(), value);
    }

    // === Derived booleans (ergonomic views of the judgement) ===

    pub fn is_critical(&self) -> bool {
        self.judgement.critical
    }

    pub fn is_blocked(&self) -> bool {
        self.judgement.block
    }

    pub fn is_dodged(&self) -> bool {
        self.judgement.dodge
    }

    pub fn is_missed(&self) -> bool {
        self.judgement.miss
    }

    pub fn is_resisted(&self) -> bool {
        self.judgement.resist
    }

    pub fn is_immune(&self) -> bool {
        self.judgement.immune
    }

    /// Apply the engine-owned side effects: consume the defender's
    /// shield and heal the attacker's lifesteal. The caller still
    /// debits `final_damage` from the defender's HP.
    pub fn apply_to(&self, attacker: &mut StatProfile, defender: &mut StatProfile) {
        defender.consume_shield(self.shield_absorbed);
        if self.has_life_steal {
            attacker.apply_healing(self.life_steal_amount);
        }
    }

    /// Get a one-line display string
    pub fn summary(&self) -> String {
        let mut parts = vec![self.judgement.summary()];

        if self.judgement.short_circuits() {
            return parts.remove(0);
        }

        parts.push(format!("{:.0} damage", self.final_damage));

        if self.critical_bonus > 0.0 {
            parts.push(format!("+{:.0} crit", self.critical_bonus));
        }
        if self.defense_absorbed > 0.0 {
            parts.push(format!("{:.0} absorbed by defense", self.defense_absorbed));
        }
        if self.blocked_damage > 0.0 {
            parts.push(format!("{:.0} blocked", self.blocked_damage));
        }
        if self.shield_absorbed > 0.0 {
            parts.push(format!("{:.0} soaked by shield", self.shield_absorbed));
        }
        if self.has_life_steal {
            parts.push(format!("{:.0} lifesteal", self.life_steal_amount));
        }

        parts.join(", ")
    }
}
