//! BattleContext - the ephemeral inputs of one resolution call

use crate::error::CombatError;
use crate::profile::StatProfile;
use crate::types::{AttackType, DamageOptions};
use serde::{Deserialize, Serialize};

/// Attack parameters shared by a whole action
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackParams {
    /// Skill power percentage; 100 = unmodified
    pub skill_power: f64,
    /// Break Point resource spent on this action
    pub used_bp: u32,
    pub attack_type: AttackType,
    pub is_skill_attack: bool,
    pub options: DamageOptions,
}

impl Default for AttackParams {
    fn default() -> Self {
        AttackParams {
            skill_power: 100.0,
            used_bp: 0,
            attack_type: AttackType::Physical,
            is_skill_attack: false,
            options: DamageOptions::none(),
        }
    }
}

impl AttackParams {
    /// Parameters for a plain basic attack
    pub fn basic() -> Self {
        AttackParams::default()
    }

    /// Parameters for a skill attack at the given power percentage
    pub fn skill(skill_power: f64) -> Self {
        AttackParams {
            skill_power,
            is_skill_attack: true,
            ..Default::default()
        }
    }

    pub fn with_bp(mut self, used_bp: u32) -> Self {
        self.used_bp = used_bp;
        self
    }

    pub fn with_options(mut self, options: DamageOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_attack_type(mut self, attack_type: AttackType) -> Self {
        self.attack_type = attack_type;
        self
    }
}

/// Borrowed view of one attack resolution, constructed per call
#[derive(Debug, Clone, Copy)]
pub struct BattleContext<'a> {
    pub attacker: &'a StatProfile,
    pub defender: &'a StatProfile,
    pub params: AttackParams,
}

impl<'a> BattleContext<'a> {
    pub fn new(attacker: &'a StatProfile, defender: &'a StatProfile, params: AttackParams) -> Self {
        BattleContext {
            attacker,
            defender,
            params,
        }
    }

    /// Reject contexts whose participants were never populated
    ///
    /// A zero HP pool marks a profile that was never loaded; resolving
    /// against it would silently return nonsense. This is distinct from
    /// every zero-damage outcome (miss/dodge/immune).
    pub fn validate(&self) -> Result<(), CombatError> {
        if self.attacker.max_hp <= 0.0 {
            return Err(CombatError::InvalidContext("attacker has no hp pool"));
        }
        if self.defender.max_hp <= 0.0 {
            return Err(CombatError::InvalidContext("defender has no hp pool"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_profiles() {
        let good = StatProfile::new(100.0, 1000.0);
        let empty = StatProfile::default();

        let ctx = BattleContext::new(&good, &empty, AttackParams::basic());
        assert_eq!(
            ctx.validate(),
            Err(CombatError::InvalidContext("defender has no hp pool"))
        );

        let ctx = BattleContext::new(&empty, &good, AttackParams::basic());
        assert!(matches!(ctx.validate(), Err(CombatError::InvalidContext(_))));

        let ctx = BattleContext::new(&good, &good, AttackParams::basic());
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_params_builders() {
        let params = AttackParams::skill(150.0).with_bp(2);
        assert!(params.is_skill_attack);
        assert!((params.skill_power - 150.0).abs() < f64::EPSILON);
        assert_eq!(params.used_bp, 2);
    }
}
