//! StatProfile - one combatant's combat-relevant attributes
//!
//! Percentage-style fields are clamped at the point of mutation through
//! the dedicated setters, never at read time. Upstream data with values
//! outside the documented ranges is silently clamped rather than
//! rejected.

use crate::types::{AttackRange, AttackType, ElementType, Immunity, RowPosition};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Clamp ranges for the percentage-style stats
pub mod ranges {
    /// Critical damage multiplier bounds
    pub const CRIT_DAMAGE_MIN: f64 = 1.0;
    pub const CRIT_DAMAGE_MAX: f64 = 3.5;

    /// Block mitigation percent bounds (0 = unset)
    pub const BLOCK_POWER_MIN: f64 = 20.0;
    pub const BLOCK_POWER_MAX: f64 = 80.0;

    /// Penetration percent bounds
    pub const PENETRATION_MAX: f64 = 100.0;

    /// Elemental attack percent bounds
    pub const ELEMENTAL_ATK_MIN: f64 = -100.0;
    pub const ELEMENTAL_ATK_MAX: f64 = 200.0;

    /// Elemental resistance percent bounds
    pub const ELEMENTAL_RES_MIN: f64 = -100.0;
    pub const ELEMENTAL_RES_MAX: f64 = 100.0;

    /// Flat damage reduction percent cap
    pub const DAMAGE_REDUCE_MAX: f64 = 90.0;

    /// Crowd-control enhancement percent bounds
    pub const CC_ENHANCE_MIN: f64 = -100.0;
    pub const CC_ENHANCE_MAX: f64 = 100.0;

    /// Tenacity percent cap
    pub const TENACITY_MAX: f64 = 80.0;

    /// Lifesteal percent cap
    pub const LIFESTEAL_MAX: f64 = 100.0;

    /// Heal power percent bounds
    pub const HEAL_POWER_MIN: f64 = -100.0;
    pub const HEAL_POWER_MAX: f64 = 200.0;

    /// Default accuracy percent for a fresh profile
    pub const DEFAULT_HIT_RATE: f64 = 95.0;
}

/// Complete combat stat state for one combatant
///
/// Owned by the combatant for its battle lifetime. Mutated only through
/// the shield/HP helpers; everything else reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatProfile {
    // === Identity ===
    #[serde(default)]
    pub is_ally: bool,
    #[serde(default)]
    pub is_boss: bool,
    #[serde(default)]
    pub is_monster: bool,
    #[serde(default)]
    pub element_type: ElementType,
    #[serde(default)]
    pub attack_range: AttackRange,
    #[serde(default)]
    pub row: RowPosition,

    // === Offense ===
    pub attack: f64,
    /// Optional fixed damage range overriding `attack` (both > 0 to apply)
    #[serde(default)]
    pub min_damage: f64,
    #[serde(default)]
    pub max_damage: f64,
    /// Critical chance as a fraction in [0,1]
    #[serde(default)]
    pub crit_rate: f64,
    /// Critical damage multiplier in [1.0, 3.5]
    #[serde(default = "default_crit_damage")]
    pub crit_damage: f64,
    /// Symmetric variance fraction applied once per damage computation
    #[serde(default)]
    pub variant_damage: f64,
    /// Defense penetration percent in [0,100]
    #[serde(default)]
    pub penetration: f64,
    /// Elemental attack percent in [-100,200]
    #[serde(default)]
    pub elemental_atk: f64,

    // === Defense ===
    #[serde(default)]
    pub defense: f64,
    /// Block chance percent in [0,100]
    #[serde(default)]
    pub block_rate: f64,
    /// Percent mitigated on block, [20,80]; 0 means unset
    #[serde(default)]
    pub block_power: f64,
    /// Dodge chance percent in [0,100]
    #[serde(default)]
    pub dodge_rate: f64,
    /// Own accuracy percent; default 95
    #[serde(default = "default_hit_rate")]
    pub hit_rate: f64,
    /// Elemental resistance percent in [-100,100]
    #[serde(default)]
    pub elemental_res: f64,
    /// Flat damage reduction percent in [0,90]
    #[serde(default)]
    pub damage_reduce: f64,
    /// Subtracted from the attacker's critical chance (fraction)
    #[serde(default)]
    pub critical_resist: f64,
    /// Chance to nullify an incoming critical flag, fraction in [0,1]
    #[serde(default)]
    pub crit_nullify_chance: f64,

    // === Resources ===
    pub hp: f64,
    pub max_hp: f64,
    #[serde(default)]
    pub shield: f64,

    // === Skill-effect resistance ===
    #[serde(default)]
    pub skill_hit_rate: f64,
    #[serde(default)]
    pub skill_resist_rate: f64,
    /// Crowd-control enhancement percent in [-100,100]
    #[serde(default)]
    pub cc_enhance: f64,
    /// Crowd-control resistance percent in [0,80]
    #[serde(default)]
    pub tenacity: f64,

    // === Misc ===
    /// Attack types / elements this combatant cannot be affected by
    #[serde(default)]
    pub immunities: HashSet<Immunity>,
    /// Lifesteal percent in [0,100]
    #[serde(default)]
    pub lifesteal: f64,
    /// Healing effectiveness percent in [-100,200]
    #[serde(default)]
    pub heal_power: f64,
    /// Counter-attack chance percent in [0,100]
    #[serde(default)]
    pub counter: f64,
    /// Cooperation trigger chance as a fraction in [0,1]
    #[serde(default)]
    pub cooperation: f64,
}

fn default_crit_damage() -> f64 {
    ranges::CRIT_DAMAGE_MIN
}

fn default_hit_rate() -> f64 {
    ranges::DEFAULT_HIT_RATE
}

impl Default for StatProfile {
    fn default() -> Self {
        StatProfile {
            is_ally: false,
            is_boss: false,
            is_monster: false,
            element_type: ElementType::None,
            attack_range: AttackRange::Melee,
            row: RowPosition::Front,
            attack: 0.0,
            min_damage: 0.0,
            max_damage: 0.0,
            crit_rate: 0.0,
            crit_damage: ranges::CRIT_DAMAGE_MIN,
            variant_damage: 0.0,
            penetration: 0.0,
            elemental_atk: 0.0,
            defense: 0.0,
            block_rate: 0.0,
            block_power: 0.0,
            dodge_rate: 0.0,
            hit_rate: ranges::DEFAULT_HIT_RATE,
            elemental_res: 0.0,
            damage_reduce: 0.0,
            critical_resist: 0.0,
            crit_nullify_chance: 0.0,
            hp: 0.0,
            max_hp: 0.0,
            shield: 0.0,
            skill_hit_rate: 0.0,
            skill_resist_rate: 0.0,
            cc_enhance: 0.0,
            tenacity: 0.0,
            immunities: HashSet::new(),
            lifesteal: 0.0,
            heal_power: 0.0,
            counter: 0.0,
            cooperation: 0.0,
        }
    }
}

impl StatProfile {
    /// Create a profile with the given attack and HP pool, full health
    pub fn new(attack: f64, max_hp: f64) -> Self {
        StatProfile {
            attack,
            hp: max_hp,
            max_hp,
            ..Default::default()
        }
    }

    // === Clamped setters (point-of-mutation clamping) ===

    pub fn set_crit_rate(&mut self, value: f64) {
        self.crit_rate = value.clamp(0.0, 1.0);
    }

    pub fn set_crit_damage(&mut self, value: f64) {
        self.crit_damage = value.clamp(ranges::CRIT_DAMAGE_MIN, ranges::CRIT_DAMAGE_MAX);
    }

    /// Set block power; zero clears it back to unset
    pub fn set_block_power(&mut self, value: f64) {
        self.block_power = if value <= 0.0 {
            0.0
        } else {
            value.clamp(ranges::BLOCK_POWER_MIN, ranges::BLOCK_POWER_MAX)
        };
    }

    pub fn set_block_rate(&mut self, value: f64) {
        self.block_rate = value.clamp(0.0, 100.0);
    }

    pub fn set_dodge_rate(&mut self, value: f64) {
        self.dodge_rate = value.clamp(0.0, 100.0);
    }

    pub fn set_penetration(&mut self, value: f64) {
        self.penetration = value.clamp(0.0, ranges::PENETRATION_MAX);
    }

    pub fn set_elemental_atk(&mut self, value: f64) {
        self.elemental_atk = value.clamp(ranges::ELEMENTAL_ATK_MIN, ranges::ELEMENTAL_ATK_MAX);
    }

    pub fn set_elemental_res(&mut self, value: f64) {
        self.elemental_res = value.clamp(ranges::ELEMENTAL_RES_MIN, ranges::ELEMENTAL_RES_MAX);
    }

    pub fn set_damage_reduce(&mut self, value: f64) {
        self.damage_reduce = value.clamp(0.0, ranges::DAMAGE_REDUCE_MAX);
    }

    pub fn set_crit_nullify_chance(&mut self, value: f64) {
        self.crit_nullify_chance = value.clamp(0.0, 1.0);
    }

    pub fn set_cc_enhance(&mut self, value: f64) {
        self.cc_enhance = value.clamp(ranges::CC_ENHANCE_MIN, ranges::CC_ENHANCE_MAX);
    }

    pub fn set_tenacity(&mut self, value: f64) {
        self.tenacity = value.clamp(0.0, ranges::TENACITY_MAX);
    }

    pub fn set_lifesteal(&mut self, value: f64) {
        self.lifesteal = value.clamp(0.0, ranges::LIFESTEAL_MAX);
    }

    pub fn set_heal_power(&mut self, value: f64) {
        self.heal_power = value.clamp(ranges::HEAL_POWER_MIN, ranges::HEAL_POWER_MAX);
    }

    pub fn set_counter(&mut self, value: f64) {
        self.counter = value.clamp(0.0, 100.0);
    }

    pub fn set_cooperation(&mut self, value: f64) {
        self.cooperation = value.clamp(0.0, 1.0);
    }

    /// Re-clamp every ranged field to its documented bounds
    ///
    /// Deserialization writes the fields directly and skips the setters,
    /// so profiles built from upstream data pass through here once;
    /// out-of-range values are silently clamped rather than rejected.
    pub fn clamp_ranges(&mut self) {
        self.set_crit_rate(self.crit_rate);
        self.set_crit_damage(self.crit_damage);
        self.set_block_power(self.block_power);
        self.set_block_rate(self.block_rate);
        self.set_dodge_rate(self.dodge_rate);
        self.set_penetration(self.penetration);
        self.set_elemental_atk(self.elemental_atk);
        self.set_elemental_res(self.elemental_res);
        self.set_damage_reduce(self.damage_reduce);
        self.set_crit_nullify_chance(self.crit_nullify_chance);
        self.set_cc_enhance(self.cc_enhance);
        self.set_tenacity(self.tenacity);
        self.set_lifesteal(self.lifesteal);
        self.set_heal_power(self.heal_power);
        self.set_counter(self.counter);
        self.set_cooperation(self.cooperation);
        self.hit_rate = self.hit_rate.clamp(0.0, 100.0);
        self.critical_resist = self.critical_resist.clamp(0.0, 1.0);
        self.skill_hit_rate = self.skill_hit_rate.clamp(0.0, 1.0);
        self.skill_resist_rate = self.skill_resist_rate.clamp(0.0, 1.0);
        self.variant_damage = self.variant_damage.max(0.0);
    }

    // === Resource mutators (maintain 0 <= hp <= max_hp, shield >= 0) ===

    /// Apply healing; returns the amount actually restored
    pub fn apply_healing(&mut self, amount: f64) -> f64 {
        let healed = amount.max(0.0).min(self.missing_hp());
        self.hp += healed;
        healed
    }

    /// Deduct HP; returns the amount actually lost
    pub fn apply_hp_loss(&mut self, amount: f64) -> f64 {
        let lost = amount.max(0.0).min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Consume shield; returns the amount actually absorbed
    pub fn consume_shield(&mut self, amount: f64) -> f64 {
        let absorbed = amount.max(0.0).min(self.shield);
        self.shield -= absorbed;
        absorbed
    }

    /// Grant shield points
    pub fn add_shield(&mut self, amount: f64) {
        self.shield += amount.max(0.0);
    }

    // === Queries ===

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    pub fn missing_hp(&self) -> f64 {
        (self.max_hp - self.hp).max(0.0)
    }

    /// Check whether this profile is immune to an incoming attack
    pub fn is_immune_to(&self, attack_type: AttackType, attacker_element: ElementType) -> bool {
        self.immunities.contains(&Immunity::ByAttackType(attack_type))
            || self.immunities.contains(&Immunity::ByElement(attacker_element))
    }

    /// Roll the base damage value: the fixed range when set, flat attack otherwise
    pub fn effective_attack(&self, rng: &mut impl RandomSource) -> f64 {
        if self.min_damage > 0.0 && self.max_damage > 0.0 {
            rng.range_inclusive(self.min_damage as i64, self.max_damage as i64) as f64
        } else {
            self.attack
        }
    }

    /// Block power with the unset fallback applied
    pub fn effective_block_power(&self) -> f64 {
        if self.block_power <= 0.0 {
            crate::combat::constants::DEFAULT_BLOCK_POWER
        } else {
            self.block_power
        }
    }

    /// Get a one-line display string
    pub fn summary(&self) -> String {
        format!(
            "HP {:.0}/{:.0}  shield {:.0}  atk {:.0}  def {:.0}  [{:?}]",
            self.hp, self.max_hp, self.shield, self.attack, self.defense, self.element_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_clamp() {
        let mut p = StatProfile::new(100.0, 1000.0);
        p.set_crit_damage(9.0);
        assert!((p.crit_damage - 3.5).abs() < f64::EPSILON);
        p.set_crit_damage(0.2);
        assert!((p.crit_damage - 1.0).abs() < f64::EPSILON);

        p.set_block_power(95.0);
        assert!((p.block_power - 80.0).abs() < f64::EPSILON);
        p.set_block_power(5.0);
        assert!((p.block_power - 20.0).abs() < f64::EPSILON);
        p.set_block_power(0.0);
        assert!((p.block_power - 0.0).abs() < f64::EPSILON);

        p.set_damage_reduce(150.0);
        assert!((p.damage_reduce - 90.0).abs() < f64::EPSILON);

        p.set_elemental_atk(500.0);
        assert!((p.elemental_atk - 200.0).abs() < f64::EPSILON);
        p.set_elemental_atk(-500.0);
        assert!((p.elemental_atk + 100.0).abs() < f64::EPSILON);

        p.set_tenacity(200.0);
        assert!((p.tenacity - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_ranges_repairs_direct_writes() {
        let mut p = StatProfile::new(100.0, 1000.0);
        p.block_power = 95.0;
        p.elemental_atk = 500.0;
        p.hit_rate = 140.0;
        p.skill_resist_rate = 2.0;
        p.crit_damage = 0.2;

        p.clamp_ranges();
        assert!((p.block_power - 80.0).abs() < f64::EPSILON);
        assert!((p.elemental_atk - 200.0).abs() < f64::EPSILON);
        assert!((p.hit_rate - 100.0).abs() < f64::EPSILON);
        assert!((p.skill_resist_rate - 1.0).abs() < f64::EPSILON);
        assert!((p.crit_damage - 1.0).abs() < f64::EPSILON);

        // Zero block power means unset and survives normalization
        p.block_power = 0.0;
        p.clamp_ranges();
        assert!((p.block_power - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hp_invariants() {
        let mut p = StatProfile::new(100.0, 1000.0);
        p.hp = 900.0;

        let healed = p.apply_healing(500.0);
        assert!((healed - 100.0).abs() < f64::EPSILON);
        assert!((p.hp - 1000.0).abs() < f64::EPSILON);

        let lost = p.apply_hp_loss(2000.0);
        assert!((lost - 1000.0).abs() < f64::EPSILON);
        assert!((p.hp - 0.0).abs() < f64::EPSILON);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_shield_invariants() {
        let mut p = StatProfile::new(100.0, 1000.0);
        p.add_shield(30.0);

        let absorbed = p.consume_shield(50.0);
        assert!((absorbed - 30.0).abs() < f64::EPSILON);
        assert!(p.shield >= 0.0);
        assert!((p.shield - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_immunity_lookup() {
        use crate::types::{AttackType, ElementType, Immunity};

        let mut p = StatProfile::new(100.0, 1000.0);
        p.immunities.insert(Immunity::ByAttackType(AttackType::Magical));
        p.immunities.insert(Immunity::ByElement(ElementType::Plasma));

        assert!(p.is_immune_to(AttackType::Magical, ElementType::None));
        assert!(p.is_immune_to(AttackType::Physical, ElementType::Plasma));
        assert!(!p.is_immune_to(AttackType::Physical, ElementType::Power));
    }

    #[test]
    fn test_effective_block_power_fallback() {
        let mut p = StatProfile::new(100.0, 1000.0);
        assert!((p.effective_block_power() - 50.0).abs() < f64::EPSILON);
        p.set_block_power(30.0);
        assert!((p.effective_block_power() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_effective_attack_flat() {
        use crate::rng::ScriptedSource;

        let p = StatProfile::new(100.0, 1000.0);
        let mut rng = ScriptedSource::new(vec![]);
        assert!((p.effective_attack(&mut rng) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_effective_attack_range() {
        use crate::rng::ScriptedSource;

        let mut p = StatProfile::new(100.0, 1000.0);
        p.min_damage = 40.0;
        p.max_damage = 60.0;
        // 0.5 maps to the middle of [40, 60]
        let mut rng = ScriptedSource::new(vec![0.5]);
        let rolled = p.effective_attack(&mut rng);
        assert!((40.0..=60.0).contains(&rolled));
    }

    #[test]
    fn test_toml_profile() {
        let toml = r#"
attack = 120
hp = 800
max_hp = 800
crit_rate = 0.25
dodge_rate = 10
element_type = "plasma"
"#;
        let p: StatProfile = toml::from_str(toml).unwrap();
        assert!((p.attack - 120.0).abs() < f64::EPSILON);
        assert!((p.hit_rate - 95.0).abs() < f64::EPSILON);
        assert_eq!(p.element_type, ElementType::Plasma);
    }
}
