//! Core types shared across the combat engine

use serde::{Deserialize, Serialize};

/// Element tag carried by every combatant and attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    /// No element; never advantaged or disadvantaged
    None,
    Power,
    Plasma,
    Bio,
    Chemical,
    Electrical,
    Network,
    /// Sentinel kept for data-table parity; behaves like `None`
    Max,
}

impl Default for ElementType {
    fn default() -> Self {
        ElementType::None
    }
}

impl ElementType {
    /// Get all playable elements (excludes the `None`/`Max` sentinels)
    pub fn all() -> &'static [ElementType] {
        &[
            ElementType::Power,
            ElementType::Plasma,
            ElementType::Bio,
            ElementType::Chemical,
            ElementType::Electrical,
            ElementType::Network,
        ]
    }
}

/// Category of an attack, checked against defender immunities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackType {
    Physical,
    Magical,
    /// Bosses are immune to special attacks
    Special,
}

impl Default for AttackType {
    fn default() -> Self {
        AttackType::Physical
    }
}

/// Delivery range of a combatant's attacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackRange {
    Melee,
    Ranged,
}

impl Default for AttackRange {
    fn default() -> Self {
        AttackRange::Melee
    }
}

/// Formation row a combatant occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPosition {
    Front,
    Back,
}

impl Default for RowPosition {
    fn default() -> Self {
        RowPosition::Front
    }
}

/// A single immunity tag on a defender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Immunity {
    /// Immune to a whole attack category
    ByAttackType(AttackType),
    /// Immune to attackers of a given element
    ByElement(ElementType),
}

/// Per-attack behavior switches supplied by the caller
///
/// Typed booleans instead of OR'd integer flags. The engine consumes
/// `ignore_defense`, `true_damage`, `ignore_dodge`, `ignore_block`,
/// `cannot_miss` and `ignore_shield`; the remaining flags are carried
/// through for the skill-orchestration layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOptions {
    /// Skip the defense mitigation stage
    #[serde(default)]
    pub ignore_defense: bool,
    /// Final damage is the raw base value; bypasses everything but shield and block
    #[serde(default)]
    pub true_damage: bool,
    /// Damage expressed as a percentage of a resource (orchestrator concern)
    #[serde(default)]
    pub percent_damage: bool,
    /// Marks penetrating delivery (orchestrator concern)
    #[serde(default)]
    pub penetrating: bool,
    /// Marks splash delivery (orchestrator concern)
    #[serde(default)]
    pub splash: bool,
    /// Marks draining delivery (orchestrator concern)
    #[serde(default)]
    pub drain: bool,
    /// Skip the dodge roll
    #[serde(default)]
    pub ignore_dodge: bool,
    /// Skip the block roll
    #[serde(default)]
    pub ignore_block: bool,
    /// Skip the miss roll (and the dodge roll)
    #[serde(default)]
    pub cannot_miss: bool,
    /// Skip shield absorption in post-processing
    #[serde(default)]
    pub ignore_shield: bool,
}

impl DamageOptions {
    /// Options for a plain attack with no special behavior
    pub fn none() -> Self {
        DamageOptions::default()
    }

    /// Options for true damage
    pub fn true_damage() -> Self {
        DamageOptions {
            true_damage: true,
            ..Default::default()
        }
    }
}

/// Outcome flags produced once per resolution, immutable thereafter
///
/// Evaluation order: immune > miss > dodge > hit, then block / critical /
/// strike / weakness / resist are layered onto a hit. Invariants:
/// - `miss`, `dodge` and `immune` are exclusive states: no other flag set
/// - `critical` and `strike` are never both set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgement {
    pub hit: bool,
    pub miss: bool,
    pub critical: bool,
    pub block: bool,
    pub dodge: bool,
    pub strike: bool,
    /// Attacker was elementally advantaged (informational)
    pub weakness: bool,
    /// Secondary skill effects were resisted; damage still applies
    pub resist: bool,
    pub immune: bool,
}

impl Judgement {
    /// A plain hit with no modifiers
    pub fn hit() -> Self {
        Judgement {
            hit: true,
            ..Default::default()
        }
    }

    /// Exclusive miss state
    pub fn miss() -> Self {
        Judgement {
            miss: true,
            ..Default::default()
        }
    }

    /// Exclusive dodge state
    pub fn dodge() -> Self {
        Judgement {
            dodge: true,
            ..Default::default()
        }
    }

    /// Exclusive immune state
    pub fn immune() -> Self {
        Judgement {
            immune: true,
            ..Default::default()
        }
    }

    /// True when the attack never reaches the damage pipeline
    pub fn short_circuits(&self) -> bool {
        self.miss || self.dodge || self.immune
    }

    /// True when damage is actually dealt
    pub fn connects(&self) -> bool {
        self.hit && !self.short_circuits()
    }

    /// Get a compact display string, e.g. "Hit|Critical|Block"
    pub fn summary(&self) -> String {
        let flags: &[(&str, bool)] = &[
            ("Immune", self.immune),
            ("Miss", self.miss),
            ("Dodge", self.dodge),
            ("Hit", self.hit),
            ("Block", self.block),
            ("Critical", self.critical),
            ("Strike", self.strike),
            ("Weakness", self.weakness),
            ("Resist", self.resist),
        ];
        let set: Vec<&str> = flags.iter().filter(|(_, on)| *on).map(|(n, _)| *n).collect();
        if set.is_empty() {
            "None".to_string()
        } else {
            set.join("|")
        }
    }
}
