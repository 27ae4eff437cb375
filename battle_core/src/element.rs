//! Elemental advantage table - pure multiplier lookup between element pairs
//!
//! The elements form one asymmetric cycle:
//!
//! `Plasma -> Power -> Chemical -> Bio -> Plasma`
//!
//! each step at x1.5 in the forward direction and x(1/1.3) in reverse.
//! `Electrical` and `Network` are mutually strong at x1.5 in both
//! directions. Every other pair (including `None`/`Max` on either side
//! and identical elements) is neutral at x1.0.

use crate::types::ElementType;

/// Elemental multiplier constants
pub mod constants {
    /// Multiplier when the attacker has the advantage
    pub const ADVANTAGE_MULTIPLIER: f64 = 1.5;

    /// Multiplier when the attacker is at a disadvantage (~0.77)
    pub const DISADVANTAGE_MULTIPLIER: f64 = 1.0 / 1.3;

    /// Multiplier for neutral pairings
    pub const NEUTRAL_MULTIPLIER: f64 = 1.0;
}

use constants::{ADVANTAGE_MULTIPLIER, DISADVANTAGE_MULTIPLIER, NEUTRAL_MULTIPLIER};

/// The forward edges of the advantage cycle, attacker beats defender
const CYCLE: [(ElementType, ElementType); 4] = [
    (ElementType::Plasma, ElementType::Power),
    (ElementType::Power, ElementType::Chemical),
    (ElementType::Chemical, ElementType::Bio),
    (ElementType::Bio, ElementType::Plasma),
];

fn beats(attacker: ElementType, defender: ElementType) -> bool {
    if CYCLE.contains(&(attacker, defender)) {
        return true;
    }
    // Electrical and Network are strong against each other
    matches!(
        (attacker, defender),
        (ElementType::Electrical, ElementType::Network)
            | (ElementType::Network, ElementType::Electrical)
    )
}

/// Get the damage multiplier for an attacker/defender element pair
pub fn multiplier(attacker: ElementType, defender: ElementType) -> f64 {
    if beats(attacker, defender) {
        ADVANTAGE_MULTIPLIER
    } else if beats(defender, attacker) {
        DISADVANTAGE_MULTIPLIER
    } else {
        NEUTRAL_MULTIPLIER
    }
}

/// Check if the attacker is elementally advantaged
pub fn is_advantage(attacker: ElementType, defender: ElementType) -> bool {
    multiplier(attacker, defender) > 1.0
}

/// Check if the attacker is elementally disadvantaged
pub fn is_disadvantage(attacker: ElementType, defender: ElementType) -> bool {
    multiplier(attacker, defender) < 1.0
}
