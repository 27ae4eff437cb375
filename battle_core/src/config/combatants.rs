//! Combatant roster loading - named StatProfiles from TOML

use super::ConfigError;
use crate::profile::StatProfile;
use std::collections::HashMap;
use std::path::Path;

/// Load named combatant profiles from a TOML file
///
/// Format: one table per combatant, keyed by name:
/// ```toml
/// [raider]
/// attack = 120
/// hp = 800
/// max_hp = 800
/// crit_rate = 0.25
/// element_type = "plasma"
/// ```
pub fn load_combatant_configs(path: &Path) -> Result<HashMap<String, StatProfile>, ConfigError> {
    let roster: HashMap<String, StatProfile> = super::load_toml(path)?;
    normalize_and_validate(roster)
}

/// Parse combatant profiles from TOML content
pub fn parse_combatant_configs(content: &str) -> Result<HashMap<String, StatProfile>, ConfigError> {
    let roster: HashMap<String, StatProfile> = super::parse_toml(content)?;
    normalize_and_validate(roster)
}

/// Clamp every ranged stat to its documented bounds, then check the
/// structural invariants that cannot be repaired by clamping
fn normalize_and_validate(
    mut roster: HashMap<String, StatProfile>,
) -> Result<HashMap<String, StatProfile>, ConfigError> {
    for profile in roster.values_mut() {
        profile.clamp_ranges();
    }
    validate(&roster)?;
    Ok(roster)
}

fn validate(roster: &HashMap<String, StatProfile>) -> Result<(), ConfigError> {
    for (name, profile) in roster {
        if profile.max_hp <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "combatant '{}' has no hp pool",
                name
            )));
        }
        if profile.hp > profile.max_hp {
            return Err(ConfigError::ValidationError(format!(
                "combatant '{}' has hp above max_hp",
                name
            )));
        }
        if profile.min_damage > profile.max_damage {
            return Err(ConfigError::ValidationError(format!(
                "combatant '{}' has an inverted damage range",
                name
            )));
        }
    }
    Ok(())
}
