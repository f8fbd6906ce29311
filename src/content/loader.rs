//! Load encounter definitions from TOML files

use std::path::Path;

use thiserror::Error;

use crate::content::definition::EncounterDefinition;

/// Errors that can occur when loading an encounter
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Parsed, but not a playable encounter
    #[error("Invalid encounter: {0}")]
    Invalid(String),
}

impl EncounterDefinition {
    /// Parse and validate an encounter from TOML
    ///
    /// Authored encounters must also ship a fate deck; enemy attacks cannot
    /// resolve without one.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let definition: EncounterDefinition = toml::from_str(content)?;
        definition.validate().map_err(LoadError::Invalid)?;
        if definition.fate_deck.is_empty() {
            return Err(LoadError::Invalid("Encounter needs at least one fate card".into()));
        }
        Ok(definition)
    }

    /// Check the definition can start a combat
    pub fn validate(&self) -> Result<(), String> {
        self.config.validate()?;

        if self.enemies.is_empty() {
            return Err("Encounter needs at least one enemy".into());
        }
        if self.player.health <= 0 {
            return Err(format!("Player '{}' must start alive", self.player.name));
        }
        if let Some(enemy) = self.enemies.iter().find(|e| e.health <= 0) {
            return Err(format!("Enemy '{}' must start alive", enemy.name));
        }
        if let Some(enemy) = self.enemies.iter().find(|e| e.will.is_some_and(|w| w <= 0)) {
            return Err(format!("Enemy '{}' must start with positive Will", enemy.name));
        }
        Ok(())
    }
}

/// Load an encounter definition from a TOML file on disk
pub fn load_encounter(path: impl AsRef<Path>) -> Result<EncounterDefinition, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let definition = EncounterDefinition::from_toml_str(&content)?;
    tracing::info!(
        "Loaded encounter from {} ({} enemies, {} fate cards)",
        path.display(),
        definition.enemies.len(),
        definition.fate_deck.len()
    );
    Ok(definition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardAbility, DamageType};
    use crate::entity::Intent;
    use crate::fate::{FateKeyword, FateSuit};

    const ENCOUNTER: &str = r#"
        seed = 42
        resonance = -10.0

        [config]
        opening_hand_size = 4

        [player]
        name = "Vasilisa"
        strength = 3
        health = 30

        [[player.deck]]
        id = "strike"
        power = 3

        [[player.deck]]
        id = "rebuke"
        cost = 2
        abilities = [{ type = "damage", amount = 4, damage_type = "mental" }]

        [[enemies]]
        name = "Leshy"
        health = 12
        power = 4
        defense = 1
        will = 6
        pattern = [{ type = "attack", amount = 4 }, { type = "ritual", amount = 3 }]
        faith_reward = 2

        [[fate_deck]]
        id = "ember"
        base_value = 1
        suit = "nav"
        keyword = "surge"
    "#;

    #[test]
    fn test_parse_encounter() {
        let definition = EncounterDefinition::from_toml_str(ENCOUNTER).unwrap();
        assert_eq!(definition.seed, 42);
        assert_eq!(definition.resonance, -10.0);
        assert_eq!(definition.config.opening_hand_size, 4);
        assert_eq!(definition.config.cards_drawn_per_round, 1);

        assert_eq!(definition.player.energy, 3);
        assert_eq!(definition.player.deck[0].cost, 1);
        assert_eq!(definition.player.deck[0].power, Some(3));
        assert_eq!(
            definition.player.deck[1].abilities,
            vec![CardAbility::Damage {
                amount: 4,
                damage_type: DamageType::Mental
            }]
        );

        let enemy = &definition.enemies[0];
        assert_eq!(enemy.will, Some(6));
        assert_eq!(enemy.pattern, vec![Intent::Attack(4), Intent::Ritual(3)]);
        assert!(definition.has_diplomacy());

        let fate = &definition.fate_deck[0];
        assert_eq!(fate.suit, Some(FateSuit::Nav));
        assert_eq!(fate.keyword, Some(FateKeyword::Surge));
    }

    #[test]
    fn test_encounter_without_enemies_is_invalid() {
        let content = r#"
            seed = 1
            enemies = []

            [player]
            name = "lone"
            health = 10
        "#;
        let err = EncounterDefinition::from_toml_str(content).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));
    }

    #[test]
    fn test_encounter_without_fate_cards_is_invalid() {
        let (head, _) = ENCOUNTER.split_once("[[fate_deck]]").unwrap();
        let err = EncounterDefinition::from_toml_str(head).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(ref msg) if msg.contains("fate card")));
    }

    #[test]
    fn test_enemy_without_will_left_is_invalid() {
        let content = ENCOUNTER.replace("will = 6", "will = 0");
        let err = EncounterDefinition::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(ref msg) if msg.contains("Will")));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_encounter("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
