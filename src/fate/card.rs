//! Fate cards: drawn modifiers that stand in for dice

use serde::{Deserialize, Serialize};

use crate::fate::resonance::{ResonanceRule, ResonanceZone};

/// Alignment of a fate card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FateSuit {
    Nav,
    Yav,
    Prav,
}

/// Special effect printed on a fate card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FateKeyword {
    Surge,
    Focus,
    Ward,
    Shadow,
}

impl FateKeyword {
    pub fn all() -> &'static [FateKeyword] {
        &[
            FateKeyword::Surge,
            FateKeyword::Focus,
            FateKeyword::Ward,
            FateKeyword::Shadow,
        ]
    }
}

/// A fate card value object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FateCard {
    pub id: String,
    pub base_value: i32,
    #[serde(default)]
    pub suit: Option<FateSuit>,
    #[serde(default)]
    pub keyword: Option<FateKeyword>,
    #[serde(default)]
    pub is_critical: bool,
    /// Cannot be removed from the fate deck once added
    #[serde(default)]
    pub is_sticky: bool,
    #[serde(default)]
    pub resonance_rules: Vec<ResonanceRule>,
}

impl FateCard {
    pub fn new(id: impl Into<String>, base_value: i32) -> Self {
        Self {
            id: id.into(),
            base_value,
            suit: None,
            keyword: None,
            is_critical: false,
            is_sticky: false,
            resonance_rules: Vec::new(),
        }
    }

    pub fn with_suit(mut self, suit: FateSuit) -> Self {
        self.suit = Some(suit);
        self
    }

    pub fn with_keyword(mut self, keyword: FateKeyword) -> Self {
        self.keyword = Some(keyword);
        self
    }

    pub fn critical(mut self) -> Self {
        self.is_critical = true;
        self
    }

    pub fn sticky(mut self) -> Self {
        self.is_sticky = true;
        self
    }

    pub fn with_rule(mut self, zone: ResonanceZone, modify_value: i32) -> Self {
        self.resonance_rules.push(ResonanceRule { zone, modify_value });
        self
    }

    /// Base value plus every rule matching the current zone
    pub fn effective_value(&self, zone: ResonanceZone) -> i32 {
        self.base_value
            + self
                .resonance_rules
                .iter()
                .filter(|r| r.zone == zone)
                .map(|r| r.modify_value)
                .sum::<i32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_value_uses_matching_zone_only() {
        let card = FateCard::new("omen", 1)
            .with_rule(ResonanceZone::Nav, 2)
            .with_rule(ResonanceZone::Prav, -1);
        assert_eq!(card.effective_value(ResonanceZone::Yav), 1);
        assert_eq!(card.effective_value(ResonanceZone::Nav), 3);
        assert_eq!(card.effective_value(ResonanceZone::Prav), 0);
    }

    #[test]
    fn test_fate_card_toml() {
        let card: FateCard = toml::from_str(
            r#"
            id = "dark_surge"
            base_value = -1
            suit = "nav"
            keyword = "surge"
            resonance_rules = [{ zone = "deep_nav", modify_value = 2 }]
            "#,
        )
        .unwrap();
        assert_eq!(card.suit, Some(FateSuit::Nav));
        assert_eq!(card.keyword, Some(FateKeyword::Surge));
        assert!(!card.is_critical);
        assert_eq!(card.effective_value(ResonanceZone::DeepNav), 1);
    }
}
