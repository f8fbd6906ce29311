//! Enemy intents

use serde::{Deserialize, Serialize};

/// The next action an adversary will take
///
/// An entity with no `Intent` component has nothing queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "snake_case")]
pub enum Intent {
    Attack(i32),
    Heal(i32),
    Ritual(i32),
}

impl Intent {
    pub fn amount(&self) -> i32 {
        match self {
            Intent::Attack(amount) | Intent::Heal(amount) | Intent::Ritual(amount) => *amount,
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, Intent::Attack(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_toml_shape() {
        #[derive(Deserialize)]
        struct Wrapper {
            pattern: Vec<Intent>,
        }
        let parsed: Wrapper = toml::from_str(
            r#"
            pattern = [
                { type = "attack", amount = 4 },
                { type = "ritual", amount = 2 },
            ]
            "#,
        )
        .unwrap();
        assert_eq!(parsed.pattern, vec![Intent::Attack(4), Intent::Ritual(2)]);
    }
}
