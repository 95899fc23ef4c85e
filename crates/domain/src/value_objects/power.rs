//! Enclosure power state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Electrified-fence power state of an enclosure.
///
/// Enclosures start `Down`. Transitions to `Down` are safety-gated by the
/// enclosure; transitions to `Active` are always allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerState {
    Active,
    #[default]
    Down,
}

impl PowerState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Down => "DOWN",
        }
    }
}

impl From<bool> for PowerState {
    fn from(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Down
        }
    }
}

impl From<PowerState> for bool {
    fn from(state: PowerState) -> bool {
        state.is_active()
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_down() {
        assert_eq!(PowerState::default(), PowerState::Down);
    }

    #[test]
    fn bool_conversion() {
        assert_eq!(PowerState::from(true), PowerState::Active);
        assert_eq!(PowerState::from(false), PowerState::Down);
        assert!(bool::from(PowerState::Active));
    }

    #[test]
    fn display_is_uppercase() {
        assert_eq!(PowerState::Active.to_string(), "ACTIVE");
        assert_eq!(PowerState::Down.to_string(), "DOWN");
        assert_eq!(serde_json::to_string(&PowerState::Active).unwrap(), "\"ACTIVE\"");
    }
}
