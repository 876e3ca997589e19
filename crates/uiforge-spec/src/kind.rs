//! Element kind discriminant.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The seven game-UI element kinds the forge can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Button,
    HealthBar,
    Panel,
    Crosshair,
    Slot,
    Badge,
    Slider,
}

impl ElementKind {
    /// All kinds, in control-panel order.
    pub const ALL: [ElementKind; 7] = [
        ElementKind::Button,
        ElementKind::HealthBar,
        ElementKind::Panel,
        ElementKind::Crosshair,
        ElementKind::Slot,
        ElementKind::Badge,
        ElementKind::Slider,
    ];

    /// Returns the kind as its wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Button => "button",
            ElementKind::HealthBar => "healthbar",
            ElementKind::Panel => "panel",
            ElementKind::Crosshair => "crosshair",
            ElementKind::Slot => "slot",
            ElementKind::Badge => "badge",
            ElementKind::Slider => "slider",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| ConfigError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.as_str().parse::<ElementKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("HealthBar".parse::<ElementKind>().unwrap(), ElementKind::HealthBar);
    }

    #[test]
    fn test_unknown_kind() {
        assert!(matches!(
            "tooltip".parse::<ElementKind>(),
            Err(ConfigError::UnknownKind(_))
        ));
    }
}
