//! Roll validation policy and scorer configuration.
//!
//! - **Strict**: a roll may not knock down more pins than are standing, and no
//!   roll is accepted once the game is over.
//! - **Lenient**: only the pin range and roll capacity are checked. Frames
//!   that sum past ten are scored as open frames.

use serde::{Deserialize, Serialize};

use crate::error::TenpinError;

/// How much cross-roll legality `Game::record` enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    #[default]
    Strict,
    Lenient,
}

impl ValidationPolicy {
    pub fn checks_frames(self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

impl std::str::FromStr for ValidationPolicy {
    type Err = TenpinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(TenpinError::Config(format!(
                "unknown validation policy: {s}"
            ))),
        }
    }
}

/// Scorer configuration.
///
/// ```toml
/// policy = "lenient"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    pub policy: ValidationPolicy,
}

impl ScorerConfig {
    pub fn strict() -> Self {
        Self {
            policy: ValidationPolicy::Strict,
        }
    }

    pub fn lenient() -> Self {
        Self {
            policy: ValidationPolicy::Lenient,
        }
    }

    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, TenpinError> {
        toml::from_str(text).map_err(|err| TenpinError::Config(err.to_string()))
    }
}
