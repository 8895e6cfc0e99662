//! Pin counts and the fixed shape of a ten-pin game.

use crate::error::TenpinError;

/// Pins in a full rack.
pub const MAX_PINS: u8 = 10;

/// Frames in one game.
pub const FRAMES: usize = 10;

/// Longest legal roll sequence: nine frames of two balls plus a three-ball
/// tenth frame.
pub const MAX_ROLLS: usize = 21;

/// Pins knocked down by a single roll, always in `0..=10`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pins(u8);

impl Pins {
    pub const GUTTER: Self = Self(0);
    pub const STRIKE: Self = Self(MAX_PINS);

    /// Validate a raw pin count.
    pub fn new(pins: u8) -> Result<Self, TenpinError> {
        if pins > MAX_PINS {
            return Err(TenpinError::PinsOutOfRange { pins });
        }
        Ok(Self(pins))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_strike(self) -> bool {
        self.0 == MAX_PINS
    }
}

impl TryFrom<u8> for Pins {
    type Error = TenpinError;

    fn try_from(pins: u8) -> Result<Self, Self::Error> {
        Self::new(pins)
    }
}

impl From<Pins> for u8 {
    fn from(pins: Pins) -> Self {
        pins.0
    }
}

impl From<Pins> for u32 {
    fn from(pins: Pins) -> Self {
        u32::from(pins.0)
    }
}

impl std::fmt::Display for Pins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for raw in 0..=MAX_PINS {
            assert_eq!(Pins::new(raw).unwrap().get(), raw);
        }
    }

    #[test]
    fn rejects_more_than_a_rack() {
        let err = Pins::new(11).unwrap_err();
        assert!(matches!(err, TenpinError::PinsOutOfRange { pins: 11 }));
    }

    #[test]
    fn deserialize_goes_through_validation() {
        let ok: Pins = serde_json::from_str("7").unwrap();
        assert_eq!(ok.get(), 7);
        assert!(serde_json::from_str::<Pins>("12").is_err());
    }

    #[test]
    fn strike_constant() {
        assert!(Pins::STRIKE.is_strike());
        assert!(!Pins::GUTTER.is_strike());
    }
}
