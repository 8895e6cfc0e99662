//! Error types for tenpin kernel operations.

/// Errors from recording rolls, finalizing a game, or loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TenpinError {
    /// A roll claimed more pins than a full rack.
    #[error("invalid pin count {pins}: a roll knocks down 0 to 10 pins")]
    PinsOutOfRange { pins: u8 },

    /// The roll sequence is already at its maximum length.
    #[error("roll capacity exceeded: a game holds at most {max} rolls")]
    CapacityExceeded { max: usize },

    /// A roll knocked down more pins than were standing in its frame.
    #[error("frame {number} has {standing} pins standing, cannot knock down {pins}", number = .frame + 1)]
    FrameOverflow { frame: usize, standing: u8, pins: u8 },

    /// Every frame and bonus ball has already been rolled.
    #[error("game is complete: no balls remain")]
    GameComplete,

    /// A final score was requested before the last ball.
    #[error("game is incomplete after {rolls} rolls")]
    IncompleteGame { rolls: usize },

    /// Scorer configuration could not be parsed.
    #[error("invalid scorer config: {0}")]
    Config(String),
}

/// Broad classification of a [`TenpinError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    Overflow,
    IncompleteGame,
    Config,
}

impl TenpinError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PinsOutOfRange { .. } | Self::FrameOverflow { .. } | Self::GameComplete => {
                ErrorKind::InvalidInput
            }
            Self::CapacityExceeded { .. } => ErrorKind::Overflow,
            Self::IncompleteGame { .. } => ErrorKind::IncompleteGame,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}
