//! # Tenpin Kernel
//!
//! Scores one player's game of ten-pin bowling from its rolls.
//!
//! A game is an append-only sequence of at most 21 rolls. Frames are derived
//! from roll positions, never stored. The score may be read at any time: it
//! counts every frame whose strike or spare bonus is already known and stops
//! at the first frame that still waits on a roll.
//!
//! ## Architecture
//!
//! ```text
//! Pins              ← one roll, 0..=10
//!     │
//! Game              ← append-only rolls + ScorerConfig (validation policy)
//!     │
//! frame             ← partitioning, bonus look-ahead, next-ball cursor
//!     │
//! ScoreCard         ← serializable snapshot with a content digest
//! ```
//!
//! ```
//! use tenpin_kernel::Game;
//!
//! let mut game = Game::new();
//! game.roll_many(10, 12).unwrap();
//! assert_eq!(game.final_score(), Ok(300));
//! ```

pub mod card;
pub mod error;
pub mod frame;
pub mod game;
pub mod pins;
pub mod policy;

pub use card::ScoreCard;
pub use error::{ErrorKind, TenpinError};
pub use frame::{Frame, FrameKind, NextBall};
pub use game::Game;
pub use pins::{FRAMES, MAX_PINS, MAX_ROLLS, Pins};
pub use policy::{ScorerConfig, ValidationPolicy};
