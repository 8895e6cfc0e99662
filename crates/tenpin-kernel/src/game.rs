//! One player's game: an append-only roll sequence and its score.

use tracing::{debug, warn};

use crate::card::ScoreCard;
use crate::error::TenpinError;
use crate::frame::{self, Frame, NextBall};
use crate::pins::{MAX_ROLLS, Pins};
use crate::policy::ScorerConfig;

/// A single game of ten-pin bowling.
///
/// Rolls are appended with [`Game::record`] and never changed afterwards.
/// [`Game::score`] may be read at any point and counts only frames whose
/// bonuses are already known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    rolls: Vec<Pins>,
    config: ScorerConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// An empty game under the default (strict) policy.
    pub fn new() -> Self {
        Self::with_config(ScorerConfig::default())
    }

    pub fn with_config(config: ScorerConfig) -> Self {
        Self {
            rolls: Vec::with_capacity(MAX_ROLLS),
            config,
        }
    }

    /// Build a game by recording `rolls` in order.
    ///
    /// Fails on the first roll the policy rejects.
    pub fn from_rolls(
        config: ScorerConfig,
        rolls: impl IntoIterator<Item = u8>,
    ) -> Result<Self, TenpinError> {
        let mut game = Self::with_config(config);
        for pins in rolls {
            game.record(pins)?;
        }
        Ok(game)
    }

    pub fn config(&self) -> ScorerConfig {
        self.config
    }

    /// Record one roll.
    ///
    /// A rejected roll leaves the game unchanged.
    pub fn record(&mut self, pins: u8) -> Result<(), TenpinError> {
        let roll = self.admit(pins).inspect_err(|err| {
            warn!(pins, rolls = self.rolls.len(), error = %err, "roll rejected");
        })?;
        self.rolls.push(roll);
        debug!(pins, rolls = self.rolls.len(), "roll recorded");
        Ok(())
    }

    fn admit(&self, pins: u8) -> Result<Pins, TenpinError> {
        let roll = Pins::new(pins)?;
        if self.rolls.len() >= MAX_ROLLS {
            return Err(TenpinError::CapacityExceeded { max: MAX_ROLLS });
        }
        if self.config.policy.checks_frames() {
            match self.next_ball() {
                NextBall::GameOver => return Err(TenpinError::GameComplete),
                NextBall::Ball {
                    frame, standing, ..
                } if pins > standing => {
                    return Err(TenpinError::FrameOverflow {
                        frame,
                        standing,
                        pins,
                    });
                }
                NextBall::Ball { .. } => {}
            }
        }
        Ok(roll)
    }

    /// Record `pins` `count` times, stopping at the first rejected roll.
    pub fn roll_many(&mut self, pins: u8, count: usize) -> Result<(), TenpinError> {
        for _ in 0..count {
            self.record(pins)?;
        }
        Ok(())
    }

    /// Score of every resolved frame so far. Zero rolls score 0.
    pub fn score(&self) -> u32 {
        frame::resolved_frame_scores(&self.rolls).iter().sum()
    }

    /// Score of a finished game.
    pub fn final_score(&self) -> Result<u32, TenpinError> {
        if !self.is_complete() {
            return Err(TenpinError::IncompleteGame {
                rolls: self.rolls.len(),
            });
        }
        Ok(self.score())
    }

    pub fn rolls(&self) -> &[Pins] {
        &self.rolls
    }

    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    pub fn next_ball(&self) -> NextBall {
        frame::next_ball(&self.rolls)
    }

    /// Pins standing for the next ball, `None` once the game is over.
    pub fn pins_standing(&self) -> Option<u8> {
        match self.next_ball() {
            NextBall::Ball { standing, .. } => Some(standing),
            NextBall::GameOver => None,
        }
    }

    /// True once all ten frames and any earned bonus balls are recorded.
    pub fn is_complete(&self) -> bool {
        matches!(self.next_ball(), NextBall::GameOver)
    }

    pub fn frames(&self) -> Vec<Frame> {
        frame::frames(&self.rolls)
    }

    pub fn score_card(&self) -> ScoreCard {
        ScoreCard::from_game(self)
    }
}
