//! Frames derived from a roll sequence.
//!
//! Frames are never stored. They are recomputed from roll positions: frames
//! one through nine take a single roll on a strike and two rolls otherwise;
//! the tenth frame takes up to three.
//!
//! A frame is *resolved* once its own rolls and its bonus look-ahead have all
//! been recorded. Scoring walks the ten frames in order and stops at the first
//! unresolved one, so a partial game scores exactly what is known so far and
//! nothing is ever read past the end of the recorded rolls.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::pins::{FRAMES, MAX_PINS, Pins};

/// Outcome of a frame judged by its own rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
    /// Fewer rolls than the frame needs.
    Pending,
}

/// One frame of a scored game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Zero-based frame index, `0..10`.
    pub index: usize,
    pub rolls: Vec<Pins>,
    pub kind: FrameKind,
    /// Pins plus bonus, once resolved.
    pub score: Option<u32>,
    /// Cumulative game score through this frame, once resolved.
    pub running_total: Option<u32>,
}

/// The next ball a bowler is due to throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NextBall {
    Ball {
        frame: usize,
        /// Zero-based ball within the frame.
        ball: usize,
        /// Pins standing for this ball.
        standing: u8,
    },
    GameOver,
}

/// Sum of `count` rolls starting at `start`, or `None` if any are missing.
fn window_sum(rolls: &[Pins], start: usize, count: usize) -> Option<u32> {
    rolls
        .get(start..start + count)
        .map(|window| window.iter().map(|&pins| u32::from(pins)).sum())
}

/// Score contributions of each resolved frame, in order.
///
/// Always exactly ten iterations at most; rolls past the tenth frame's
/// look-ahead are ignored.
pub fn resolved_frame_scores(rolls: &[Pins]) -> Vec<u32> {
    let mut scores = Vec::with_capacity(FRAMES);
    let mut cursor = 0;

    for frame in 0..FRAMES {
        let Some(first) = rolls.get(cursor) else {
            break;
        };

        // A strike is 10 plus the next two rolls; a spare is 10 plus the next
        // one. Either way the contribution is a three-roll window.
        let (contribution, step) = if first.is_strike() {
            (window_sum(rolls, cursor, 3), 1)
        } else {
            let contribution = match window_sum(rolls, cursor, 2) {
                Some(pair) if pair == u32::from(MAX_PINS) => window_sum(rolls, cursor, 3),
                other => other,
            };
            (contribution, 2)
        };

        match contribution {
            Some(points) => {
                scores.push(points);
                cursor += step;
            }
            None => {
                trace!(frame, cursor, "frame unresolved, scoring stops");
                break;
            }
        }
    }

    scores
}

/// Split rolls into frames by position.
pub fn partition(rolls: &[Pins]) -> Vec<&[Pins]> {
    let mut frames = Vec::with_capacity(FRAMES);
    let mut cursor = 0;

    for frame in 0..FRAMES {
        if cursor >= rolls.len() {
            break;
        }
        let width = if frame == FRAMES - 1 {
            3
        } else if rolls[cursor].is_strike() {
            1
        } else {
            2
        };
        let end = (cursor + width).min(rolls.len());
        frames.push(&rolls[cursor..end]);
        cursor = end;
    }

    frames
}

fn classify(rolls: &[Pins]) -> FrameKind {
    match rolls {
        [first, ..] if first.is_strike() => FrameKind::Strike,
        [first, second, ..] if first.get() + second.get() == MAX_PINS => FrameKind::Spare,
        [_, _, ..] => FrameKind::Open,
        _ => FrameKind::Pending,
    }
}

/// Per-frame breakdown with scores filled in for resolved frames.
pub fn frames(rolls: &[Pins]) -> Vec<Frame> {
    let scores = resolved_frame_scores(rolls);
    let mut running = 0;

    partition(rolls)
        .into_iter()
        .enumerate()
        .map(|(index, frame_rolls)| {
            let score = scores.get(index).copied();
            let running_total = score.map(|points| {
                running += points;
                running
            });
            Frame {
                index,
                rolls: frame_rolls.to_vec(),
                kind: classify(frame_rolls),
                score,
                running_total,
            }
        })
        .collect()
}

/// Locate the next ball, or report that the game is over.
pub fn next_ball(rolls: &[Pins]) -> NextBall {
    let mut cursor = 0;

    for frame in 0..FRAMES - 1 {
        let Some(first) = rolls.get(cursor) else {
            return NextBall::Ball {
                frame,
                ball: 0,
                standing: MAX_PINS,
            };
        };
        if first.is_strike() {
            cursor += 1;
            continue;
        }
        if rolls.get(cursor + 1).is_none() {
            return NextBall::Ball {
                frame,
                ball: 1,
                standing: MAX_PINS.saturating_sub(first.get()),
            };
        }
        cursor += 2;
    }

    let tenth = FRAMES - 1;
    let fresh_rack = |pins: Pins| {
        if pins.is_strike() {
            MAX_PINS
        } else {
            MAX_PINS.saturating_sub(pins.get())
        }
    };

    match rolls.get(cursor..).unwrap_or_default() {
        [] => NextBall::Ball {
            frame: tenth,
            ball: 0,
            standing: MAX_PINS,
        },
        [first] => NextBall::Ball {
            frame: tenth,
            ball: 1,
            standing: fresh_rack(*first),
        },
        [first, second] if first.is_strike() => NextBall::Ball {
            frame: tenth,
            ball: 2,
            standing: fresh_rack(*second),
        },
        [first, second] if first.get() + second.get() == MAX_PINS => NextBall::Ball {
            frame: tenth,
            ball: 2,
            standing: MAX_PINS,
        },
        _ => NextBall::GameOver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolls(raw: &[u8]) -> Vec<Pins> {
        raw.iter().map(|&p| Pins::new(p).unwrap()).collect()
    }

    #[test]
    fn empty_sequence_has_no_frames() {
        assert!(resolved_frame_scores(&[]).is_empty());
        assert!(frames(&[]).is_empty());
    }

    #[test]
    fn spare_waits_for_its_bonus_ball() {
        let r = rolls(&[5, 5]);
        assert!(resolved_frame_scores(&r).is_empty());
        let r = rolls(&[5, 5, 3]);
        assert_eq!(resolved_frame_scores(&r), vec![13]);
    }

    #[test]
    fn strike_waits_for_two_bonus_balls() {
        assert!(resolved_frame_scores(&rolls(&[10, 3])).is_empty());
        assert_eq!(resolved_frame_scores(&rolls(&[10, 3, 4])), vec![17, 7]);
    }

    #[test]
    fn half_frame_is_unresolved() {
        assert_eq!(resolved_frame_scores(&rolls(&[3, 4, 2])), vec![7]);
    }

    #[test]
    fn partition_tenth_frame_takes_three() {
        let mut raw = vec![1; 18];
        raw.extend([10, 2, 1]);
        let r = rolls(&raw);
        let parts = partition(&r);
        assert_eq!(parts.len(), 10);
        assert_eq!(parts[9], rolls(&[10, 2, 1]).as_slice());
    }

    #[test]
    fn frames_carry_running_totals() {
        let r = rolls(&[10, 4, 6, 1, 1, 3]);
        let frames = frames(&r);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].kind, FrameKind::Strike);
        assert_eq!(frames[0].running_total, Some(20));
        assert_eq!(frames[1].kind, FrameKind::Spare);
        assert_eq!(frames[1].running_total, Some(31));
        assert_eq!(frames[2].kind, FrameKind::Open);
        assert_eq!(frames[2].running_total, Some(33));
        assert_eq!(frames[3].kind, FrameKind::Pending);
        assert_eq!(frames[3].score, None);
    }

    #[test]
    fn next_ball_tracks_standing_pins() {
        assert_eq!(
            next_ball(&rolls(&[7])),
            NextBall::Ball {
                frame: 0,
                ball: 1,
                standing: 3
            }
        );
        assert_eq!(
            next_ball(&rolls(&[10])),
            NextBall::Ball {
                frame: 1,
                ball: 0,
                standing: 10
            }
        );
    }

    #[test]
    fn next_ball_tenth_frame_bonus_rules() {
        let mut open = vec![0; 18];
        open.extend([3, 4]);
        assert_eq!(next_ball(&rolls(&open)), NextBall::GameOver);

        let mut spare = vec![0; 18];
        spare.extend([3, 7]);
        assert_eq!(
            next_ball(&rolls(&spare)),
            NextBall::Ball {
                frame: 9,
                ball: 2,
                standing: 10
            }
        );

        let mut strike_then_split = vec![0; 18];
        strike_then_split.extend([10, 6]);
        assert_eq!(
            next_ball(&rolls(&strike_then_split)),
            NextBall::Ball {
                frame: 9,
                ball: 2,
                standing: 4
            }
        );

        assert_eq!(next_ball(&rolls(&[10; 12])), NextBall::GameOver);
    }
}
