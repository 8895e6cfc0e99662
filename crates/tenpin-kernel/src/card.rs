//! Score card: a serializable snapshot of a game.
//!
//! The card digest identifies a game by its content. Two cards with the same
//! policy and the same roll sequence produce the same digest.
//!
//! Algorithm:
//! 1. Build the canonical key `{"policy": .., "rolls": [..], "schema": 1}`
//! 2. Serialize compactly with sorted keys
//! 3. digest = "g1_" || hex_lower(SHA256(keyBytes))

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::frame::Frame;
use crate::game::Game;
use crate::pins::Pins;
use crate::policy::ValidationPolicy;

const DIGEST_SCHEMA: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub policy: ValidationPolicy,
    pub rolls: Vec<Pins>,
    pub frames: Vec<Frame>,
    pub score: u32,
    pub complete: bool,
}

impl ScoreCard {
    pub fn from_game(game: &Game) -> Self {
        Self {
            policy: game.config().policy,
            rolls: game.rolls().to_vec(),
            frames: game.frames(),
            score: game.score(),
            complete: game.is_complete(),
        }
    }

    /// Content digest over the policy and roll sequence.
    ///
    /// Frames and score are derived from those two, so they do not
    /// contribute.
    pub fn digest(&self) -> String {
        let key = canonical_key(self.policy, &self.rolls);
        // serde_json's default map is ordered, so keys come out sorted.
        let bytes = key.to_string().into_bytes();
        let hash = Sha256::digest(&bytes);
        format!("g1_{}", hex_lower(&hash))
    }
}

fn canonical_key(policy: ValidationPolicy, rolls: &[Pins]) -> Value {
    let mut map = serde_json::Map::new();
    map.insert("schema".to_string(), Value::Number(DIGEST_SCHEMA.into()));
    map.insert("policy".to_string(), Value::String(policy.to_string()));
    map.insert(
        "rolls".to_string(),
        Value::Array(
            rolls
                .iter()
                .map(|pins| Value::Number(pins.get().into()))
                .collect(),
        ),
    );
    Value::Object(map)
}

fn hex_lower(bytes: &[u8]) -> String {
    const ALPHABET: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(ALPHABET[usize::from(byte >> 4)] as char);
        out.push(ALPHABET[usize::from(byte & 0x0f)] as char);
    }
    out
}
