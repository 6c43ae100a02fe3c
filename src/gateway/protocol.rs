//! Protocol module - JSON message types for the commentary service
//!
//! Line-delimited JSON: one request line out, one response line back.

use serde::{Deserialize, Serialize};

use crate::core::game::CommentaryEvent;
use crate::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentaryType {
    #[serde(rename = "commentary")]
    Commentary,
}

impl Default for CommentaryType {
    fn default() -> Self {
        Self::Commentary
    }
}

/// Per-player score pair as sent on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
}

/// Request for one flavor line describing a resolved throw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentaryRequest {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: CommentaryType,
    pub seq: u64,
    /// Timestamp in milliseconds since the epoch
    pub ts: u64,
    /// One of: throw, win, miss, steal, split, point
    pub action: String,
    pub player: String,
    /// 16 chars row-major, 'x'/'o'/'-'
    pub board: String,
    pub scores: Scores,
}

impl CommentaryRequest {
    pub fn from_event(event: &CommentaryEvent, seq: u64) -> Self {
        let board = event
            .board
            .iter()
            .map(|cell| match cell {
                Some(Player::X) => 'x',
                Some(Player::O) => 'o',
                None => '-',
            })
            .collect();

        Self {
            msg_type: CommentaryType::Commentary,
            seq,
            ts: now_ms(),
            action: event.action.as_str().to_string(),
            player: event.player.as_str().to_string(),
            board,
            scores: Scores {
                x: event.score_x,
                o: event.score_o,
            },
        }
    }
}

/// Response carrying the display line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentaryResponse {
    #[serde(default)]
    pub seq: u64,
    pub text: String,
}

fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommentaryAction;

    fn sample_event() -> CommentaryEvent {
        let mut board = [None; 16];
        board[0] = Some(Player::X);
        board[15] = Some(Player::O);
        CommentaryEvent {
            action: CommentaryAction::Steal,
            player: Player::X,
            board,
            score_x: 1,
            score_o: 2,
        }
    }

    #[test]
    fn test_request_serializes_board_and_scores() {
        let req = CommentaryRequest::from_event(&sample_event(), 7);
        let json = serde_json::to_string(&req).unwrap();

        assert!(json.contains("\"type\":\"commentary\""));
        assert!(json.contains("\"seq\":7"));
        assert!(json.contains("\"action\":\"steal\""));
        assert!(json.contains("\"player\":\"X\""));
        assert!(json.contains("\"board\":\"x--------------o\""));
        assert!(json.contains("\"x\":1"));
        assert!(json.contains("\"o\":2"));
    }

    #[test]
    fn test_response_parses_with_and_without_seq() {
        let resp: CommentaryResponse =
            serde_json::from_str(r#"{"seq":3,"text":"what a throw"}"#).unwrap();
        assert_eq!(resp.seq, 3);
        assert_eq!(resp.text, "what a throw");

        let resp: CommentaryResponse = serde_json::from_str(r#"{"text":"nice"}"#).unwrap();
        assert_eq!(resp.seq, 0);
    }
}
