// src/snapshot.rs
//
// Read-only views of a session for an external renderer, and a compact
// binary record for saving and restoring a session.

use crate::board::{Board, Color, PieceCode};
use crate::session::{Session, SessionOptions};
use crate::square::Square;
use serde::{Deserialize, Serialize};

/// What a renderer needs for one frame: the grid and the highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Raw cell codes indexed `[file][rank]`.
    pub layout: [[PieceCode; 8]; 8],
    pub selected: Option<Square>,
    pub side_to_move: Color,
}

impl FrameSnapshot {
    pub fn capture(session: &Session) -> Self {
        let board = session.board();
        FrameSnapshot {
            layout: board.layout,
            selected: session.selected(),
            side_to_move: board.side_to_move,
        }
    }

    #[inline]
    pub fn code_at(&self, sq: Square) -> PieceCode {
        self.layout[sq.file() as usize][sq.rank() as usize]
    }

    #[inline]
    pub fn is_highlighted(&self, sq: Square) -> bool {
        self.selected == Some(sq)
    }
}

/// Everything needed to resume a session exactly where it stopped,
/// including a half-finished pick-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub board: Board,
    pub selected: Option<Square>,
    pub previous: Option<Square>,
    pub held: Option<PieceCode>,
}

impl SessionRecord {
    pub fn capture(session: &Session) -> Self {
        SessionRecord {
            board: session.board().clone(),
            selected: session.selected(),
            previous: session.previous(),
            held: session.held(),
        }
    }

    pub fn restore(self) -> Session {
        self.restore_with(SessionOptions::default())
    }

    /// Resume with the caller's options; options are not part of the record.
    pub fn restore_with(self, options: SessionOptions) -> Session {
        Session::from_parts(self.board, self.selected, self.previous, self.held, options)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, String> {
        bincode::serialize(self).map_err(|e| format!("failed to encode session: {}", e))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        bincode::deserialize(bytes).map_err(|e| format!("failed to decode session: {}", e))
    }
}
