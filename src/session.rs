// src/session.rs
//
// One game session: a board plus the click-driven move applicator.
// No legality checking happens here; any held piece may land on any square.

use crate::board::{Board, Color, PieceCode, START_FEN, color_of_code};
use crate::output::emit_fen;
use crate::square::Square;
use tracing::{debug, info, instrument};

/// Knobs for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Print the encoding after every completed move.
    pub echo_fen: bool,
}

/// Result of feeding one click to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Idle click on an empty square or an opponent piece. Only the
    /// selection marker moved.
    Selected(Square),
    /// Idle click on a piece of the side to move; it is now held.
    PickedUp { square: Square, code: PieceCode },
    /// Pending click: the held piece was relocated and the turn flipped.
    Moved { from: Square, to: Square, fen: String },
}

/// Applicator state derived from whether a piece is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicatorState {
    Idle,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    /// Square highlighted for display.
    selected: Option<Square>,
    /// Selection before the most recent click; origin of a pending move.
    previous: Option<Square>,
    /// Piece code picked up and waiting for a destination.
    held: Option<PieceCode>,
    options: SessionOptions,
}

impl Session {
    /// Session at the standard starting position.
    pub fn new() -> Self {
        Session::from_board(Board::new(), SessionOptions::default())
    }

    pub fn from_fen(fen: &str) -> Self {
        Session::with_options(fen, SessionOptions::default())
    }

    pub fn with_options(fen: &str, options: SessionOptions) -> Self {
        Session::from_board(Board::from_fen(fen), options)
    }

    pub fn from_board(board: Board, options: SessionOptions) -> Self {
        Session {
            board,
            selected: None,
            previous: None,
            held: None,
            options,
        }
    }

    /// Rebuild a session from persisted parts.
    pub(crate) fn from_parts(
        board: Board,
        selected: Option<Square>,
        previous: Option<Square>,
        held: Option<PieceCode>,
        options: SessionOptions,
    ) -> Self {
        Session {
            board,
            selected,
            previous,
            held,
            options,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn previous(&self) -> Option<Square> {
        self.previous
    }

    #[inline]
    pub fn held(&self) -> Option<PieceCode> {
        self.held
    }

    #[inline]
    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn set_options(&mut self, options: SessionOptions) {
        self.options = options;
    }

    pub fn state(&self) -> ApplicatorState {
        if self.held.is_some() {
            ApplicatorState::Pending
        } else {
            ApplicatorState::Idle
        }
    }

    /// Current placement encoding.
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }

    /// Feed one edge-triggered click on `square`.
    #[instrument(skip(self), fields(side = %self.board.side_to_move))]
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        self.previous = self.selected;
        self.selected = Some(square);

        match (self.held, self.previous) {
            (Some(code), Some(from)) => self.complete_move(code, from, square),
            (Some(_), None) => {
                // A held piece always has an origin; recover by dropping it.
                debug!("session: held piece without origin discarded");
                self.held = None;
                ClickOutcome::Selected(square)
            }
            (None, _) => {
                let code = self.board.code_at(square);
                if color_of_code(code) == Some(self.board.side_to_move) {
                    debug!(code, "session: piece picked up");
                    self.held = Some(code);
                    ClickOutcome::PickedUp { square, code }
                } else {
                    ClickOutcome::Selected(square)
                }
            }
        }
    }

    fn complete_move(&mut self, code: PieceCode, from: Square, to: Square) -> ClickOutcome {
        // Clear first so a move onto the origin leaves the piece in place.
        self.board.clear_square(from);
        self.board.set_code(to, code);
        self.board.side_to_move = !self.board.side_to_move;

        let fen = self.board.to_fen();
        info!(%from, %to, code, fen = %fen, "session: move applied");
        if self.options.echo_fen {
            emit_fen(&fen);
        }

        self.held = None;
        self.previous = None;
        ClickOutcome::Moved { from, to, fen }
    }

    /// Drop any held piece and clear the selection.
    pub fn cancel(&mut self) {
        if self.held.take().is_some() {
            debug!("session: pending move cancelled");
        }
        self.selected = None;
        self.previous = None;
    }

    /// Replace the position and clear transient state.
    pub fn load_fen(&mut self, fen: &str) {
        self.board = Board::from_fen(fen);
        self.cancel();
    }

    /// Back to the starting position.
    pub fn reset(&mut self) {
        self.load_fen(START_FEN);
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
