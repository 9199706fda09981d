// src/board/fen.rs
//
// Lenient FEN codec. Decoding reads placement, side to move and castling
// rights; the en passant and clock fields are scanned over but not interpreted.
// Encoding writes placement only.

use super::castle_bits::{CASTLE_NONE, castle_flag_for_glyph};
use super::fen_tables::{code_to_glyph, glyph_to_code};
use super::{Board, Color, Piece, PieceCode};
use crate::square::Square;
use tracing::{debug, trace};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Emitted by the encoder in place of a glyph for a cell holding an unknown code.
pub const ERROR_MARKER: &str = "^error^";

/// What one byte of the placement field asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    /// Digit 1–9: skip this many squares.
    Skip(u8),
    /// Piece letter.
    Place(PieceCode),
    /// Rank separator `/`. Consumes no square.
    Separator,
    /// Anything else, including `0`. Ignored, consumes no square.
    Unknown,
}

impl Glyph {
    #[inline]
    fn classify(byte: u8) -> Glyph {
        match byte {
            b'1'..=b'9' => Glyph::Skip(byte - b'0'),
            b'/' => Glyph::Separator,
            _ => match glyph_to_code(byte) {
                Some(code) => Glyph::Place(code),
                None => Glyph::Unknown,
            },
        }
    }
}

// Field indices within a FEN record.
const FIELD_PLACEMENT: usize = 0;
const FIELD_SIDE: usize = 1;
const FIELD_CASTLING: usize = 2;

impl Board {
    /// Decode `fen` into a fresh empty board.
    pub fn from_fen(fen: &str) -> Board {
        let mut board = Board::new_empty();
        board.set_fen(fen);
        board
    }

    /// Overwrite placement, side to move and castling rights from `fen`.
    ///
    /// Never fails: unrecognized bytes in the placement field are skipped,
    /// placements past the last square are dropped. Side to move is White only
    /// when the side field says `w`; an absent field means Black. En passant
    /// and the two clocks keep their current values.
    pub fn set_fen(&mut self, fen: &str) {
        self.clear_placement();
        self.castling_rights = CASTLE_NONE;
        self.side_to_move = Color::Black;

        let mut field = FIELD_PLACEMENT;
        let mut position: usize = 0;
        let mut skipped = 0usize;

        for byte in fen.bytes() {
            if byte.is_ascii_whitespace() {
                field += 1;
                continue;
            }

            match field {
                FIELD_PLACEMENT => match Glyph::classify(byte) {
                    Glyph::Skip(n) => position += n as usize,
                    Glyph::Place(code) => {
                        match Square::try_from(position) {
                            Ok(sq) => self.set_code(sq, code),
                            Err(_) => {
                                trace!(position, glyph = %(byte as char), "fen: placement past last square dropped");
                            }
                        }
                        position += 1;
                    }
                    Glyph::Separator => {}
                    Glyph::Unknown => {
                        skipped += 1;
                        trace!(byte, "fen: unrecognized placement byte skipped");
                    }
                },
                FIELD_SIDE => {
                    self.side_to_move = if byte == b'w' {
                        Color::White
                    } else {
                        Color::Black
                    };
                }
                FIELD_CASTLING => {
                    if let Some(flag) = castle_flag_for_glyph(byte) {
                        self.castling_rights |= flag;
                    }
                }
                // En passant, halfmove clock, fullmove number: not interpreted.
                _ => {}
            }
        }

        debug!(
            squares = position,
            skipped,
            side = %self.side_to_move,
            castling = self.castling_rights,
            "fen: decoded"
        );
    }

    /// Placement-only encoding: one glyph per occupied square in linear index
    /// order, nothing for empty squares, `/` after every rank (the last too).
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(64 + 8);

        for rank in 0..8u8 {
            for file in 0..8u8 {
                let code = self.code_at(Square::from_coords(file, rank));
                if code == Piece::Empty.code() {
                    continue;
                }
                match code_to_glyph(code) {
                    Some(glyph) => fen.push(glyph),
                    None => fen.push_str(ERROR_MARKER),
                }
            }
            fen.push('/');
        }

        fen
    }
}
