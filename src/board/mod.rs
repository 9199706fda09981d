mod fen;

use crate::square::Square;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod castle_bits;
mod fen_tables;
pub use castle_bits::*;
pub use fen::{ERROR_MARKER, START_FEN};

/// Raw value stored in a board cell. Normally one of the 13 `Piece` codes,
/// but the grid does not forbid anything else.
pub type PieceCode = u8;

/// Codes below this value (and non-empty) are White, codes above it are Black.
pub const WHITE_IF_LESS: PieceCode = 8;

/// Which side is to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

/// Flat piece enumeration: empty plus every (kind, color) pair.
///
/// The discriminants are load-bearing. White pieces sit below
/// [`WHITE_IF_LESS`] and black pieces above it, so color is recovered by a
/// single comparison (see [`color_of_code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Piece {
    Empty = 0,
    PawnW = 1,
    RookW = 2,
    KnightW = 3,
    BishopW = 4,
    QueenW = 5,
    KingW = 6,
    PawnB = 9,
    RookB = 10,
    KnightB = 11,
    BishopB = 12,
    QueenB = 13,
    KingB = 14,
}

impl Piece {
    pub const ALL: [Piece; 13] = [
        Piece::Empty,
        Piece::PawnW,
        Piece::RookW,
        Piece::KnightW,
        Piece::BishopW,
        Piece::QueenW,
        Piece::KingW,
        Piece::PawnB,
        Piece::RookB,
        Piece::KnightB,
        Piece::BishopB,
        Piece::QueenB,
        Piece::KingB,
    ];

    #[inline(always)]
    pub const fn code(self) -> PieceCode {
        self as PieceCode
    }

    /// Decode a raw cell value; `None` for anything outside the 13 known codes.
    #[inline]
    pub const fn from_code(code: PieceCode) -> Option<Piece> {
        match code {
            0 => Some(Piece::Empty),
            1 => Some(Piece::PawnW),
            2 => Some(Piece::RookW),
            3 => Some(Piece::KnightW),
            4 => Some(Piece::BishopW),
            5 => Some(Piece::QueenW),
            6 => Some(Piece::KingW),
            9 => Some(Piece::PawnB),
            10 => Some(Piece::RookB),
            11 => Some(Piece::KnightB),
            12 => Some(Piece::BishopB),
            13 => Some(Piece::QueenB),
            14 => Some(Piece::KingB),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline(always)]
    pub const fn color(self) -> Option<Color> {
        color_of_code(self.code())
    }

    /// FEN letter for this piece, `None` for `Empty`.
    pub fn glyph(self) -> Option<char> {
        fen_tables::code_to_glyph(self.code())
    }
}

/// The boundary rule over raw codes: empty has no color, codes below
/// [`WHITE_IF_LESS`] are White, codes above it are Black.
#[inline(always)]
pub const fn color_of_code(code: PieceCode) -> Option<Color> {
    if code == Piece::Empty as PieceCode || code == WHITE_IF_LESS {
        None
    } else if code < WHITE_IF_LESS {
        Some(Color::White)
    } else {
        Some(Color::Black)
    }
}

/// Chess position: placement grid plus the FEN state fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Placement grid indexed `[file][rank]`, both 0–7.
    pub layout: [[PieceCode; 8]; 8],
    /// White or Black to move
    pub side_to_move: Color,
    /// Castling rights: bit 0=White kingside, 1=White queenside, 2=Black kingside, 3=Black queenside
    pub castling_rights: CastleBits,
    /// En passant target square. Carried, not consumed by move application.
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

static START_BOARD: OnceCell<Board> = OnceCell::new();

impl Board {
    /// Create an empty board (no pieces, no castling rights, White to move).
    pub fn new_empty() -> Self {
        Board {
            layout: [[Piece::Empty.code(); 8]; 8],
            side_to_move: Color::White,
            castling_rights: CASTLE_NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard starting position, decoded from [`START_FEN`] once per process.
    pub fn new() -> Self {
        START_BOARD
            .get_or_init(|| Board::from_fen(START_FEN))
            .clone()
    }

    #[inline(always)]
    pub fn code_at(&self, sq: Square) -> PieceCode {
        self.layout[sq.file() as usize][sq.rank() as usize]
    }

    #[inline(always)]
    pub fn set_code(&mut self, sq: Square, code: PieceCode) {
        self.layout[sq.file() as usize][sq.rank() as usize] = code;
    }

    /// Piece on a square; `None` only when the cell holds a corrupt code.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Piece::from_code(self.code_at(sq))
    }

    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.set_code(sq, piece.code());
    }

    #[inline]
    pub fn clear_square(&mut self, sq: Square) {
        self.set_code(sq, Piece::Empty.code());
    }

    pub fn clear_placement(&mut self) {
        self.layout = [[Piece::Empty.code(); 8]; 8];
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.code_at(sq) == Piece::Empty.code()
    }

    /// Color of whatever occupies `sq`, by the boundary rule.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        color_of_code(self.code_at(sq))
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        Square::all().filter(|&sq| !self.is_empty_at(sq)).count()
    }

    #[inline(always)]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline(always)]
    pub fn has_castling(&self, flag: CastleBits) -> bool {
        self.castling_rights & flag != 0
    }

    #[inline(always)]
    pub fn has_kingside_castle(&self, color: Color) -> bool {
        match color {
            Color::White => self.has_castling(CASTLE_WK),
            Color::Black => self.has_castling(CASTLE_BK),
        }
    }

    #[inline(always)]
    pub fn has_queenside_castle(&self, color: Color) -> bool {
        match color {
            Color::White => self.has_castling(CASTLE_WQ),
            Color::Black => self.has_castling(CASTLE_BQ),
        }
    }

    // Utility Aliases
    #[inline(always)]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// An all-empty board with White to move.
impl Default for Board {
    fn default() -> Self {
        Board::new_empty()
    }
}

/// Decoding is lenient and never fails.
impl FromStr for Board {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Board::from_fen(s))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}
