// src/board/fen_tables.rs
// O(1) FEN glyph <-> piece code maps.

use super::{Piece, PieceCode};

pub(super) const GLYPH_TO_CODE: [Option<PieceCode>; 128] = {
    let mut table: [Option<PieceCode>; 128] = [None; 128];

    // Uppercase = White
    table[b'P' as usize] = Some(Piece::PawnW as PieceCode);
    table[b'R' as usize] = Some(Piece::RookW as PieceCode);
    table[b'N' as usize] = Some(Piece::KnightW as PieceCode);
    table[b'B' as usize] = Some(Piece::BishopW as PieceCode);
    table[b'Q' as usize] = Some(Piece::QueenW as PieceCode);
    table[b'K' as usize] = Some(Piece::KingW as PieceCode);

    // Lowercase = Black
    table[b'p' as usize] = Some(Piece::PawnB as PieceCode);
    table[b'r' as usize] = Some(Piece::RookB as PieceCode);
    table[b'n' as usize] = Some(Piece::KnightB as PieceCode);
    table[b'b' as usize] = Some(Piece::BishopB as PieceCode);
    table[b'q' as usize] = Some(Piece::QueenB as PieceCode);
    table[b'k' as usize] = Some(Piece::KingB as PieceCode);

    table
};

// Indexed by code; 0 (empty), 7 and 8 have no glyph.
const CODE_TO_GLYPH: [Option<char>; 16] = {
    let mut t: [Option<char>; 16] = [None; 16];
    // White
    t[Piece::PawnW as usize] = Some('P');
    t[Piece::RookW as usize] = Some('R');
    t[Piece::KnightW as usize] = Some('N');
    t[Piece::BishopW as usize] = Some('B');
    t[Piece::QueenW as usize] = Some('Q');
    t[Piece::KingW as usize] = Some('K');
    // Black
    t[Piece::PawnB as usize] = Some('p');
    t[Piece::RookB as usize] = Some('r');
    t[Piece::KnightB as usize] = Some('n');
    t[Piece::BishopB as usize] = Some('b');
    t[Piece::QueenB as usize] = Some('q');
    t[Piece::KingB as usize] = Some('k');
    t
};

#[inline]
pub(super) fn glyph_to_code(glyph: u8) -> Option<PieceCode> {
    GLYPH_TO_CODE.get(glyph as usize).copied().flatten()
}

#[inline]
pub(super) fn code_to_glyph(code: PieceCode) -> Option<char> {
    CODE_TO_GLYPH.get(code as usize).copied().flatten()
}
