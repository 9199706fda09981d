// src/board/castle_bits.rs

/// Underlying bit type for castling rights.
/// Each right is an independent bit; none is derived from king or rook placement.
pub type CastleBits = u8;

pub const CASTLE_WK: CastleBits = 0b0001;
pub const CASTLE_WQ: CastleBits = 0b0010;
pub const CASTLE_BK: CastleBits = 0b0100;
pub const CASTLE_BQ: CastleBits = 0b1000;

pub const CASTLE_NONE: CastleBits = 0;
pub const CASTLE_ALL: CastleBits = CASTLE_WK | CASTLE_WQ | CASTLE_BK | CASTLE_BQ;

/// Map a castling-field glyph (`K`, `Q`, `k`, `q`) to its right.
#[inline]
pub const fn castle_flag_for_glyph(glyph: u8) -> Option<CastleBits> {
    match glyph {
        b'K' => Some(CASTLE_WK),
        b'Q' => Some(CASTLE_WQ),
        b'k' => Some(CASTLE_BK),
        b'q' => Some(CASTLE_BQ),
        _ => None,
    }
}

/// Render rights in `KQkq` order, `-` when empty.
pub fn castle_glyphs(rights: CastleBits) -> String {
    let glyphs: String = [
        (CASTLE_WK, 'K'),
        (CASTLE_WQ, 'Q'),
        (CASTLE_BK, 'k'),
        (CASTLE_BQ, 'q'),
    ]
    .iter()
    .filter(|(flag, _)| rights & flag != 0)
    .map(|&(_, c)| c)
    .collect();

    if glyphs.is_empty() {
        "-".to_string()
    } else {
        glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castle_bits_single_and_disjoint() {
        assert_eq!(CASTLE_WK.count_ones(), 1);
        assert_eq!(CASTLE_WQ.count_ones(), 1);
        assert_eq!(CASTLE_BK.count_ones(), 1);
        assert_eq!(CASTLE_BQ.count_ones(), 1);
        assert_eq!(CASTLE_ALL.count_ones(), 4);
    }

    #[test]
    fn glyph_lookup_covers_exactly_kqkq() {
        assert_eq!(castle_flag_for_glyph(b'K'), Some(CASTLE_WK));
        assert_eq!(castle_flag_for_glyph(b'Q'), Some(CASTLE_WQ));
        assert_eq!(castle_flag_for_glyph(b'k'), Some(CASTLE_BK));
        assert_eq!(castle_flag_for_glyph(b'q'), Some(CASTLE_BQ));
        assert_eq!(castle_flag_for_glyph(b'-'), None);
        assert_eq!(castle_flag_for_glyph(b'x'), None);
    }

    #[test]
    fn glyphs_render_in_fixed_order() {
        assert_eq!(castle_glyphs(CASTLE_ALL), "KQkq");
        assert_eq!(castle_glyphs(CASTLE_BQ | CASTLE_WK), "Kq");
        assert_eq!(castle_glyphs(CASTLE_NONE), "-");
    }
}
