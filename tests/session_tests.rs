//! tests/session_tests.rs
//! Click-driven move application: no legality checks, one turn flip per move.
use fenboard::board::{Board, CASTLE_ALL, Color, Piece};
use fenboard::session::{ApplicatorState, ClickOutcome, Session, SessionOptions};
use fenboard::square::Square;
use rand::{Rng, SeedableRng, rngs::StdRng};

// ---- Small helpers ----

#[inline]
fn sq(i: u8) -> Square {
    Square::from_index(i)
}

// Linear indices in the starting position.
const E2: u8 = 52; // white pawn
const E4: u8 = 36;
const E7: u8 = 12; // black pawn
const E5: u8 = 28;
const G1: u8 = 62; // white knight
const H1: u8 = 63; // white rook

#[test]
fn pawn_push_flips_turn_and_relocates() {
    let mut s = Session::new();

    assert_eq!(
        s.click(sq(E2)),
        ClickOutcome::PickedUp {
            square: sq(E2),
            code: Piece::PawnW.code()
        }
    );
    assert_eq!(s.state(), ApplicatorState::Pending);

    let outcome = s.click(sq(E4));
    assert_eq!(
        outcome,
        ClickOutcome::Moved {
            from: sq(E2),
            to: sq(E4),
            fen: "rnbqkbnr/pppppppp///P//PPPPPPP/RNBQKBNR/".to_string()
        }
    );

    let b = s.board();
    assert_eq!(b.side_to_move, Color::Black);
    assert!(!b.white_to_move());
    assert_eq!(b.piece_at(sq(E4)), Some(Piece::PawnW));
    assert!(b.is_empty_at(sq(E2)));
    assert_eq!(b.occupied_count(), 32);
    assert_eq!(s.state(), ApplicatorState::Idle);
    assert_eq!(s.held(), None);
    assert_eq!(s.selected(), Some(sq(E4)));
}

#[test]
fn players_alternate() {
    let mut s = Session::new();
    s.click(sq(E2));
    s.click(sq(E4));

    // White pieces no longer respond.
    assert_eq!(s.click(sq(G1)), ClickOutcome::Selected(sq(G1)));

    assert!(matches!(s.click(sq(E7)), ClickOutcome::PickedUp { .. }));
    assert!(matches!(s.click(sq(E5)), ClickOutcome::Moved { .. }));
    assert_eq!(s.side_to_move(), Color::White);
    assert_eq!(s.board().piece_at(sq(E5)), Some(Piece::PawnB));
}

#[test]
fn moving_onto_a_friendly_piece_overwrites_it() {
    let mut s = Session::new();
    s.click(sq(H1));
    let outcome = s.click(sq(G1));

    assert!(matches!(outcome, ClickOutcome::Moved { .. }));
    let b = s.board();
    assert_eq!(b.piece_at(sq(G1)), Some(Piece::RookW));
    assert!(b.is_empty_at(sq(H1)));
    assert_eq!(b.occupied_count(), 31);
    assert_eq!(b.side_to_move, Color::Black);
}

#[test]
fn moving_onto_an_opponent_piece_replaces_it() {
    let mut s = Session::new();
    s.click(sq(E2));
    s.click(sq(E7));

    let b = s.board();
    assert_eq!(b.piece_at(sq(E7)), Some(Piece::PawnW));
    assert_eq!(b.occupied_count(), 31);
}

#[test]
fn same_square_twice_keeps_the_piece_but_flips_the_turn() {
    let mut s = Session::new();
    s.click(sq(E2));
    let outcome = s.click(sq(E2));

    assert!(matches!(outcome, ClickOutcome::Moved { from, to, .. } if from == to));
    let b = s.board();
    assert_eq!(b.piece_at(sq(E2)), Some(Piece::PawnW));
    assert_eq!(b.layout, Board::new().layout);
    assert_eq!(b.side_to_move, Color::Black);
}

#[test]
fn idle_clicks_on_empty_squares_only_move_the_selection() {
    let mut s = Session::new();
    let before = s.board().clone();

    assert_eq!(s.click(sq(30)), ClickOutcome::Selected(sq(30)));
    assert_eq!(s.selected(), Some(sq(30)));
    assert_eq!(s.click(sq(31)), ClickOutcome::Selected(sq(31)));
    assert_eq!(s.selected(), Some(sq(31)));

    assert_eq!(s.board(), &before);
    assert!(s.board().white_to_move());
    assert_eq!(s.state(), ApplicatorState::Idle);
}

#[test]
fn opponent_piece_is_not_picked_up() {
    let mut s = Session::new();
    assert_eq!(s.click(sq(E7)), ClickOutcome::Selected(sq(E7)));
    assert_eq!(s.held(), None);
    assert_eq!(s.board(), &Board::new());
}

#[test]
fn moves_leave_rights_and_counters_alone() {
    let mut s = Session::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 5 20");
    // King e1 -> g1 is relocated, not castled.
    s.click(sq(60));
    s.click(sq(62));

    let b = s.board();
    assert_eq!(b.castling_rights, CASTLE_ALL);
    assert_eq!(b.en_passant_target(), None);
    assert_eq!(b.halfmove_clock, 0);
    assert_eq!(b.fullmove_number, 1);
    assert_eq!(b.piece_at(sq(62)), Some(Piece::KingW));
    assert_eq!(b.piece_at(sq(63)), Some(Piece::RookW));
}

#[test]
fn black_to_move_from_fen() {
    let mut s = Session::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(s.click(sq(60)), ClickOutcome::Selected(sq(60)));
    assert!(matches!(s.click(sq(4)), ClickOutcome::PickedUp { .. }));
    s.click(sq(5));
    assert_eq!(s.board().piece_at(sq(5)), Some(Piece::KingB));
    assert!(s.board().white_to_move());
}

#[test]
fn echo_option_does_not_change_outcome() {
    let mut quiet = Session::new();
    let mut loud = Session::from_board(Board::new(), SessionOptions { echo_fen: true });
    for i in [E2, E4, E7, E5] {
        assert_eq!(quiet.click(sq(i)), loud.click(sq(i)));
    }
    assert_eq!(quiet.board(), loud.board());
}

#[test]
fn random_click_streams_never_create_pieces() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..20 {
        let mut s = Session::new();
        let mut moves = 0usize;

        for _ in 0..400 {
            let before = s.board().clone();
            let target = sq(rng.random_range(0..64u8));

            match s.click(target) {
                ClickOutcome::Selected(_) | ClickOutcome::PickedUp { .. } => {
                    assert_eq!(s.board(), &before);
                }
                ClickOutcome::Moved { from, to, fen } => {
                    moves += 1;
                    let after = s.board();
                    assert_eq!(after.side_to_move, !before.side_to_move);
                    assert!(after.occupied_count() <= before.occupied_count());
                    assert_eq!(after.code_at(to), before.code_at(from));
                    assert_eq!(fen, after.to_fen());
                }
            }
            assert_eq!(s.selected(), Some(target));
        }

        let expected = if moves % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(s.side_to_move(), expected);
        assert!(s.board().occupied_count() >= 1);
    }
}
