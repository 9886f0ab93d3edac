//! Game flow integration tests
//!
//! Full-game flows driven by the move selector: enumeration of movable
//! pieces and hinted destinations, seeded random self-play, turn
//! alternation and the invariants that must hold between turns.

use rand::rngs::StdRng;
use rand::SeedableRng;

use xfcheckers::game::ai::{hinted_destinations, movable_pieces};
use xfcheckers::{Game, MoveStrategy, PieceRank, RandomMover, Side};

fn seeded_mover(seed: u64) -> RandomMover<StdRng> {
    RandomMover::with_rng(StdRng::seed_from_u64(seed))
}

fn hint_count(game: &Game) -> usize {
    let mut count = 0;
    for row in 0..game.size() {
        for col in 0..game.size() {
            if game.cell_at(col, row).is_hint() {
                count += 1;
            }
        }
    }
    count
}

fn selected_count(game: &Game) -> usize {
    let mut count = 0;
    for row in 0..game.size() {
        for col in 0..game.size() {
            if game
                .cell_at(col, row)
                .piece()
                .is_some_and(|piece| piece.selected)
            {
                count += 1;
            }
        }
    }
    count
}

// ============================================================================
// Enumeration Tests
// ============================================================================

#[test]
fn test_movable_pieces_on_fresh_board() {
    //! Only the front rank can move at the start: four pieces per side
    let game = Game::default();

    let red = movable_pieces(&game, Side::Red);
    assert_eq!(red.len(), 4, "red front rank");
    for piece in [(0, 5), (2, 5), (4, 5), (6, 5)] {
        assert!(red.contains(&piece), "missing movable red piece {piece:?}");
    }

    let black = movable_pieces(&game, Side::Black);
    assert_eq!(black.len(), 4, "black front rank");
    for piece in [(1, 2), (3, 2), (5, 2), (7, 2)] {
        assert!(black.contains(&piece), "missing movable black piece {piece:?}");
    }
}

#[test]
fn test_hinted_destinations_after_selection() {
    //! The enumeration sees exactly the hints the engine painted
    let mut game = Game::default();
    assert!(hinted_destinations(&game).is_empty());

    game.handle_click(2, 5);
    let hints = hinted_destinations(&game);
    assert_eq!(hints.len(), 2);
    assert!(hints.contains(&(1, 4)));
    assert!(hints.contains(&(3, 4)));
}

#[test]
fn test_every_movable_piece_yields_hints() {
    //! A piece reported movable always paints at least one destination
    //! once selected - the two enumerations share their geometry
    let mut game = Game::default();

    for (col, row) in movable_pieces(&game, Side::Red) {
        game.handle_click(col, row);
        assert!(
            !hinted_destinations(&game).is_empty(),
            "movable piece at ({col}, {row}) painted no hints"
        );
        game.handle_click(col, row); // deselect again
        assert_eq!(hint_count(&game), 0);
    }
}

// ============================================================================
// Random Mover Tests
// ============================================================================

#[test]
fn test_random_mover_completes_a_move() {
    let mut game = Game::default();
    let mut mover = seeded_mover(7);

    assert!(mover.play_turn(&mut game, Side::Red));
    assert_eq!(game.side_to_move(), Side::Black);
    assert_eq!(
        game.pieces_remaining(Side::Red) + game.pieces_remaining(Side::Black),
        24,
        "an opening move captures nothing"
    );
    assert_eq!(hint_count(&game), 0);
    assert_eq!(selected_count(&game), 0);
}

#[test]
fn test_random_mover_without_moves_leaves_board_untouched() {
    //! A stalemated side passes: the board comes back byte for byte
    //! identical and the turn stays where it was
    let mut game = Game::empty(8).expect("valid size");
    // a red man on the far row with nothing to jump cannot move at all
    game.place_piece(1, 0, Side::Red, PieceRank::Man);
    game.place_piece(5, 2, Side::Black, PieceRank::Man);

    assert!(movable_pieces(&game, Side::Red).is_empty());
    let pristine = game.clone();

    let mut mover = seeded_mover(11);
    assert!(!mover.play_turn(&mut game, Side::Red));

    assert_eq!(game, pristine);
    assert_eq!(game.side_to_move(), Side::Red, "no forced pass");
    assert!(!game.status().is_over(), "the selector never ends the game");
}

#[test]
fn test_seeded_self_play_is_reproducible() {
    //! Two movers with the same seed replay the identical game
    let mut first = Game::default();
    let mut second = Game::default();
    let mut mover_a = seeded_mover(1234);
    let mut mover_b = seeded_mover(1234);

    for _ in 0..40 {
        if first.status().is_over() {
            break;
        }
        let side = first.side_to_move();
        let moved_a = mover_a.play_turn(&mut first, side);
        let moved_b = mover_b.play_turn(&mut second, side);
        assert_eq!(moved_a, moved_b);
        assert_eq!(first, second, "same seed must give the same game");
        if !moved_a {
            break;
        }
    }
}

#[test]
fn test_self_play_invariants_hold() {
    //! Random self-play never leaves transient state behind, never grows
    //! the piece count, and alternates sides on every completed move
    let mut game = Game::default();
    let mut mover = seeded_mover(99);
    let mut total_pieces =
        game.pieces_remaining(Side::Red) + game.pieces_remaining(Side::Black);

    for _ in 0..300 {
        if game.status().is_over() {
            break;
        }
        let side = game.side_to_move();
        if !mover.play_turn(&mut game, side) {
            break;
        }

        assert_eq!(game.side_to_move(), side.opponent(), "turn must alternate");
        assert_eq!(hint_count(&game), 0);
        assert_eq!(selected_count(&game), 0);

        let now = game.pieces_remaining(Side::Red) + game.pieces_remaining(Side::Black);
        assert!(now <= total_pieces, "pieces never reappear");
        total_pieces = now;
    }

    if let Some(winner) = game.status().winner() {
        assert_eq!(game.pieces_remaining(winner.opponent()), 0);
        assert!(game.pieces_remaining(winner) > 0);
    }
}
