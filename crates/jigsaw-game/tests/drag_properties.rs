//! Property tests: arbitrary pointer traffic never breaks the board.

use std::collections::HashSet;

use jigsaw_core::{BoardGeometry, GridSize, PixelPoint};
use jigsaw_game::{Board, EventOutcome, InteractionController, PointerEvent};
use jigsaw_generator::{LayoutGenerator, ShuffleSeed};
use proptest::prelude::*;

const PIECE: u32 = 40;

fn board(side: u8, seed: [u8; 32]) -> Board {
    let geometry = BoardGeometry::new(GridSize::new(side).unwrap(), PIECE).unwrap();
    let layout =
        LayoutGenerator::new(geometry.grid_size()).generate_with_seed(ShuffleSeed::from_bytes(seed));
    let side_px = geometry.board_side();
    Board::initialize(geometry, &(side_px, side_px), &layout).unwrap()
}

/// Points spread a little beyond the board on every side, to exercise clamping.
fn point(side: u8) -> impl Strategy<Value = PixelPoint> {
    #[expect(clippy::cast_precision_loss)]
    let extent = (u32::from(side) * PIECE) as f32;
    (-extent..2.0 * extent, -extent..2.0 * extent).prop_map(|(x, y)| PixelPoint::new(x, y))
}

fn event(side: u8) -> impl Strategy<Value = PointerEvent> {
    prop_oneof![
        3 => point(side).prop_map(PointerEvent::PointerDown),
        4 => point(side).prop_map(PointerEvent::PointerMove),
        3 => point(side).prop_map(PointerEvent::PointerUp),
    ]
}

fn scenario() -> impl Strategy<Value = (u8, [u8; 32], Vec<PointerEvent>)> {
    (1..=5_u8, any::<[u8; 32]>()).prop_flat_map(|(side, seed)| {
        (
            Just(side),
            Just(seed),
            prop::collection::vec(event(side), 0..64),
        )
    })
}

fn assert_bijection(board: &Board) -> Result<(), TestCaseError> {
    let grid_size = board.geometry().grid_size();
    let occupied: HashSet<_> = board
        .tiles()
        .iter()
        .map(jigsaw_game::Tile::current_position)
        .collect();
    prop_assert_eq!(occupied.len(), grid_size.cell_count());
    for pos in grid_size.positions() {
        let occupant = board.occupant(pos);
        prop_assert!(occupant.is_some());
        let tile = board.tile(occupant.unwrap()).unwrap();
        prop_assert_eq!(tile.current_position(), pos);
    }
    Ok(())
}

proptest! {
    #[test]
    fn every_drop_preserves_bijection((side, seed, events) in scenario()) {
        let mut board = board(side, seed);
        let mut controller = InteractionController::new();

        for event in events {
            let outcome = controller.handle(&mut board, event).unwrap();
            if let EventOutcome::Dropped(drop) = outcome {
                prop_assert!(board.dragging_tile().is_none());
                prop_assert_eq!(board.occupant(drop.to), Some(drop.tile));
                if let Some(other) = drop.swapped_with {
                    prop_assert_eq!(board.occupant(drop.from), Some(other));
                }
                prop_assert!(board.check_invariants().is_ok());
                assert_bijection(&board)?;
            }
        }
    }

    #[test]
    fn at_most_one_tile_drags((side, seed, events) in scenario()) {
        let mut board = board(side, seed);
        let mut controller = InteractionController::new();

        for event in events {
            controller.handle(&mut board, event).unwrap();
            let dragging = board.tiles().iter().filter(|t| t.is_dragging()).count();
            prop_assert!(dragging <= 1);
            prop_assert_eq!(dragging == 1, board.dragging_tile().is_some());
            prop_assert_eq!(controller.state().is_dragging(), board.dragging_tile().is_some());
        }
    }

    #[test]
    fn solved_reflects_home_positions((side, seed, events) in scenario()) {
        let mut board = board(side, seed);
        let mut controller = InteractionController::new();

        for event in events {
            controller.handle(&mut board, event).unwrap();
            let all_home = board
                .tiles()
                .iter()
                .all(|t| t.current_position() == t.home_position());
            prop_assert_eq!(board.is_solved(), all_home);
        }
    }
}
