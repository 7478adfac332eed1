use jigsaw_core::BoardGeometry;
use jigsaw_game::{Board, ImageSource, InitializeError};
use jigsaw_generator::LayoutGenerator;

/// Builds a board with a freshly shuffled layout.
pub(crate) fn new_board<S>(geometry: BoardGeometry, image: &S) -> Result<Board, InitializeError>
where
    S: ImageSource + ?Sized,
{
    let layout = LayoutGenerator::new(geometry.grid_size()).generate();
    Board::initialize(geometry, image, &layout)
}

#[cfg(test)]
mod tests {
    use jigsaw_core::GridSize;

    use super::*;

    #[test]
    fn new_board_starts_unsolved() {
        let geometry = BoardGeometry::new(GridSize::new(3).unwrap(), 50).unwrap();
        let board = new_board(geometry, &(150, 150)).unwrap();
        assert!(!board.is_solved());
        assert_eq!(board.tiles().len(), 9);
    }

    #[test]
    fn new_board_rejects_unscaled_image() {
        let geometry = BoardGeometry::new(GridSize::new(3).unwrap(), 50).unwrap();
        assert!(matches!(
            new_board(geometry, &(300, 300)),
            Err(InitializeError::InvalidAsset(_))
        ));
    }
}
