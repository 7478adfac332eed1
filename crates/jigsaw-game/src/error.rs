use jigsaw_core::{GridSize, Position};

use crate::TileId;

/// The puzzle image cannot be used.
///
/// Always fatal: the game has nothing to show without its image.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidAssetError {
    /// The image could not be read or decoded.
    #[display("cannot load image {name}: {reason}")]
    Unreadable {
        /// Where the image was loaded from.
        name: String,
        /// Decoder or I/O error message.
        reason: String,
    },
    /// The image has no pixels.
    #[display("image is empty ({width}x{height})")]
    Empty {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
    /// The image cannot be split into equal square tiles.
    #[display("{width}x{height} image cannot be split into a {grid_size} grid of square tiles")]
    NotDivisible {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Requested grid.
        grid_size: GridSize,
    },
    /// The image was not scaled to the board size.
    #[display("image is {width}x{height}, expected {expected}x{expected}")]
    SizeMismatch {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Board side in pixels.
        expected: u32,
    },
}

/// A board operation was called in a state the interaction rules never produce.
///
/// These indicate programmer errors. The board refuses the operation and stays
/// consistent instead of applying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvariantViolation {
    /// The tile id does not exist on this board.
    #[display("unknown tile {tile}")]
    UnknownTile {
        /// Offending id.
        tile: TileId,
    },
    /// A drag was started while another one is active.
    #[display("tile {active} is already being dragged")]
    AlreadyDragging {
        /// Tile currently dragging.
        active: TileId,
    },
    /// A drag operation targeted a tile that is not being dragged.
    #[display("tile {tile} is not being dragged")]
    NotDragging {
        /// Offending id.
        tile: TileId,
    },
    /// A layout does not cover the grid.
    #[display("layout has {actual} placements, expected {expected}")]
    LayoutSizeMismatch {
        /// Number of grid cells.
        expected: usize,
        /// Number of placements supplied.
        actual: usize,
    },
    /// A placement lies outside the grid.
    #[display("cell {pos} is outside the grid")]
    CellOutOfGrid {
        /// Offending cell.
        pos: Position,
    },
    /// Two tiles claim the same cell.
    #[display("cell {pos} is occupied by more than one tile")]
    DoublyOccupied {
        /// Offending cell.
        pos: Position,
    },
    /// No tile occupies a cell.
    #[display("cell {pos} is empty")]
    EmptyCell {
        /// Offending cell.
        pos: Position,
    },
}

/// Errors returned by [`Board::initialize`](crate::Board::initialize).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum InitializeError {
    /// The image cannot be partitioned into tiles.
    #[display("invalid puzzle image: {_0}")]
    InvalidAsset(InvalidAssetError),
    /// The starting layout is not a permutation of the grid.
    #[display("invalid starting layout: {_0}")]
    InvalidLayout(InvariantViolation),
}
