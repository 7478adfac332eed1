use jigsaw_core::{BoardGeometry, PixelRect};

use crate::TileId;

/// What a presenter needs to draw one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileView {
    /// Tile id.
    pub id: TileId,
    /// Screen rectangle, relative to the board origin.
    pub rect: PixelRect,
    /// Region of the board-sized source image showing this tile's content.
    pub source_region: PixelRect,
    /// Whether the tile is being dragged.
    pub is_dragging: bool,
    /// Whether the tile sits on its home cell.
    pub is_home: bool,
}

/// Read-only view of a board for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    /// Board geometry.
    pub geometry: BoardGeometry,
    /// Tiles in draw order, bottom first. A dragged tile is always last.
    pub tiles: Vec<TileView>,
    /// Number of tiles on their home cell.
    pub tiles_home: usize,
    /// Whether the puzzle is complete.
    pub solved: bool,
}
