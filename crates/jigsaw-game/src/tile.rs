use jigsaw_core::{PixelPoint, Position};

/// Stable identifier of a tile.
///
/// Ids are assigned in row-major order of the source image, so tile `i` belongs
/// on the `i`-th cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("#{_0}")]
pub struct TileId(usize);

impl TileId {
    /// Creates an id from its row-major index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the row-major index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single puzzle piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    id: TileId,
    home: Position,
    current: Position,
    pixel_offset: PixelPoint,
    dragging: bool,
}

impl Tile {
    pub(crate) const fn new(id: TileId, home: Position, current: Position) -> Self {
        Self {
            id,
            home,
            current,
            pixel_offset: PixelPoint::ZERO,
            dragging: false,
        }
    }

    /// Returns the tile's id.
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Returns the cell this tile's image content belongs to.
    #[must_use]
    pub const fn home_position(&self) -> Position {
        self.home
    }

    /// Returns the cell the tile currently occupies.
    ///
    /// While dragging this is still the cell the tile was picked up from.
    #[must_use]
    pub const fn current_position(&self) -> Position {
        self.current
    }

    /// Returns the top-left corner of the tile while it is being dragged.
    ///
    /// The value is stale when [`Tile::is_dragging`] is `false`.
    #[must_use]
    pub const fn pixel_offset(&self) -> PixelPoint {
        self.pixel_offset
    }

    /// Returns `true` while the tile is picked up.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` if the tile sits on its home cell.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.current == self.home
    }

    pub(crate) fn pick_up(&mut self, origin: PixelPoint) {
        self.dragging = true;
        self.pixel_offset = origin;
    }

    pub(crate) fn move_to(&mut self, top_left: PixelPoint) {
        self.pixel_offset = top_left;
    }

    pub(crate) fn put_down(&mut self) {
        self.dragging = false;
    }

    pub(crate) fn set_current(&mut self, pos: Position) {
        self.current = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_is_idle() {
        let tile = Tile::new(TileId::new(3), Position::new(1, 1), Position::new(0, 1));
        assert_eq!(tile.id().index(), 3);
        assert!(!tile.is_dragging());
        assert!(!tile.is_home());
    }

    #[test]
    fn drag_cycle_updates_flags() {
        let mut tile = Tile::new(TileId::new(0), Position::new(0, 0), Position::new(1, 0));
        tile.pick_up(PixelPoint::new(100.0, 0.0));
        assert!(tile.is_dragging());
        tile.move_to(PixelPoint::new(12.0, 7.0));
        assert_eq!(tile.pixel_offset(), PixelPoint::new(12.0, 7.0));
        tile.set_current(Position::new(0, 0));
        tile.put_down();
        assert!(!tile.is_dragging());
        assert!(tile.is_home());
    }

    #[test]
    fn id_display() {
        assert_eq!(TileId::new(7).to_string(), "#7");
    }
}
