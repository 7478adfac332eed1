use jigsaw_core::{BoardGeometry, PixelPoint, PixelRect, Position};
use jigsaw_generator::GeneratedLayout;

use crate::{
    BoardSnapshot, InitializeError, InvalidAssetError, InvariantViolation, Tile, TileId, TileView,
};

/// Something that can be sliced into puzzle tiles.
///
/// The board only needs the pixel dimensions to validate the partition; the
/// pixels themselves stay with the presenter.
pub trait ImageSource {
    /// Returns `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);
}

impl ImageSource for (u32, u32) {
    fn dimensions(&self) -> (u32, u32) {
        *self
    }
}

/// Result of a completed drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropOutcome {
    /// Dropped tile.
    pub tile: TileId,
    /// Cell the tile was picked up from.
    pub from: Position,
    /// Cell the tile snapped to.
    pub to: Position,
    /// Tile that previously occupied `to` and now occupies `from`, if any.
    pub swapped_with: Option<TileId>,
}

/// The authoritative puzzle state.
///
/// Every grid cell is occupied by exactly one tile whenever no drag is in
/// progress. Dropping a tile onto an occupied cell swaps the two tiles, so no
/// sequence of operations can leave a cell empty or shared.
///
/// # Example
///
/// ```
/// use jigsaw_core::{BoardGeometry, GridSize, PixelPoint, Position};
/// use jigsaw_game::Board;
///
/// let geometry = BoardGeometry::new(GridSize::new(2).unwrap(), 100)?;
/// let mut board = Board::with_placements(
///     geometry,
///     &[
///         Position::new(1, 0),
///         Position::new(0, 0),
///         Position::new(0, 1),
///         Position::new(1, 1),
///     ],
/// )?;
///
/// let tile = board.tile_at(PixelPoint::new(120.0, 30.0)).unwrap();
/// board.begin_drag(tile)?;
/// board.update_drag_position(tile, PixelPoint::new(40.0, 60.0))?;
/// let outcome = board.end_drag(tile)?;
///
/// assert_eq!(outcome.to, Position::new(0, 0));
/// assert!(outcome.swapped_with.is_some());
/// assert!(board.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    geometry: BoardGeometry,
    tiles: Vec<Tile>,
    /// Occupant of each cell, indexed by row-major cell index.
    cells: Vec<TileId>,
    /// Draw order, bottom first.
    z_order: Vec<TileId>,
    dragging: Option<TileId>,
}

impl Board {
    /// Creates a board for an image, placing tiles according to a shuffled layout.
    ///
    /// The image must already be scaled to `geometry.board_side()` on both axes.
    /// Tile `i` shows the `i`-th square region of the image in row-major order and
    /// belongs on the `i`-th cell.
    ///
    /// # Errors
    ///
    /// Returns [`InitializeError::InvalidAsset`] if the image is empty, cannot be
    /// divided into equal square tiles, or does not match the board size.
    /// Returns [`InitializeError::InvalidLayout`] if `layout` is not a permutation
    /// of the grid's cells.
    pub fn initialize<S>(
        geometry: BoardGeometry,
        source: &S,
        layout: &GeneratedLayout,
    ) -> Result<Self, InitializeError>
    where
        S: ImageSource + ?Sized,
    {
        check_partition(geometry, source.dimensions())?;
        let board = Self::with_placements(geometry, &layout.placements)?;
        log::info!(
            "new {} puzzle, seed {}, {} of {} tiles home",
            geometry.grid_size(),
            layout.seed,
            board.tiles_home(),
            board.tiles.len(),
        );
        Ok(board)
    }

    /// Creates a board from explicit starting cells.
    ///
    /// `placements[i]` is the starting cell of tile `i`. Any permutation is
    /// accepted, including the identity.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::LayoutSizeMismatch`] if there is not exactly
    /// one placement per cell, [`InvariantViolation::CellOutOfGrid`] if a placement
    /// lies outside the grid, or [`InvariantViolation::DoublyOccupied`] if two
    /// tiles share a cell.
    pub fn with_placements(
        geometry: BoardGeometry,
        placements: &[Position],
    ) -> Result<Self, InvariantViolation> {
        let grid_size = geometry.grid_size();
        let cell_count = grid_size.cell_count();
        if placements.len() != cell_count {
            return Err(InvariantViolation::LayoutSizeMismatch {
                expected: cell_count,
                actual: placements.len(),
            });
        }

        let mut cells = vec![None; cell_count];
        let mut tiles = Vec::with_capacity(cell_count);
        for (index, (home, &current)) in grid_size.positions().zip(placements).enumerate() {
            if !grid_size.contains(current) {
                return Err(InvariantViolation::CellOutOfGrid { pos: current });
            }
            let slot = &mut cells[current.index(grid_size)];
            if slot.is_some() {
                return Err(InvariantViolation::DoublyOccupied { pos: current });
            }
            let id = TileId::new(index);
            *slot = Some(id);
            tiles.push(Tile::new(id, home, current));
        }
        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(index, occupant)| {
                occupant.ok_or(InvariantViolation::EmptyCell {
                    pos: Position::from_index(index, grid_size),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            geometry,
            tiles,
            cells,
            z_order: (0..cell_count).map(TileId::new).collect(),
            dragging: None,
        })
    }

    /// Returns the board geometry.
    #[must_use]
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Returns all tiles, indexed by [`TileId::index`].
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the tile with the given id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Returns the tile occupying `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<TileId> {
        let grid_size = self.geometry.grid_size();
        grid_size
            .contains(pos)
            .then(|| self.cells[pos.index(grid_size)])
    }

    /// Returns the tile being dragged, if any.
    #[must_use]
    pub fn dragging_tile(&self) -> Option<TileId> {
        self.dragging
    }

    /// Returns the screen rectangle of a tile.
    ///
    /// A dragged tile follows the pointer; every other tile covers its cell.
    #[must_use]
    pub fn tile_rect(&self, tile: &Tile) -> PixelRect {
        if tile.is_dragging() {
            #[expect(clippy::cast_precision_loss)]
            let side = self.geometry.piece_size() as f32;
            PixelRect::square(tile.pixel_offset(), side)
        } else {
            self.geometry.cell_rect(tile.current_position())
        }
    }

    /// Returns the tile under `point`.
    ///
    /// The dragged tile wins if it is under the point; otherwise the most
    /// recently placed tile does.
    #[must_use]
    pub fn tile_at(&self, point: PixelPoint) -> Option<TileId> {
        if let Some(id) = self.dragging
            && self.tile_rect(&self.tiles[id.index()]).contains(point)
        {
            return Some(id);
        }
        self.z_order.iter().rev().copied().find(|id| {
            let tile = &self.tiles[id.index()];
            !tile.is_dragging() && self.tile_rect(tile).contains(point)
        })
    }

    /// Picks up a tile.
    ///
    /// The tile's rectangle stays on its cell until the first
    /// [`update_drag_position`](Self::update_drag_position).
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::AlreadyDragging`] if any tile is already
    /// being dragged, or [`InvariantViolation::UnknownTile`] for a bad id. The board
    /// is left unchanged.
    pub fn begin_drag(&mut self, id: TileId) -> Result<(), InvariantViolation> {
        let tile = self
            .tile(id)
            .ok_or_else(|| violation(InvariantViolation::UnknownTile { tile: id }))?;
        if let Some(active) = self.dragging {
            return Err(violation(InvariantViolation::AlreadyDragging { active }));
        }
        let origin = self.geometry.cell_origin(tile.current_position());
        self.tiles[id.index()].pick_up(origin);
        self.dragging = Some(id);
        log::debug!("picked up tile {id} at {}", self.tiles[id.index()].current_position());
        Ok(())
    }

    /// Moves a dragged tile so that its center follows `point`.
    ///
    /// No snapping happens here.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::NotDragging`] if `id` is not the dragged tile.
    pub fn update_drag_position(
        &mut self,
        id: TileId,
        point: PixelPoint,
    ) -> Result<(), InvariantViolation> {
        self.ensure_dragging(id)?;
        #[expect(clippy::cast_precision_loss)]
        let half = self.geometry.piece_size() as f32 / 2.0;
        self.tiles[id.index()].move_to(point - PixelPoint::splat(half));
        Ok(())
    }

    /// Drops a dragged tile onto the nearest cell.
    ///
    /// The destination is the tile's top-left corner divided by the piece size,
    /// rounded per axis and clamped into the grid. If another tile occupies the
    /// destination, that tile moves to the dropped tile's origin cell. The dropped
    /// tile is raised to the top of the draw order.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::NotDragging`] if `id` is not the dragged tile.
    /// Returns another [`InvariantViolation`] if the board was found inconsistent
    /// after the drop.
    pub fn end_drag(&mut self, id: TileId) -> Result<DropOutcome, InvariantViolation> {
        self.ensure_dragging(id)?;
        let grid_size = self.geometry.grid_size();
        let tile = &self.tiles[id.index()];
        let from = tile.current_position();
        let to = self.geometry.snap(tile.pixel_offset());

        let occupant = self.cells[to.index(grid_size)];
        let swapped_with = (occupant != id).then_some(occupant);
        if let Some(other) = swapped_with {
            self.tiles[other.index()].set_current(from);
            self.cells[from.index(grid_size)] = other;
            self.tiles[id.index()].set_current(to);
            self.cells[to.index(grid_size)] = id;
        }
        self.tiles[id.index()].put_down();
        self.dragging = None;
        self.raise(id);

        match swapped_with {
            Some(other) => log::debug!("dropped tile {id} on {to}, swapped with {other} to {from}"),
            None => log::debug!("dropped tile {id} back on {to}"),
        }
        self.check_invariants().map_err(violation)?;
        if self.is_solved() {
            log::info!("puzzle solved");
        }

        Ok(DropOutcome {
            tile: id,
            from,
            to,
            swapped_with,
        })
    }

    /// Returns `true` if every tile is on its home cell.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_home)
    }

    /// Returns the number of tiles on their home cell.
    #[must_use]
    pub fn tiles_home(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_home()).count()
    }

    /// Verifies the board's structural invariants.
    ///
    /// Outside a drag every cell holds exactly one tile, the cell table agrees
    /// with the tiles, and at most one tile is dragging.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let grid_size = self.geometry.grid_size();
        let mut seen = vec![false; grid_size.cell_count()];
        for tile in &self.tiles {
            let pos = tile.current_position();
            if !grid_size.contains(pos) {
                return Err(InvariantViolation::CellOutOfGrid { pos });
            }
            let index = pos.index(grid_size);
            if seen[index] || self.cells[index] != tile.id() {
                return Err(InvariantViolation::DoublyOccupied { pos });
            }
            seen[index] = true;
        }
        if let Some(index) = seen.iter().position(|seen| !seen) {
            return Err(InvariantViolation::EmptyCell {
                pos: Position::from_index(index, grid_size),
            });
        }

        let mut dragging = self.tiles.iter().filter(|tile| tile.is_dragging());
        if let (Some(_), Some(second)) = (dragging.next(), dragging.next()) {
            return Err(InvariantViolation::AlreadyDragging {
                active: second.id(),
            });
        }
        if let Some(active) = self.dragging
            && !self.tiles[active.index()].is_dragging()
        {
            return Err(InvariantViolation::NotDragging { tile: active });
        }
        Ok(())
    }

    /// Returns a read-only view of the board for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let view = |id: TileId| {
            let tile = &self.tiles[id.index()];
            TileView {
                id,
                rect: self.tile_rect(tile),
                source_region: self.geometry.cell_rect(tile.home_position()),
                is_dragging: tile.is_dragging(),
                is_home: tile.is_home(),
            }
        };
        let tiles = self
            .z_order
            .iter()
            .copied()
            .filter(|id| Some(*id) != self.dragging)
            .chain(self.dragging)
            .map(view)
            .collect();
        BoardSnapshot {
            geometry: self.geometry,
            tiles,
            tiles_home: self.tiles_home(),
            solved: self.is_solved(),
        }
    }

    fn ensure_dragging(&self, id: TileId) -> Result<(), InvariantViolation> {
        if self.tile(id).is_none() {
            return Err(violation(InvariantViolation::UnknownTile { tile: id }));
        }
        if self.dragging != Some(id) {
            return Err(violation(InvariantViolation::NotDragging { tile: id }));
        }
        Ok(())
    }

    fn raise(&mut self, id: TileId) {
        if let Some(index) = self.z_order.iter().position(|z| *z == id) {
            self.z_order.remove(index);
        }
        self.z_order.push(id);
    }
}

fn violation(err: InvariantViolation) -> InvariantViolation {
    log::error!("board invariant violated: {err}");
    err
}

fn check_partition(
    geometry: BoardGeometry,
    (width, height): (u32, u32),
) -> Result<(), InvalidAssetError> {
    let grid_size = geometry.grid_size();
    let side = u32::from(grid_size.get());
    if width == 0 || height == 0 {
        return Err(InvalidAssetError::Empty { width, height });
    }
    if width != height || width % side != 0 {
        return Err(InvalidAssetError::NotDivisible {
            width,
            height,
            grid_size,
        });
    }
    let expected = geometry.board_side();
    if width != expected {
        return Err(InvalidAssetError::SizeMismatch {
            width,
            height,
            expected,
        });
    }
    Ok(())
}
