//! Mapping between grid cells and board pixels.

use crate::{GridSize, PixelPoint, PixelRect, Position};

/// Errors returned when constructing a [`BoardGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeometryError {
    /// Pieces must be at least one pixel wide.
    #[display("piece size must be non-zero")]
    ZeroPieceSize,
    /// `piece_size * grid_size` does not fit in `u32`.
    #[display("board side overflows: {piece_size} px x {grid_size}")]
    BoardTooLarge {
        /// Requested piece size.
        piece_size: u32,
        /// Requested grid size.
        grid_size: GridSize,
    },
}

/// Grid size plus square piece size in pixels.
///
/// The board occupies `board_side() x board_side()` pixels with cell `(0, 0)` at
/// the origin. Cell `(col, row)` covers `[col * piece, (col + 1) * piece)` on the
/// x axis and likewise on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    grid_size: GridSize,
    piece_size: u32,
}

impl BoardGeometry {
    /// Creates a geometry.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroPieceSize`] if `piece_size` is zero, or
    /// [`GeometryError::BoardTooLarge`] if the board side would overflow.
    pub fn new(grid_size: GridSize, piece_size: u32) -> Result<Self, GeometryError> {
        if piece_size == 0 {
            return Err(GeometryError::ZeroPieceSize);
        }
        if piece_size
            .checked_mul(u32::from(grid_size.get()))
            .is_none()
        {
            return Err(GeometryError::BoardTooLarge {
                piece_size,
                grid_size,
            });
        }
        Ok(Self {
            grid_size,
            piece_size,
        })
    }

    /// Returns the grid size.
    #[must_use]
    pub const fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    /// Returns the side of one square piece, in pixels.
    #[must_use]
    pub const fn piece_size(&self) -> u32 {
        self.piece_size
    }

    /// Returns the side of the whole board, in pixels.
    #[must_use]
    pub fn board_side(&self) -> u32 {
        self.piece_size * u32::from(self.grid_size.get())
    }

    #[expect(clippy::cast_precision_loss)]
    fn piece_size_f32(&self) -> f32 {
        self.piece_size as f32
    }

    /// Returns the top-left pixel of cell `pos`.
    #[must_use]
    pub fn cell_origin(&self, pos: Position) -> PixelPoint {
        let piece = self.piece_size_f32();
        PixelPoint::new(
            f32::from(pos.col()) * piece,
            f32::from(pos.row()) * piece,
        )
    }

    /// Returns the pixel rectangle covered by cell `pos`.
    #[must_use]
    pub fn cell_rect(&self, pos: Position) -> PixelRect {
        PixelRect::square(self.cell_origin(pos), self.piece_size_f32())
    }

    /// Returns the nearest cell to a piece whose top-left corner is at `top_left`.
    ///
    /// Each axis is rounded independently (`top_left / piece_size`, ties to even)
    /// and then clamped into `[0, grid_size)`, so the result is always a valid
    /// cell.
    #[must_use]
    pub fn snap(&self, top_left: PixelPoint) -> Position {
        let piece = self.piece_size_f32();
        let last = f32::from(self.grid_size.get() - 1);
        let axis = |v: f32| {
            let cell = (v / piece).round_ties_even();
            if cell.is_nan() {
                return 0;
            }
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let cell = cell.clamp(0.0, last) as u8;
            cell
        };
        Position::new(axis(top_left.x), axis(top_left.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(side: u8) -> BoardGeometry {
        BoardGeometry::new(GridSize::new(side).unwrap(), 100).unwrap()
    }

    #[test]
    fn rejects_zero_piece_size() {
        assert_eq!(
            BoardGeometry::new(GridSize::new(4).unwrap(), 0),
            Err(GeometryError::ZeroPieceSize)
        );
    }

    #[test]
    fn rejects_overflowing_board() {
        assert!(matches!(
            BoardGeometry::new(GridSize::new(15).unwrap(), u32::MAX / 2),
            Err(GeometryError::BoardTooLarge { .. })
        ));
    }

    #[test]
    fn board_side_and_cell_rect() {
        let g = geometry(4);
        assert_eq!(g.board_side(), 400);
        let rect = g.cell_rect(Position::new(2, 1));
        assert_eq!(rect.min, PixelPoint::new(200.0, 100.0));
        assert!((rect.width - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn snap_rounds_to_nearest_cell() {
        let g = geometry(4);
        assert_eq!(g.snap(PixelPoint::new(49.0, 0.0)), Position::new(0, 0));
        assert_eq!(g.snap(PixelPoint::new(51.0, 0.0)), Position::new(1, 0));
        assert_eq!(g.snap(PixelPoint::new(0.0, 149.0)), Position::new(0, 1));
        assert_eq!(g.snap(PixelPoint::new(0.0, 151.0)), Position::new(0, 2));
    }

    #[test]
    fn snap_breaks_half_cell_ties_to_even() {
        let g = geometry(4);
        let cols: Vec<_> = [50.0, 150.0, 250.0]
            .into_iter()
            .map(|x| g.snap(PixelPoint::new(x, 0.0)).col())
            .collect();
        assert_eq!(cols, [0, 2, 2]);
        assert_eq!(g.snap(PixelPoint::new(0.0, 50.0)), Position::new(0, 0));
    }

    #[test]
    fn snap_clamps_to_edges() {
        let g = geometry(4);
        assert_eq!(g.snap(PixelPoint::new(-100.0, 200.0)), Position::new(0, 2));
        assert_eq!(g.snap(PixelPoint::new(400.0, 0.0)), Position::new(3, 0));
        assert_eq!(
            g.snap(PixelPoint::new(10_000.0, -10_000.0)),
            Position::new(3, 0)
        );
    }

    #[test]
    fn snap_handles_nan() {
        let g = geometry(4);
        assert_eq!(g.snap(PixelPoint::new(f32::NAN, 300.0)), Position::new(0, 3));
    }

    #[test]
    fn single_cell_grid_always_snaps_to_origin() {
        let g = geometry(1);
        assert_eq!(g.snap(PixelPoint::new(250.0, -80.0)), Position::new(0, 0));
    }
}
