//! Core geometry types for the jigsaw puzzle.
//!
//! This crate provides the coordinate systems shared by the game logic and the
//! presentation layer. Nothing here knows about tiles, images or input; it only
//! answers "which cell is this" and "where is that cell on screen".
//!
//! # Overview
//!
//! 1. **Grid space** - integer cell coordinates
//!    - [`GridSize`]: side length of the square grid, in cells
//!    - [`Position`]: a `(col, row)` cell coordinate
//!
//! 2. **Pixel space** - continuous screen coordinates relative to the board origin
//!    - [`PixelPoint`]: a point
//!    - [`PixelRect`]: an axis-aligned rectangle
//!
//! 3. **Mapping between them**
//!    - [`BoardGeometry`]: grid size plus piece size, with cell rectangles and
//!      snap-to-grid rounding
//!
//! # Examples
//!
//! ```
//! use jigsaw_core::{BoardGeometry, GridSize, PixelPoint, Position};
//!
//! let geometry = BoardGeometry::new(GridSize::new(4).unwrap(), 100).unwrap();
//!
//! // A tile dropped slightly right of cell (1, 2) snaps back onto it.
//! let cell = geometry.snap(PixelPoint::new(130.0, 210.0));
//! assert_eq!(cell, Position::new(1, 2));
//!
//! // Drops outside the board are clamped onto the nearest edge cell.
//! let cell = geometry.snap(PixelPoint::new(-250.0, 900.0));
//! assert_eq!(cell, Position::new(0, 3));
//! ```

pub mod geometry;
pub mod pixel;
pub mod position;

pub use self::{
    geometry::{BoardGeometry, GeometryError},
    pixel::{PixelPoint, PixelRect},
    position::{GridSize, Position},
};
