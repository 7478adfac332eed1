//! Jigsaw puzzle state machine.
//!
//! This crate holds the game logic and nothing else: which tile sits in which
//! cell, how a drag moves a tile, where a dropped tile lands, and whether the
//! picture is complete. Rendering and input sourcing live elsewhere and talk to
//! this crate through [`BoardSnapshot`] and [`PointerEvent`].
//!
//! # Overview
//!
//! - [`Tile`]: one piece, with its home cell, current cell and drag state.
//! - [`Board`]: all tiles plus the grid geometry. Owns placement, hit testing,
//!   snap-and-swap dropping and win detection.
//! - [`InteractionController`]: turns pointer events into board operations.
//!
//! # Example
//!
//! ```
//! use jigsaw_core::{BoardGeometry, GridSize, PixelPoint, Position};
//! use jigsaw_game::{Board, EventOutcome, InteractionController, PointerEvent};
//!
//! let geometry = BoardGeometry::new(GridSize::new(2).unwrap(), 100)?;
//! // Tiles 0 and 1 start on each other's home cells.
//! let mut board = Board::with_placements(
//!     geometry,
//!     &[
//!         Position::new(1, 0),
//!         Position::new(0, 0),
//!         Position::new(0, 1),
//!         Position::new(1, 1),
//!     ],
//! )?;
//! assert!(!board.is_solved());
//!
//! let mut controller = InteractionController::new();
//! // Pick up the tile in the top-right cell and drop it on the top-left cell.
//! controller.handle(&mut board, PointerEvent::PointerDown(PixelPoint::new(150.0, 50.0)))?;
//! controller.handle(&mut board, PointerEvent::PointerMove(PixelPoint::new(50.0, 50.0)))?;
//! let outcome = controller.handle(&mut board, PointerEvent::PointerUp(PixelPoint::new(50.0, 50.0)))?;
//!
//! assert!(outcome.is_dropped());
//! assert!(board.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    board::{Board, DropOutcome, ImageSource},
    controller::{ControllerState, EventOutcome, InteractionController},
    error::{InitializeError, InvalidAssetError, InvariantViolation},
    event::PointerEvent,
    snapshot::{BoardSnapshot, TileView},
    tile::{Tile, TileId},
};

mod board;
mod controller;
mod error;
mod event;
mod snapshot;
mod tile;
