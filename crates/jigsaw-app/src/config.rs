use std::path::PathBuf;

use eframe::egui::Vec2;
use jigsaw_core::{BoardGeometry, GeometryError, GridSize};

const DEFAULT_GRID_SIZE: GridSize = match GridSize::new(4) {
    Some(grid_size) => grid_size,
    None => panic!("default grid size out of range"),
};

/// Fixed game settings.
///
/// There are no flags or environment variables; every field has a compiled-in
/// default.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window title.
    pub title: String,
    /// Initial window inner size in logical pixels.
    pub window_size: Vec2,
    /// Smallest window inner size.
    pub min_window_size: Vec2,
    /// Side of one square tile in image pixels.
    pub piece_size: u32,
    /// Tiles per side.
    pub grid_size: GridSize,
    /// Puzzle image, relative to the working directory.
    pub image_path: PathBuf,
    /// Text shown over the board once it is complete.
    pub banner_text: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Jigsaw Puzzle".to_owned(),
            window_size: Vec2::new(800.0, 600.0),
            min_window_size: Vec2::new(400.0, 300.0),
            piece_size: 100,
            grid_size: DEFAULT_GRID_SIZE,
            image_path: PathBuf::from("puzzle_image.jpg"),
            banner_text: "Puzzle Completed!".to_owned(),
        }
    }
}

impl GameConfig {
    /// Returns the board geometry described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if the piece size is zero or the board would be
    /// too large.
    pub fn geometry(&self) -> Result<BoardGeometry, GeometryError> {
        BoardGeometry::new(self.grid_size, self.piece_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_fits_window() {
        let config = GameConfig::default();
        let geometry = config.geometry().unwrap();
        assert_eq!(geometry.board_side(), 400);
        #[expect(clippy::cast_precision_loss)]
        let side = geometry.board_side() as f32;
        assert!(side <= config.window_size.min_elem());
    }

    #[test]
    fn zero_piece_size_is_rejected() {
        let config = GameConfig {
            piece_size: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.geometry(), Err(GeometryError::ZeroPieceSize));
    }
}
