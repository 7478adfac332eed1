//! Puzzle image loading.

use std::path::Path;

use eframe::egui::ColorImage;
use image::{RgbaImage, imageops::FilterType};
use jigsaw_core::BoardGeometry;
use jigsaw_game::{ImageSource, InvalidAssetError};

/// The puzzle image, decoded and scaled to the board size.
#[derive(Debug, Clone)]
pub(crate) struct PuzzleImage {
    pixels: RgbaImage,
}

impl PuzzleImage {
    /// Loads `path` and scales it to exactly `geometry.board_side()` on both axes.
    pub(crate) fn load(path: &Path, geometry: BoardGeometry) -> Result<Self, InvalidAssetError> {
        let image = image::open(path).map_err(|err| InvalidAssetError::Unreadable {
            name: path.display().to_string(),
            reason: err.to_string(),
        })?;
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(InvalidAssetError::Empty { width, height });
        }

        let side = geometry.board_side();
        log::info!(
            "loaded {} ({width}x{height}), scaling to {side}x{side}",
            path.display()
        );
        let pixels = image
            .resize_exact(side, side, FilterType::Triangle)
            .into_rgba8();
        Ok(Self { pixels })
    }

    /// Converts the pixels into an egui image for texture upload.
    pub(crate) fn to_color_image(&self) -> ColorImage {
        let (width, height) = self.pixels.dimensions();
        ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            self.pixels.as_raw(),
        )
    }
}

impl ImageSource for PuzzleImage {
    fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use image::Rgba;
    use jigsaw_core::GridSize;

    use super::*;

    fn geometry() -> BoardGeometry {
        BoardGeometry::new(GridSize::new(4).unwrap(), 10).unwrap()
    }

    #[test]
    fn load_scales_to_board_side() {
        let dir = env::temp_dir().join(format!("jigsaw-asset-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("odd.png");
        RgbaImage::from_pixel(37, 23, Rgba([200, 10, 10, 255]))
            .save(&path)
            .unwrap();

        let image = PuzzleImage::load(&path, geometry()).unwrap();
        assert_eq!(image.dimensions(), (40, 40));
        assert_eq!(image.to_color_image().size, [40, 40]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_unreadable() {
        let path = env::temp_dir().join("jigsaw-definitely-missing.jpg");
        let err = PuzzleImage::load(&path, geometry()).unwrap_err();
        assert!(matches!(err, InvalidAssetError::Unreadable { .. }));
        assert!(err.to_string().contains("jigsaw-definitely-missing.jpg"));
    }

    #[test]
    fn garbage_file_is_unreadable() {
        let dir = env::temp_dir().join(format!("jigsaw-garbage-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let err = PuzzleImage::load(&path, geometry()).unwrap_err();
        assert!(matches!(err, InvalidAssetError::Unreadable { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }
}
