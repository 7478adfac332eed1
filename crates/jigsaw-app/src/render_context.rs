use eframe::egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::asset::PuzzleImage;

/// GPU-side resources the presenter draws with.
///
/// Created once the window exists and released explicitly on quit, so nothing
/// graphics-related lives in process-wide state.
pub(crate) struct RenderContext {
    texture: TextureHandle,
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("texture", &self.texture.id())
            .finish()
    }
}

impl RenderContext {
    /// Uploads the puzzle image as a single texture.
    pub(crate) fn create(ctx: &Context, image: &PuzzleImage) -> Self {
        let texture = ctx.load_texture(
            "puzzle-image",
            image.to_color_image(),
            TextureOptions::LINEAR,
        );
        log::debug!("uploaded puzzle texture {:?}", texture.id());
        Self { texture }
    }

    /// Returns the texture that tiles sample their regions from.
    pub(crate) fn texture_id(&self) -> TextureId {
        self.texture.id()
    }

    /// Releases the texture.
    pub(crate) fn shutdown(self) {
        log::debug!("releasing puzzle texture {:?}", self.texture.id());
        drop(self.texture);
    }
}
