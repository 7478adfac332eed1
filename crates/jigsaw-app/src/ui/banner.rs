use eframe::egui::{Align2, Color32, FontId, Painter, Rect};

const FONT_SIZE: f32 = 48.0;

/// Draws the completion banner centered over the board.
pub(crate) fn show(painter: &Painter, board_rect: Rect, text: &str, scale: f32) {
    let font = FontId::proportional(FONT_SIZE * scale);
    let galley = painter.layout_no_wrap(text.to_owned(), font, Color32::WHITE);
    let text_rect = Align2::CENTER_CENTER.anchor_size(board_rect.center(), galley.size());
    painter.rect_filled(
        text_rect.expand(12.0 * scale),
        8.0 * scale,
        Color32::from_black_alpha(160),
    );
    painter.galley(text_rect.min, galley, Color32::WHITE);
}
