use eframe::egui::{
    Color32, InputState, Painter, Rect, Sense, Stroke, StrokeKind, TextureId, Ui, Vec2, pos2,
};
use jigsaw_game::{BoardSnapshot, TileView};

use crate::{
    action::ActionRequestQueue,
    ui::{
        banner,
        transform::{self, BoardTransform},
    },
};

const GRID_LINE_WIDTH: f32 = 1.0;
const DRAG_BORDER_WIDTH: f32 = 3.0;
const HOME_BORDER_WIDTH: f32 = 1.5;
const HOME_BORDER_COLOR: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);
const DRAG_SHADOW_OFFSET: f32 = 6.0;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct TileVisualState: u8 {
        const DRAGGING = 0b0000_0001;
        const SOLVED = 0b0000_0010;
        const HOME = 0b0000_0100;
    }
}

impl TileVisualState {
    fn of(tile: &TileView, solved: bool) -> Self {
        let mut state = Self::empty();
        state.set(Self::DRAGGING, tile.is_dragging);
        state.set(Self::SOLVED, solved);
        state.set(Self::HOME, tile.is_home);
        state
    }

    fn border(self, ui: &Ui, scale: f32) -> Option<Stroke> {
        if self.contains(Self::SOLVED) {
            return None;
        }
        if self.contains(Self::DRAGGING) {
            let color = ui.visuals().selection.stroke.color;
            return Some(Stroke::new(DRAG_BORDER_WIDTH * scale, color));
        }
        if self.contains(Self::HOME) {
            return Some(Stroke::new(HOME_BORDER_WIDTH * scale, HOME_BORDER_COLOR));
        }
        None
    }

    fn shadow(self) -> Option<Color32> {
        self.contains(Self::DRAGGING)
            .then_some(Color32::from_black_alpha(96))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct BoardViewModel {
    snapshot: BoardSnapshot,
    texture: TextureId,
    banner_text: String,
}

impl BoardViewModel {
    #[must_use]
    pub(crate) fn new(
        snapshot: BoardSnapshot,
        texture: TextureId,
        banner_text: String,
    ) -> Self {
        Self {
            snapshot,
            texture,
            banner_text,
        }
    }

    #[expect(clippy::cast_precision_loss)]
    fn board_side(&self) -> f32 {
        self.snapshot.geometry.board_side() as f32
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &BoardViewModel, action_queue: &mut ActionRequestQueue) {
    let side = vm.board_side();
    let scale = BoardTransform::fit_scale(ui.available_size(), side);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side * scale), Sense::hover());
    let transform = BoardTransform::new(response.rect.min, scale);

    ui.input(|i| queue_pointer_events(i, &transform, action_queue));

    painter.rect_filled(response.rect, 0.0, ui.visuals().extreme_bg_color);
    if !vm.snapshot.solved {
        draw_grid_lines(ui, &painter, response.rect, vm);
    }
    for tile in &vm.snapshot.tiles {
        draw_tile(ui, &painter, &transform, vm, tile);
    }
    if vm.snapshot.solved {
        banner::show(&painter, response.rect, &vm.banner_text, scale);
    }
}

fn queue_pointer_events(
    i: &InputState,
    transform: &BoardTransform,
    action_queue: &mut ActionRequestQueue,
) {
    for event in &i.events {
        if let Some(pointer_event) = transform.pointer_event(event) {
            action_queue.request(pointer_event);
        }
    }
}

fn draw_grid_lines(ui: &Ui, painter: &Painter, rect: Rect, vm: &BoardViewModel) {
    let cells = vm.snapshot.geometry.grid_size().get();
    let step = rect.width() / f32::from(cells);
    let stroke = Stroke::new(GRID_LINE_WIDTH, ui.visuals().weak_text_color());
    for i in 0..=cells {
        let offset = step * f32::from(i);
        painter.line_segment(
            [pos2(rect.min.x + offset, rect.min.y), pos2(rect.min.x + offset, rect.max.y)],
            stroke,
        );
        painter.line_segment(
            [pos2(rect.min.x, rect.min.y + offset), pos2(rect.max.x, rect.min.y + offset)],
            stroke,
        );
    }
}

fn draw_tile(
    ui: &Ui,
    painter: &Painter,
    transform: &BoardTransform,
    vm: &BoardViewModel,
    tile: &TileView,
) {
    let vs = TileVisualState::of(tile, vm.snapshot.solved);
    let rect = transform.rect(tile.rect);

    if let Some(shadow) = vs.shadow() {
        let offset = Vec2::splat(DRAG_SHADOW_OFFSET * transform.scale());
        painter.rect_filled(rect.translate(offset), 0.0, shadow);
    }

    let uv = transform::uv_rect(tile.source_region, vm.board_side());
    painter.image(vm.texture, rect, uv, Color32::WHITE);

    if let Some(border) = vs.border(ui, transform.scale()) {
        painter.rect_stroke(rect, 0.0, border, StrokeKind::Inside);
    }
}

#[cfg(test)]
mod tests {
    use jigsaw_core::{PixelPoint, PixelRect};
    use jigsaw_game::TileId;

    use super::*;

    fn tile(is_dragging: bool, is_home: bool) -> TileView {
        let rect = PixelRect::square(PixelPoint::ZERO, 100.0);
        TileView {
            id: TileId::new(0),
            rect,
            source_region: rect,
            is_dragging,
            is_home,
        }
    }

    #[test]
    fn visual_state_reflects_drag_home_and_win() {
        assert_eq!(
            TileVisualState::of(&tile(false, false), false),
            TileVisualState::empty()
        );
        assert_eq!(
            TileVisualState::of(&tile(true, false), false),
            TileVisualState::DRAGGING
        );
        assert_eq!(
            TileVisualState::of(&tile(false, true), false),
            TileVisualState::HOME
        );
        assert_eq!(
            TileVisualState::of(&tile(false, true), true),
            TileVisualState::SOLVED | TileVisualState::HOME
        );
    }

    #[test]
    fn home_tiles_get_thin_border_until_solved() {
        let ctx = eframe::egui::Context::default();
        let _ = ctx.run(eframe::egui::RawInput::default(), |ctx| {
            eframe::egui::CentralPanel::default().show(ctx, |ui| {
                let home = TileVisualState::HOME.border(ui, 1.0).unwrap();
                assert!((home.width - HOME_BORDER_WIDTH).abs() < f32::EPSILON);
                assert_eq!(home.color, HOME_BORDER_COLOR);

                let dragged = (TileVisualState::HOME | TileVisualState::DRAGGING)
                    .border(ui, 1.0)
                    .unwrap();
                assert!((dragged.width - DRAG_BORDER_WIDTH).abs() < f32::EPSILON);

                assert!(
                    (TileVisualState::HOME | TileVisualState::SOLVED)
                        .border(ui, 1.0)
                        .is_none()
                );
                assert!(TileVisualState::empty().border(ui, 1.0).is_none());
            });
        });
    }

    #[test]
    fn only_dragged_tile_casts_shadow() {
        assert!(TileVisualState::DRAGGING.shadow().is_some());
        assert!(TileVisualState::empty().shadow().is_none());
        assert!(TileVisualState::SOLVED.shadow().is_none());
    }
}
