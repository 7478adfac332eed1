use eframe::egui::{Event, PointerButton, Pos2, Rect, Vec2, pos2};
use jigsaw_core::{PixelPoint, PixelRect};
use jigsaw_game::PointerEvent;

const MIN_SCALE: f32 = 0.1;

/// Maps between board pixel space and egui screen space.
///
/// The board is drawn at `origin`, uniformly scaled by `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BoardTransform {
    origin: Pos2,
    scale: f32,
}

impl BoardTransform {
    #[must_use]
    pub(crate) fn new(origin: Pos2, scale: f32) -> Self {
        Self {
            origin,
            scale: scale.max(MIN_SCALE),
        }
    }

    /// Returns the scale at which a board of `board_side` pixels fits into
    /// `available`, never enlarging it.
    #[must_use]
    pub(crate) fn fit_scale(available: Vec2, board_side: f32) -> f32 {
        (available.min_elem() / board_side).clamp(MIN_SCALE, 1.0)
    }

    #[must_use]
    pub(crate) fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub(crate) fn to_board(&self, pos: Pos2) -> PixelPoint {
        let rel = (pos - self.origin) / self.scale;
        PixelPoint::new(rel.x, rel.y)
    }

    #[must_use]
    pub(crate) fn to_screen(&self, point: PixelPoint) -> Pos2 {
        self.origin + Vec2::new(point.x, point.y) * self.scale
    }

    #[must_use]
    pub(crate) fn rect(&self, rect: PixelRect) -> Rect {
        Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max()))
    }

    /// Converts a raw egui event into a board pointer event.
    ///
    /// Only the primary button and pointer motion are of interest.
    #[must_use]
    pub(crate) fn pointer_event(&self, event: &Event) -> Option<PointerEvent> {
        match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => {
                let point = self.to_board(*pos);
                Some(if *pressed {
                    PointerEvent::PointerDown(point)
                } else {
                    PointerEvent::PointerUp(point)
                })
            }
            Event::PointerMoved(pos) => Some(PointerEvent::PointerMove(self.to_board(*pos))),
            _ => None,
        }
    }
}

/// Returns the UV rectangle of `region` inside a square texture of `side` pixels.
#[must_use]
pub(crate) fn uv_rect(region: PixelRect, side: f32) -> Rect {
    let max = region.max();
    Rect::from_min_max(
        pos2(region.min.x / side, region.min.y / side),
        pos2(max.x / side, max.y / side),
    )
}
