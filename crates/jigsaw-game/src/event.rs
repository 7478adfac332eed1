use jigsaw_core::PixelPoint;

/// A discrete input event, in board pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum PointerEvent {
    /// The primary button was pressed.
    PointerDown(PixelPoint),
    /// The primary button was released.
    PointerUp(PixelPoint),
    /// The pointer moved.
    PointerMove(PixelPoint),
    /// The session should end now.
    Quit,
}
