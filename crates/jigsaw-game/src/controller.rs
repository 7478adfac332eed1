use crate::{Board, DropOutcome, InvariantViolation, PointerEvent, TileId};

/// Interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum ControllerState {
    /// No tile is held.
    #[default]
    Idle,
    /// A tile is held and follows the pointer.
    Dragging {
        /// The held tile.
        tile: TileId,
    },
}

/// What a handled event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EventOutcome {
    /// The event had no effect in the current state.
    Ignored,
    /// A tile was picked up.
    PickedUp(TileId),
    /// The held tile moved.
    Moved(TileId),
    /// The held tile was dropped.
    Dropped(DropOutcome),
    /// The session should end.
    Quit,
}

/// Translates pointer events into board operations.
///
/// Only one tile can be held at a time. Once the board is solved, pointer
/// presses are ignored so the finished picture stays put.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: ControllerState,
}

impl InteractionController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Applies one event to `board`.
    ///
    /// | state      | event        | effect                                  |
    /// |------------|--------------|-----------------------------------------|
    /// | `Idle`     | pointer down | pick up the tile under the pointer      |
    /// | `Dragging` | pointer move | move the held tile                      |
    /// | `Dragging` | pointer up   | drop the held tile, back to `Idle`      |
    /// | any        | quit         | report [`EventOutcome::Quit`]           |
    ///
    /// Everything else is ignored.
    ///
    /// # Errors
    ///
    /// Propagates [`InvariantViolation`] from the board. The controller returns
    /// to `Idle` after a failed drop.
    pub fn handle(
        &mut self,
        board: &mut Board,
        event: PointerEvent,
    ) -> Result<EventOutcome, InvariantViolation> {
        match (self.state, event) {
            (_, PointerEvent::Quit) => Ok(EventOutcome::Quit),
            (ControllerState::Idle, PointerEvent::PointerDown(point)) => {
                if board.is_solved() {
                    return Ok(EventOutcome::Ignored);
                }
                let Some(tile) = board.tile_at(point) else {
                    return Ok(EventOutcome::Ignored);
                };
                board.begin_drag(tile)?;
                self.state = ControllerState::Dragging { tile };
                Ok(EventOutcome::PickedUp(tile))
            }
            (ControllerState::Dragging { tile }, PointerEvent::PointerMove(point)) => {
                board.update_drag_position(tile, point)?;
                Ok(EventOutcome::Moved(tile))
            }
            (ControllerState::Dragging { tile }, PointerEvent::PointerUp(_)) => {
                self.state = ControllerState::Idle;
                let outcome = board.end_drag(tile)?;
                Ok(EventOutcome::Dropped(outcome))
            }
            (
                ControllerState::Idle,
                PointerEvent::PointerMove(_) | PointerEvent::PointerUp(_),
            )
            | (ControllerState::Dragging { .. }, PointerEvent::PointerDown(_)) => {
                Ok(EventOutcome::Ignored)
            }
        }
    }
}
