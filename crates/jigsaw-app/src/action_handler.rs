use jigsaw_game::{EventOutcome, PointerEvent};

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

pub(crate) fn handle_all(app_state: &mut AppState, action_queue: &mut ActionRequestQueue) {
    for action in action_queue.take_all() {
        handle(app_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, action: Action) {
    match action {
        Action::Pointer(event) => handle_pointer(app_state, event),
        Action::NewGame => {
            if let Err(err) = app_state.start_new_game() {
                log::error!("failed to start a new game: {err}");
            }
        }
    }
}

fn handle_pointer(app_state: &mut AppState, event: PointerEvent) {
    let result = app_state.controller.handle(&mut app_state.board, event);
    match result {
        Ok(EventOutcome::Quit) => app_state.request_quit(),
        Ok(EventOutcome::Dropped(outcome)) if app_state.board.is_solved() => {
            log::debug!("solved with the drop of tile {}", outcome.tile);
        }
        Ok(_) => {}
        Err(err) => log::error!("pointer event {event:?} rejected: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use jigsaw_core::{BoardGeometry, GridSize, PixelPoint, Position};
    use jigsaw_game::Board;

    use super::*;

    fn app_state() -> AppState {
        let geometry = BoardGeometry::new(GridSize::new(2).unwrap(), 100).unwrap();
        let board = Board::with_placements(
            geometry,
            &[
                Position::new(1, 0),
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ],
        )
        .unwrap();
        AppState::new(board, (200, 200))
    }

    #[test]
    fn pointer_actions_drive_the_board() {
        let mut state = app_state();
        let mut queue = ActionRequestQueue::default();
        queue.request(PointerEvent::PointerDown(PixelPoint::new(150.0, 50.0)));
        queue.request(PointerEvent::PointerMove(PixelPoint::new(50.0, 50.0)));
        queue.request(PointerEvent::PointerUp(PixelPoint::new(50.0, 50.0)));

        handle_all(&mut state, &mut queue);

        assert!(state.board.is_solved());
        assert!(state.controller.state().is_idle());
        assert!(!state.quit_requested());
    }

    #[test]
    fn quit_sets_flag() {
        let mut state = app_state();
        handle(&mut state, Action::Pointer(PointerEvent::Quit));
        assert!(state.quit_requested());
    }

    #[test]
    fn new_game_reshuffles_and_resets_drag() {
        let mut state = app_state();
        handle(
            &mut state,
            Action::Pointer(PointerEvent::PointerDown(PixelPoint::new(150.0, 50.0))),
        );
        assert!(state.controller.state().is_dragging());

        handle(&mut state, Action::NewGame);

        assert!(state.controller.state().is_idle());
        assert_eq!(state.board.dragging_tile(), None);
        assert!(!state.board.is_solved());
        state.board.check_invariants().unwrap();
    }
}
