use std::mem;

use jigsaw_game::PointerEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Action {
    Pointer(PointerEvent),
    NewGame,
}

impl From<PointerEvent> for Action {
    fn from(event: PointerEvent) -> Self {
        Action::Pointer(event)
    }
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: impl Into<Action>) {
        self.actions.push(action.into());
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use jigsaw_core::PixelPoint;

    use super::*;

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(PointerEvent::PointerDown(PixelPoint::ZERO));
        queue.request(Action::NewGame);

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(
            drained[0],
            Action::Pointer(PointerEvent::PointerDown(_))
        ));
        assert!(matches!(drained[1], Action::NewGame));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
