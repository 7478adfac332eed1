use eframe::egui::{InputState, Key};
use jigsaw_game::PointerEvent;

use crate::action::{Action, ActionRequestQueue};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: Action) -> Self {
        Self { key, action }
    }
}

const SHORTCUTS: [Shortcut; 2] = [
    Shortcut::command(Key::N, Action::NewGame),
    Shortcut::command(Key::Q, Action::Pointer(PointerEvent::Quit)),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    if i.viewport().close_requested() {
        action_queue.request(PointerEvent::Quit);
        return;
    }

    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        if i.modifiers.command && i.key_pressed(shortcut.key) {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
