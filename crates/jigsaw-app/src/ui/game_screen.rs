use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{board, status_line};
use crate::{
    action::ActionRequestQueue,
    ui::{board::BoardViewModel, status_line::StatusLineViewModel},
};

const STATUS_LINE_HEIGHT: f32 = 24.0;

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) board_vm: BoardViewModel,
    pub(crate) status_line_vm: StatusLineViewModel,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(board_vm: BoardViewModel, status_line_vm: StatusLineViewModel) -> Self {
        Self {
            board_vm,
            status_line_vm,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(STATUS_LINE_HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                board::show(ui, &vm.board_vm, action_queue);
            });
            strip.cell(|ui| {
                status_line::show(ui, &vm.status_line_vm);
            });
        });
}
