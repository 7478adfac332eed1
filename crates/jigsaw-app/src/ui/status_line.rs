use eframe::egui::{Align, Label, RichText, Ui, Widget as _};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameStatus {
    InProgress { tiles_home: usize, tile_count: usize },
    Solved { tile_count: usize },
}

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel {
    status: GameStatus,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(status: GameStatus) -> Self {
        Self { status }
    }

    fn text(&self) -> String {
        match self.status {
            GameStatus::InProgress {
                tiles_home,
                tile_count,
            } => format!("Drag tiles into place ({tiles_home}/{tile_count} in place)"),
            GameStatus::Solved { tile_count } => {
                format!("Puzzle Completed! ({tile_count}/{tile_count} in place)")
            }
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel) {
    let color = match vm.status {
        GameStatus::InProgress { .. } => ui.visuals().text_color(),
        GameStatus::Solved { .. } => ui.visuals().warn_fg_color,
    };
    ui.horizontal(|ui| {
        Label::new(RichText::new(vm.text()).color(color))
            .halign(Align::Min)
            .ui(ui);
    });
}
