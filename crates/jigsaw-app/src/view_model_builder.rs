use eframe::egui::TextureId;

use crate::{
    state::AppState,
    ui::{
        board::BoardViewModel,
        game_screen::GameScreenViewModel,
        status_line::{GameStatus, StatusLineViewModel},
    },
};

pub(crate) fn build_game_screen_view_model(
    app_state: &AppState,
    texture: TextureId,
    banner_text: &str,
) -> GameScreenViewModel {
    let snapshot = app_state.board.snapshot();
    let status = build_status(snapshot.solved, snapshot.tiles_home, snapshot.tiles.len());
    GameScreenViewModel::new(
        BoardViewModel::new(snapshot, texture, banner_text.to_owned()),
        StatusLineViewModel::new(status),
    )
}

fn build_status(solved: bool, tiles_home: usize, tile_count: usize) -> GameStatus {
    if solved {
        GameStatus::Solved { tile_count }
    } else {
        GameStatus::InProgress {
            tiles_home,
            tile_count,
        }
    }
}
