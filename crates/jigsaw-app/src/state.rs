use jigsaw_game::{Board, InitializeError, InteractionController};

use crate::game_factory;

// AppState holds the single puzzle session. Nothing here outlives the process.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) board: Board,
    pub(crate) controller: InteractionController,
    image_size: (u32, u32),
    quit_requested: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(board: Board, image_size: (u32, u32)) -> Self {
        Self {
            board,
            controller: InteractionController::new(),
            image_size,
            quit_requested: false,
        }
    }

    /// Replaces the board with a freshly shuffled one for the same image.
    pub(crate) fn start_new_game(&mut self) -> Result<(), InitializeError> {
        let board = game_factory::new_board(self.board.geometry(), &self.image_size)?;
        self.board = board;
        self.controller = InteractionController::new();
        Ok(())
    }

    #[must_use]
    pub(crate) fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub(crate) fn request_quit(&mut self) {
        self.quit_requested = true;
    }
}
