//! Jigsaw desktop application.
//!
//! # Design Notes
//! - One puzzle session per process; the board never outlives the window.
//! - Pointer input flows through the action queue into the interaction
//!   controller, and the presenter only reads a board snapshot.
//! - The puzzle texture is owned by a [`RenderContext`] and released when the
//!   player quits.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, ViewportCommand},
};
use jigsaw_game::{Board, ImageSource as _};

use crate::{
    action::ActionRequestQueue, action_handler, asset::PuzzleImage, config::GameConfig,
    render_context::RenderContext, state::AppState, ui, view_model_builder,
};

/// The eframe application driving one puzzle session.
#[derive(Debug)]
pub struct JigsawApp {
    app_state: AppState,
    render_context: Option<RenderContext>,
    banner_text: String,
}

impl JigsawApp {
    pub(crate) fn new(
        cc: &CreationContext<'_>,
        config: &GameConfig,
        image: &PuzzleImage,
        board: Board,
    ) -> Self {
        let render_context = RenderContext::create(&cc.egui_ctx, image);
        Self {
            app_state: AppState::new(board, image.dimensions()),
            render_context: Some(render_context),
            banner_text: config.banner_text.clone(),
        }
    }

    fn shutdown(&mut self, ctx: &Context) {
        if let Some(render_context) = self.render_context.take() {
            log::info!("quitting");
            render_context.shutdown();
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

impl App for JigsawApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
        action_handler::handle_all(&mut self.app_state, &mut action_queue);

        if let Some(render_context) = &self.render_context {
            let game_screen_vm = view_model_builder::build_game_screen_view_model(
                &self.app_state,
                render_context.texture_id(),
                &self.banner_text,
            );
            CentralPanel::default().show(ctx, |ui| {
                ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
            });
        }

        action_handler::handle_all(&mut self.app_state, &mut action_queue);

        if self.app_state.quit_requested() {
            self.shutdown(ctx);
        }
    }
}
