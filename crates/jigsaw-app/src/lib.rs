//! Desktop driver for the jigsaw puzzle.
//!
//! Loads the puzzle image, builds a shuffled board and runs the eframe event
//! loop until the player quits.
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use eframe::{NativeOptions, egui::ViewportBuilder};

pub use self::{app::JigsawApp, config::GameConfig, error::StartupError};
use self::asset::PuzzleImage;

mod action;
mod action_handler;
mod app;
mod asset;
mod config;
mod error;
mod game_factory;
mod render_context;
mod state;
mod ui;
pub mod version;
mod view_model_builder;

const APP_ID: &str = "io.github.jigsaw";

/// Loads the configured image and runs the game until the window closes.
pub fn run(config: GameConfig) -> Result<(), StartupError> {
    let geometry = config.geometry()?;
    let image = PuzzleImage::load(&config.image_path, geometry)?;
    let board = game_factory::new_board(geometry, &image)?;

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_title(config.title.clone())
            .with_resizable(true)
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(JigsawApp::new(cc, &config, &image, board)))),
    )?;
    Ok(())
}
