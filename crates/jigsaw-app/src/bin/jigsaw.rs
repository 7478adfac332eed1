//! Jigsaw puzzle desktop application.

use std::process::ExitCode;

use jigsaw_app::{GameConfig, version};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    log::info!("starting jigsaw, version={}", version::build_version());

    match jigsaw_app::run(GameConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("jigsaw: {err}");
            ExitCode::FAILURE
        }
    }
}
