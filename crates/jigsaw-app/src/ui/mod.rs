pub(crate) mod banner;
pub(crate) mod board;
pub(crate) mod game_screen;
pub(crate) mod input;
pub(crate) mod status_line;
pub(crate) mod transform;
