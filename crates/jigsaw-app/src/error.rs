use derive_more::{Display, Error, From};
use jigsaw_core::GeometryError;
use jigsaw_game::{InitializeError, InvalidAssetError};

/// Fatal errors raised before the first frame is shown.
#[derive(Debug, Display, Error, From)]
pub enum StartupError {
    /// The configured board geometry is unusable.
    #[display("invalid board configuration: {_0}")]
    Geometry(GeometryError),
    /// The puzzle image could not be loaded.
    #[display("cannot load puzzle image: {_0}")]
    Asset(InvalidAssetError),
    /// The board could not be built from the image.
    #[display("cannot set up the puzzle: {_0}")]
    Initialize(InitializeError),
    /// The window or graphics backend failed.
    #[display("window error: {_0}")]
    Window(eframe::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_cause() {
        let err = StartupError::from(InvalidAssetError::Empty {
            width: 0,
            height: 0,
        });
        assert!(matches!(err, StartupError::Asset(InvalidAssetError::Empty { .. })));
        assert!(err.to_string().starts_with("cannot load puzzle image: "));

        let err = StartupError::from(GeometryError::ZeroPieceSize);
        assert!(err.to_string().starts_with("invalid board configuration: "));
    }
}
