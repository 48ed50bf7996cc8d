// Crate-wide error type. Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Pixel access outside the current canvas dimensions. Band geometry is
    /// clamped before it reaches the buffers, so tool dispatch never raises
    /// this.
    #[error("pixel ({x}, {y}) outside {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// A color spec that is neither a recognized name nor a hex value.
    #[error("unrecognized color {0:?}")]
    InvalidColor(String),

    /// A pixel operation arrived before the first resize sized the buffers.
    #[error("canvas touched before the first resize")]
    NotInitialized,

    /// Creating the window failed
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed
    #[error("window update error: {0}")]
    WindowUpdate(String),
}
