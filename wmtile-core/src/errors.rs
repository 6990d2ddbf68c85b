use crate::models::WindowHandle;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TileError>;

#[derive(Debug, Error)]
pub enum TileError {
    #[error("Parsing error: {0}")]
    SerdeParse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
    #[error("Window {0} not found in the current desktop")]
    WindowNotFound(WindowHandle),
    #[error("No desktop is marked active")]
    NoActiveDesktop,
    #[error("No active window in the current window list")]
    NoActiveWindow,
    #[error("Could not parse {0} output: {1}")]
    OutputParse(&'static str, String),
    #[error("{program} exited with {status}")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
    },
}
