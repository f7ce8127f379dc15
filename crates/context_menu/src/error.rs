//! Error types for the context menu surface

use menu_state::MenuError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error("Unknown submenu: {0}")]
    UnknownSubmenu(String),

    #[error("Submenu already exists: {0}")]
    DuplicateSubmenu(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid menu config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
