use std::io;

use thiserror::Error;

use crate::Pos;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("configuration not found: {0}")]
    ConfigNotFound(String),

    #[error("cell ({}, {}) is outside the {width}x{height} board", .pos.x, .pos.y)]
    OutOfBounds { pos: Pos, width: u16, height: u16 },

    #[error("board dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("terminal too small ({width}x{height})")]
    TerminalTooSmall { width: u16, height: u16 },

    #[error("save file version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed save file: {0}")]
    Format(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
