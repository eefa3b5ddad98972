use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {rows}x{cols} board cannot hold {mines} mines")]
    InvalidConfiguration {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    #[error("Invalid coordinates {0:?}")]
    InvalidCoordinate(Coord2),
}

pub type Result<T> = core::result::Result<T, GameError>;
