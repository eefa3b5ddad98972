use serde::{Deserialize, Serialize};

use crate::*;

/// State of a single grid cell, owned by the [`Board`].
///
/// The coordinates are fixed at creation; everything else is mutated only by the board's
/// generation pass and by player actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    row: Coord,
    col: Coord,
    has_mine: bool,
    has_flag: bool,
    revealed: bool,
    adjacent_mines: u8,
}

impl Tile {
    pub const fn new((row, col): Coord2) -> Self {
        Self {
            row,
            col,
            has_mine: false,
            has_flag: false,
            revealed: false,
            adjacent_mines: 0,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn col(&self) -> Coord {
        self.col
    }

    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn has_flag(&self) -> bool {
        self.has_flag
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Number of mines among the neighbors, meaningless for mine tiles.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// Whether a flood-fill continues through this tile once it is revealed.
    pub const fn is_zero(&self) -> bool {
        !self.has_mine && self.adjacent_mines == 0
    }

    /// Read-only view handed to renderers, hiding what the player must not see yet.
    pub const fn view(&self, disclose: bool) -> TileView {
        let visible = self.revealed || disclose;
        TileView {
            row: self.row,
            col: self.col,
            revealed: self.revealed,
            flagged: self.has_flag,
            mine: if visible { Some(self.has_mine) } else { None },
            adjacent_mines: if self.revealed && !self.has_mine && self.adjacent_mines > 0 {
                Some(self.adjacent_mines)
            } else {
                None
            },
        }
    }

    pub(crate) fn reset(&mut self) {
        self.has_mine = false;
        self.has_flag = false;
        self.revealed = false;
        self.adjacent_mines = 0;
    }

    pub(crate) fn arm(&mut self, adjacent_mines: Option<u8>) {
        match adjacent_mines {
            None => {
                self.has_mine = true;
                self.adjacent_mines = 0;
            }
            Some(count) => {
                self.has_mine = false;
                self.adjacent_mines = count;
            }
        }
    }

    pub(crate) fn toggle_flag(&mut self) -> MarkOutcome {
        if self.revealed {
            return MarkOutcome::NoChange;
        }
        self.has_flag = !self.has_flag;
        MarkOutcome::Changed
    }

    /// One-way transition, returns whether the tile was hidden before.
    pub(crate) fn reveal(&mut self) -> bool {
        !core::mem::replace(&mut self.revealed, true)
    }
}

/// Player-visible snapshot of one tile.
///
/// `mine` is only `Some` when the tile is revealed or the game has ended, `adjacent_mines`
/// only when the tile is revealed and has a nonzero count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub row: Coord,
    pub col: Coord,
    pub revealed: bool,
    pub flagged: bool,
    pub mine: Option<bool>,
    pub adjacent_mines: Option<u8>,
}

impl TileView {
    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }
}
