use core::fmt::Debug;
use core::hash::Hash;
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use serde::Serialize;
use sweeper_core::{Board, CellCount, Coord, Coord2, MarkOutcome, Outcome, TileView};

use crate::*;

/// What a player action produced, everything a renderer needs for one update.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Turn {
    pub outcome: Outcome,
    /// Whether the action changed anything on the board.
    pub changed: bool,
    pub rows: Coord,
    pub cols: Coord,
    pub mines_left: isize,
    pub elapsed_secs: u32,
    pub tiles: Vec<TileView>,
}

impl Turn {
    fn from_board(board: &Board, changed: bool) -> Self {
        Self {
            outcome: board.outcome(),
            changed,
            rows: board.rows(),
            cols: board.cols(),
            mines_left: board.mines_left(),
            elapsed_secs: board.elapsed_secs(),
            tiles: board.snapshot(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.revealed).count() as CellCount
    }
}

/// One active game per player, keyed by whatever identity the caller uses.
#[derive(Debug)]
pub struct SessionStore<K> {
    settings: Settings,
    sessions: HashMap<K, Board>,
    games_started: u64,
}

impl<K: Eq + Hash + Debug> SessionStore<K> {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            sessions: HashMap::new(),
            games_started: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Creates a freshly generated board for `player`.
    pub fn start(&mut self, player: K) -> Result<Turn> {
        let config = self.settings.game_config();
        let seed = self.settings.game_seed(self.games_started);

        let vacant = match self.sessions.entry(player) {
            Entry::Occupied(entry) => {
                log::debug!("{:?} already has a game in progress", entry.key());
                return Err(SessionError::AlreadyPlaying);
            }
            Entry::Vacant(entry) => entry,
        };

        let board = match seed {
            Some(seed) => Board::with_seed(config, seed),
            None => Board::from_config(config),
        };
        self.games_started += 1;
        log::info!(
            "{:?} started game #{} on {:?}",
            vacant.key(),
            self.games_started,
            config
        );

        let board = vacant.insert(board);
        Ok(Turn::from_board(board, true))
    }

    /// Reveals a tile, removing the session once the game is won or lost.
    pub fn reveal(&mut self, player: &K, coords: Coord2) -> Result<Turn> {
        let board = self
            .sessions
            .get_mut(player)
            .ok_or(SessionError::NoActiveGame)?;

        let before = board.snapshot();
        let outcome = board.reveal(coords)?;
        let changed = before != board.snapshot();
        let turn = Turn::from_board(board, changed);

        if outcome.is_finished() {
            log::info!(
                "{:?} finished with {:?} after {}s",
                player,
                outcome,
                turn.elapsed_secs
            );
            self.sessions.remove(player);
        }
        Ok(turn)
    }

    pub fn toggle_flag(&mut self, player: &K, coords: Coord2) -> Result<Turn> {
        let board = self
            .sessions
            .get_mut(player)
            .ok_or(SessionError::NoActiveGame)?;

        let mark = board.toggle_flag(coords)?;
        Ok(Turn::from_board(board, mark == MarkOutcome::Changed))
    }

    /// Current state of the player's game without acting on it.
    pub fn current(&self, player: &K) -> Result<Turn> {
        self.sessions
            .get(player)
            .map(|board| Turn::from_board(board, false))
            .ok_or(SessionError::NoActiveGame)
    }

    /// Drops the player's game, returning its board.
    pub fn abandon(&mut self, player: &K) -> Result<Board> {
        let board = self
            .sessions
            .remove(player)
            .ok_or(SessionError::NoActiveGame)?;
        log::info!("{:?} abandoned their game", player);
        Ok(board)
    }

    pub fn contains(&self, player: &K) -> bool {
        self.sessions.contains_key(player)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl<K: Eq + Hash + Debug> Default for SessionStore<K> {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
