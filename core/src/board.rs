use chrono::prelude::*;
use ndarray::Array2;
use std::collections::VecDeque;

use crate::*;

/// Full regenerations tried on the first reveal before placing mines around the start tile.
pub const MAX_REGENERATIONS: u32 = 16;

/// A single game: the tile grid plus the lifecycle flags driven by player actions.
///
/// Every constructor runs a generation pass, so adjacency counts are always consistent with
/// the mine layout. The board does no locking; callers serialize actions per board.
#[derive(Clone, Debug)]
pub struct Board<G = RandomGenerator> {
    config: GameConfig,
    tiles: Array2<Tile>,
    generator: G,
    started: bool,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
    generations: u32,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl Board<RandomGenerator> {
    /// Builds and generates a board from a raw `(rows, cols, mines)` triple.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = GameConfig::new(rows, cols, mines)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self::with_generator(config, RandomGenerator::from_entropy())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomGenerator::new(seed))
    }
}

impl<G: MineGenerator> Board<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Self {
        let mut board = Self::allocate(config, generator);
        board.generate();
        board
    }

    /// Installs a fixed layout instead of generating one; `generator` is only used if the
    /// first reveal has to regenerate.
    pub fn from_layout(layout: &MineLayout, generator: G) -> Result<Self> {
        let config = layout.game_config()?;
        let mut board = Self::allocate(config, generator);
        board.apply_layout(layout);
        Ok(board)
    }

    fn allocate(config: GameConfig, generator: G) -> Self {
        let (rows, cols) = config.size();
        let shape = (usize::from(rows), usize::from(cols));
        let tiles =
            Array2::from_shape_fn(shape, |(row, col)| Tile::new((row as Coord, col as Coord)));
        Self {
            config,
            tiles,
            generator,
            started: false,
            outcome: Outcome::Ongoing,
            triggered_mine: None,
            generations: 0,
            started_at: None,
            ended_at: None,
        }
    }

    /// Clears every tile, places a fresh random layout and recomputes adjacency.
    ///
    /// Only touches tiles: `started` and the outcome are left as they are.
    pub fn generate(&mut self) {
        let layout = self.generator.generate(self.config);
        self.apply_layout(&layout);
    }

    fn apply_layout(&mut self, layout: &MineLayout) {
        debug_assert_eq!(layout.size(), self.config.size());
        debug_assert_eq!(layout.mine_count(), self.config.mines());

        for tile in self.tiles.iter_mut() {
            tile.reset();
            let coords = tile.coords();
            if layout.contains_mine(coords) {
                tile.arm(None);
            } else {
                tile.arm(Some(layout.adjacent_mine_count(coords)));
            }
        }
        self.generations += 1;
        log::debug!(
            "Generated layout #{} for {:?}",
            self.generations,
            self.config
        );
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<Outcome> {
        let coords = self.config.validate_coords(coords)?;

        if self.outcome.is_finished() {
            return Ok(self.outcome);
        }

        let tile = self.tiles[coords.to_nd_index()];
        if tile.has_flag() || tile.is_revealed() {
            return Ok(self.outcome);
        }

        if !self.started {
            self.secure_first_reveal(coords);
            self.mark_started();
        }

        let tile = self.tiles[coords.to_nd_index()];
        if tile.has_mine() {
            log::debug!("Mine hit at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.disclose_all();
            self.end_game(Outcome::Lost);
            return Ok(self.outcome);
        }

        if tile.adjacent_mines() == 0 {
            let opened = self.flood_reveal(coords);
            log::debug!("Flood opened {} tiles from {:?}", opened, coords);
        } else {
            self.tiles[coords.to_nd_index()].reveal();
            log::debug!(
                "Opened tile at {:?}, mine count: {}",
                coords,
                tile.adjacent_mines()
            );
        }

        if self.check_win() {
            self.end_game(Outcome::Won);
        }
        Ok(self.outcome)
    }

    /// Regenerates until the tile at `coords` is a zero tile, or just mine-free when no
    /// layout of this config can make it zero. After [`MAX_REGENERATIONS`] misses the layout
    /// is placed around the tile directly.
    fn secure_first_reveal(&mut self, coords: Coord2) {
        let mut zone = vec![coords];
        zone.extend(self.tiles.iter_neighbors(coords));
        let zero_possible = usize::from(self.config.safe_cells()) >= zone.len();
        if !zero_possible {
            log::warn!(
                "Cannot make start tile {:?} zero with {:?}, fallback to simple safe",
                coords,
                self.config
            );
            zone.truncate(1);
        }
        let acceptable = |tile: Tile| {
            if zero_possible {
                tile.is_zero()
            } else {
                !tile.has_mine()
            }
        };

        let mut regenerations = 0u32;
        while !acceptable(self.tiles[coords.to_nd_index()]) {
            if regenerations == MAX_REGENERATIONS {
                log::debug!("Placing mines around start tile {:?}", coords);
                let layout = self.generator.generate_excluding(self.config, &zone);
                self.apply_layout(&layout);
                regenerations += 1;
                break;
            }
            self.generate();
            regenerations += 1;
        }

        if regenerations > 0 {
            log::debug!(
                "Regenerated {} times to secure start tile {:?}",
                regenerations,
                coords
            );
        }
    }

    /// Reveals the zero region connected to `start` plus its numbered border, returning how
    /// many tiles were opened. Flagged tiles are barriers and stay hidden.
    fn flood_reveal(&mut self, start: Coord2) -> usize {
        let mut opened = 0;
        if self.tiles[start.to_nd_index()].reveal() {
            opened += 1;
        }

        // revealed tiles double as the visited set
        let mut to_visit = VecDeque::from([start]);
        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in self.tiles.iter_neighbors(visit_coords) {
                let tile = &mut self.tiles[pos.to_nd_index()];
                if tile.has_flag() {
                    log::trace!("Skipping flagged tile at {:?}", pos);
                    continue;
                }
                if !tile.reveal() {
                    continue;
                }
                opened += 1;
                log::trace!(
                    "Flood opened tile at {:?}, mine count: {}",
                    pos,
                    tile.adjacent_mines()
                );

                if tile.is_zero() {
                    to_visit.push_back(pos);
                }
            }
        }
        opened
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.config.validate_coords(coords)?;

        if self.outcome.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        Ok(self.tiles[coords.to_nd_index()].toggle_flag())
    }

    /// True iff every mine-free tile is revealed, flags on mines are irrelevant.
    pub fn check_win(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| tile.has_mine() || tile.is_revealed())
    }

    fn disclose_all(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.reveal();
        }
    }

    fn mark_started(&mut self) {
        if !self.started {
            let now = Utc::now();
            log::debug!("started at {}", now);
            self.started = true;
            self.started_at = Some(now);
        }
    }

    fn end_game(&mut self, outcome: Outcome) {
        if self.outcome.is_finished() {
            return;
        }
        let now = Utc::now();
        log::debug!("ended at {} with {:?}", now, outcome);
        self.outcome = outcome;
        self.ended_at = Some(now);
    }
}

impl<G> Board<G> {
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether a mine was revealed.
    pub fn is_ended(&self) -> bool {
        matches!(self.outcome, Outcome::Lost)
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Number of generation passes so far, including the initial one.
    pub fn generations(&self) -> u32 {
        self.generations
    }

    pub fn tile(&self, coords: Coord2) -> Result<&Tile> {
        let coords = self.config.validate_coords(coords)?;
        Ok(&self.tiles[coords.to_nd_index()])
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn flag_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.has_flag()).count() as CellCount
    }

    /// How many mines have not been flagged yet, negative with too many flags.
    pub fn mines_left(&self) -> isize {
        (self.config.mines() as isize) - (self.flag_count() as isize)
    }

    /// Player-visible state of every tile in row-major order.
    pub fn snapshot(&self) -> Vec<TileView> {
        let disclose = self.outcome.is_finished();
        self.tiles.iter().map(|tile| tile.view(disclose)).collect()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// How many seconds have passed since game started, 0 if it hasn't started
    pub fn elapsed_secs(&self) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or_else(Utc::now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, VecDeque};

    fn layout(size: Coord2, mines: &[Coord2]) -> MineLayout {
        MineLayout::from_mine_coords(size, mines).unwrap()
    }

    fn fixed_board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_layout(&layout(size, mines), RandomGenerator::new(0)).unwrap()
    }

    fn revealed(board: &Board<impl MineGenerator>) -> BTreeSet<Coord2> {
        board
            .tiles()
            .filter(|tile| tile.is_revealed())
            .map(|tile| tile.coords())
            .collect()
    }

    /// Hands out prepared layouts in order, repeating the last one.
    struct Scripted {
        layouts: VecDeque<MineLayout>,
        calls: usize,
        excluded: Vec<Coord2>,
    }

    impl Scripted {
        fn new(layouts: impl IntoIterator<Item = MineLayout>) -> Self {
            Self {
                layouts: layouts.into_iter().collect(),
                calls: 0,
                excluded: Vec::new(),
            }
        }
    }

    impl MineGenerator for Scripted {
        fn generate_excluding(&mut self, _config: GameConfig, excluded: &[Coord2]) -> MineLayout {
            self.calls += 1;
            self.excluded = excluded.to_vec();
            if self.layouts.len() > 1 {
                self.layouts.pop_front().unwrap()
            } else {
                self.layouts.front().cloned().unwrap()
            }
        }
    }

    /// Zero region connected to `start` plus its border, computed from tile data alone.
    fn expected_region(board: &Board, start: Coord2) -> BTreeSet<Coord2> {
        let mut region = BTreeSet::from([start]);
        let mut stack = vec![start];
        while let Some(coords) = stack.pop() {
            for pos in NeighborIter::new(coords, (board.rows(), board.cols())) {
                let tile = board.tile(pos).unwrap();
                if tile.has_flag() || !region.insert(pos) {
                    continue;
                }
                if tile.is_zero() {
                    stack.push(pos);
                }
            }
        }
        region
    }

    #[test]
    fn new_rejects_invalid_configuration() {
        assert!(matches!(
            Board::new(0, 9, 10),
            Err(GameError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Board::new(9, 9, 81),
            Err(GameError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Board::new(9, 9, 0),
            Err(GameError::InvalidConfiguration { .. })
        ));
        assert!(Board::new(9, 9, 80).is_ok());
    }

    #[test]
    fn beginner_board_places_ten_mines_with_consistent_counts() {
        let config = GameConfig::new(9, 9, 10).unwrap();
        let mut board = Board::with_seed(config, 1234);
        board.generate();

        let mines: Vec<_> = board.tiles().filter(|tile| tile.has_mine()).collect();
        assert_eq!(mines.len(), 10);

        let safe: Vec<_> = board.tiles().filter(|tile| !tile.has_mine()).collect();
        assert_eq!(safe.len(), 71);
        for tile in safe {
            let expected = NeighborIter::new(tile.coords(), (9, 9))
                .filter(|&pos| board.tile(pos).unwrap().has_mine())
                .count();
            assert!(tile.adjacent_mines() <= 8);
            assert_eq!(usize::from(tile.adjacent_mines()), expected);
        }
    }

    #[test]
    fn generate_resets_tiles_and_keeps_mine_count() {
        let config = GameConfig::new(16, 30, 99).unwrap();
        let mut board = Board::with_seed(config, 99);

        for _ in 0..10 {
            board.toggle_flag((0, 0)).unwrap();
            board.generate();
            assert_eq!(board.tiles().filter(|tile| tile.has_mine()).count(), 99);
            assert_eq!(board.flag_count(), 0);
            assert!(board.tiles().all(|tile| !tile.is_revealed()));
        }
        assert_eq!(board.generations(), 11);
        assert!(!board.is_started());
    }

    #[test]
    fn first_reveal_is_always_a_zero_tile() {
        let config = GameConfig::new(9, 9, 10).unwrap();
        for seed in 0..50 {
            let coords = ((seed % 9) as Coord, (seed * 7 % 9) as Coord);
            let mut board = Board::with_seed(config, seed);

            let outcome = board.reveal(coords).unwrap();

            assert_ne!(outcome, Outcome::Lost);
            let tile = board.tile(coords).unwrap();
            assert!(tile.is_revealed());
            assert!(tile.is_zero());
            assert!(board.is_started());
        }
    }

    #[test]
    fn first_reveal_regenerates_until_zero() {
        let config_size = (3, 3);
        let on_target = layout(config_size, &[(0, 0)]);
        let next_to_target = layout(config_size, &[(1, 1)]);
        let far_away = layout(config_size, &[(2, 2)]);
        let generator = Scripted::new([on_target, next_to_target, far_away]);
        let config = GameConfig::new(3, 3, 1).unwrap();
        let mut board = Board::with_generator(config, generator);

        let outcome = board.reveal((0, 0)).unwrap();

        assert_eq!(board.generations(), 3);
        assert_eq!(board.generator.calls, 3);
        assert!(board.is_started());
        assert_eq!(outcome, Outcome::Won);
        assert!(board.tile((2, 2)).unwrap().has_mine());
    }

    #[test]
    fn first_reveal_places_mines_around_start_after_misses() {
        let config_size = (3, 3);
        let misses = (0..=MAX_REGENERATIONS).map(|_| layout(config_size, &[(1, 1)]));
        let clear = layout(config_size, &[(2, 2)]);
        let generator = Scripted::new(misses.chain([clear]));
        let config = GameConfig::new(3, 3, 1).unwrap();
        let mut board = Board::with_generator(config, generator);

        let outcome = board.reveal((0, 0)).unwrap();

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(board.generations(), MAX_REGENERATIONS + 2);
        let excluded: BTreeSet<_> = board.generator.excluded.iter().copied().collect();
        assert_eq!(excluded, BTreeSet::from([(0, 0), (0, 1), (1, 0), (1, 1)]));
    }

    #[test]
    fn first_reveal_is_zero_on_dense_board() {
        // only the 3x3 block around the center can be mine-free
        let config = GameConfig::new(6, 6, 27).unwrap();
        for seed in 0..10 {
            let mut board = Board::with_seed(config, seed);

            let outcome = board.reveal((2, 2)).unwrap();

            assert_eq!(outcome, Outcome::Won);
            assert!(board.tile((2, 2)).unwrap().is_zero());
            assert_eq!(board.tiles().filter(|tile| tile.has_mine()).count(), 27);
            assert!(board.generations() <= MAX_REGENERATIONS + 2);
        }
    }

    #[test]
    fn first_reveal_falls_back_to_safe_on_crowded_board() {
        // a 3x3 board with 8 mines can never have a zero tile
        let config = GameConfig::new(3, 3, 8).unwrap();
        let mut board = Board::with_seed(config, 5);

        let outcome = board.reveal((1, 1)).unwrap();

        assert_eq!(outcome, Outcome::Won);
        let tile = board.tile((1, 1)).unwrap();
        assert!(!tile.has_mine());
        assert_eq!(tile.adjacent_mines(), 8);
    }

    #[test]
    fn flood_fill_stops_at_numbered_border() {
        let wall = [(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)];
        let mut board = fixed_board((5, 5), &wall);

        let outcome = board.reveal((2, 0)).unwrap();

        assert_eq!(outcome, Outcome::Ongoing);
        let expected: BTreeSet<Coord2> = (0..5).flat_map(|row| [(row, 0), (row, 1)]).collect();
        assert_eq!(revealed(&board), expected);
        assert_eq!(board.generations(), 1);
    }

    #[test]
    fn flood_fill_matches_connected_region_on_random_boards() {
        let config = GameConfig::new(16, 16, 40).unwrap();
        for seed in 0..20 {
            let mut board = Board::with_seed(config, seed);
            board.reveal((8, 8)).unwrap();
            let first = revealed(&board);
            assert_eq!(first, expected_region(&board, (8, 8)));

            // open another zero tile outside the first region, if any
            let other = board
                .tiles()
                .find(|tile| tile.is_zero() && !tile.is_revealed())
                .map(|tile| tile.coords());
            if let Some(other) = other {
                let region = expected_region(&board, other);
                board.reveal(other).unwrap();
                let all: BTreeSet<_> = first.union(&region).copied().collect();
                assert_eq!(revealed(&board), all);
            }
        }
    }

    #[test]
    fn flags_block_cascade() {
        let wall = [(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)];
        let mut board = fixed_board((5, 5), &wall);
        assert_eq!(board.toggle_flag((2, 0)).unwrap(), MarkOutcome::Changed);

        board.reveal((0, 0)).unwrap();

        let expected = BTreeSet::from([(0, 0), (0, 1), (1, 0), (1, 1), (2, 1)]);
        assert_eq!(revealed(&board), expected);
        let flagged = board.tile((2, 0)).unwrap();
        assert!(flagged.has_flag());
        assert!(!flagged.is_revealed());
    }

    #[test]
    fn reveal_on_flagged_tile_is_noop() {
        let wall = [(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)];
        let mut board = fixed_board((5, 5), &wall);
        board.toggle_flag((0, 0)).unwrap();

        assert_eq!(board.reveal((0, 0)).unwrap(), Outcome::Ongoing);
        assert!(!board.is_started());
        assert!(revealed(&board).is_empty());

        board.toggle_flag((0, 0)).unwrap();
        board.toggle_flag((3, 2)).unwrap();
        board.reveal((0, 0)).unwrap();
        assert!(board.is_started());

        assert_eq!(board.reveal((3, 2)).unwrap(), Outcome::Ongoing);
        let flagged = board.tile((3, 2)).unwrap();
        assert!(flagged.has_flag());
        assert!(!flagged.is_revealed());
    }

    #[test]
    fn revealing_mine_after_start_loses_and_discloses_board() {
        let mut board = fixed_board((5, 5), &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
        assert_eq!(board.reveal((0, 0)).unwrap(), Outcome::Ongoing);
        board.toggle_flag((4, 4)).unwrap();
        board.toggle_flag((1, 2)).unwrap();

        let outcome = board.reveal((3, 2)).unwrap();

        assert_eq!(outcome, Outcome::Lost);
        assert!(board.is_ended());
        assert_eq!(board.triggered_mine(), Some((3, 2)));
        assert!(board.tiles().all(|tile| tile.is_revealed()));
        assert!(board.tile((4, 4)).unwrap().is_revealed());
        assert!(board.tile((1, 2)).unwrap().is_revealed());
        assert!(board.snapshot().iter().all(|view| view.revealed && view.mine.is_some()));
        assert!(board.ended_at().is_some());

        assert_eq!(board.reveal((4, 4)).unwrap(), Outcome::Lost);
        assert_eq!(board.toggle_flag((4, 4)).unwrap(), MarkOutcome::NoChange);
    }

    #[test]
    fn revealing_every_safe_tile_wins() {
        let config = GameConfig::new(9, 9, 10).unwrap();
        let mut board = Board::with_seed(config, 77);
        board.toggle_flag((8, 8)).unwrap();
        board.reveal((4, 4)).unwrap();

        let mut last = board.outcome();
        while !board.is_finished() {
            let next = board
                .snapshot()
                .into_iter()
                .find(|view| {
                    !view.revealed && !board.tile(view.coords()).unwrap().has_mine()
                })
                .map(|view| view.coords())
                .unwrap();
            if board.tile(next).unwrap().has_flag() {
                board.toggle_flag(next).unwrap();
            }
            last = board.reveal(next).unwrap();
        }

        assert_eq!(last, Outcome::Won);
        assert!(board.check_win());
        assert!(!board.is_ended());
        assert!(board.tiles().filter(|tile| tile.has_mine()).all(|tile| !tile.is_revealed()));
    }

    #[test]
    fn win_ignores_flags_on_mines() {
        let mut board = fixed_board((3, 3), &[(2, 2)]);
        board.toggle_flag((2, 2)).unwrap();

        assert_eq!(board.reveal((0, 0)).unwrap(), Outcome::Won);
        assert!(board.tile((2, 2)).unwrap().has_flag());
    }

    #[test]
    fn toggle_flag_twice_restores_state() {
        let mut board = fixed_board((4, 4), &[(3, 3)]);

        board.toggle_flag((1, 2)).unwrap();
        assert!(board.tile((1, 2)).unwrap().has_flag());
        assert_eq!(board.mines_left(), 0);
        board.toggle_flag((1, 2)).unwrap();
        assert!(!board.tile((1, 2)).unwrap().has_flag());
        assert_eq!(board.mines_left(), 1);
        assert!(!board.is_started());
    }

    #[test]
    fn toggle_flag_on_revealed_tile_is_noop() {
        let wall = [(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)];
        let mut board = fixed_board((5, 5), &wall);
        board.reveal((0, 0)).unwrap();

        assert_eq!(board.toggle_flag((1, 1)).unwrap(), MarkOutcome::NoChange);
        assert_eq!(board.flag_count(), 0);
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let mut board = fixed_board((4, 6), &[(3, 5)]);

        assert_eq!(board.reveal((4, 0)), Err(GameError::InvalidCoordinate((4, 0))));
        assert_eq!(
            board.toggle_flag((0, 6)),
            Err(GameError::InvalidCoordinate((0, 6)))
        );
        assert!(board.tile((9, 9)).is_err());
        assert!(!board.is_started());
    }

    #[test]
    fn snapshot_hides_mines_until_game_ends() {
        let mut board = fixed_board((3, 3), &[(0, 2), (2, 0)]);
        board.toggle_flag((0, 2)).unwrap();
        let views = board.snapshot();

        assert_eq!(views.len(), 9);
        let coords: Vec<_> = views.iter().map(|view| view.coords()).collect();
        assert_eq!(coords[..4], [(0, 0), (0, 1), (0, 2), (1, 0)]);
        assert!(views.iter().all(|view| view.mine.is_none()));
        assert!(views[2].flagged);

        assert_eq!(board.reveal((1, 1)).unwrap(), Outcome::Ongoing);
        board.toggle_flag((0, 2)).unwrap();
        board.reveal((0, 2)).unwrap();
        let views = board.snapshot();
        assert!(views.iter().all(|view| view.mine.is_some() && view.revealed));
        assert_eq!(views[6].mine, Some(true));
        assert_eq!(views[4].adjacent_mines, Some(2));
        assert_eq!(views[1].adjacent_mines, Some(1));
        assert_eq!(views[0].adjacent_mines, None);
    }

    #[test]
    fn snapshot_shows_counts_of_revealed_tiles_only() {
        let wall = [(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)];
        let mut board = fixed_board((5, 5), &wall);
        board.reveal((2, 0)).unwrap();

        let views = board.snapshot();
        let at = |coords: Coord2| views[usize::from(coords.0) * 5 + usize::from(coords.1)];
        assert_eq!(at((2, 1)).adjacent_mines, Some(3));
        assert_eq!(at((0, 1)).adjacent_mines, Some(2));
        assert_eq!(at((2, 0)).adjacent_mines, None);
        assert_eq!(at((2, 0)).mine, Some(false));
        assert_eq!(at((2, 3)).adjacent_mines, None);
        assert_eq!(at((2, 3)).mine, None);
    }

    #[test]
    fn snapshot_serializes_hidden_tiles_without_mine_info() {
        let board = fixed_board((2, 2), &[(0, 0)]);
        let json = serde_json::to_value(board.snapshot()).unwrap();

        assert_eq!(json[0]["mine"], serde_json::Value::Null);
        assert_eq!(json[3]["row"], 1);
        assert_eq!(json[3]["col"], 1);
    }

    #[test]
    fn start_instant_is_recorded_once() {
        let wall = [(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)];
        let mut board = fixed_board((5, 5), &wall);
        assert_eq!(board.started_at(), None);
        assert_eq!(board.elapsed_secs(), 0);

        board.reveal((0, 0)).unwrap();
        let started_at = board.started_at();
        assert!(started_at.is_some());

        board.reveal((0, 3)).unwrap();
        assert_eq!(board.started_at(), started_at);
        assert!(board.ended_at().is_none());
    }
}
