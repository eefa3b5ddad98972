use ndarray::Array2;
use rand::prelude::*;

use crate::*;

pub trait MineGenerator {
    /// Produces a layout with exactly `config.mines()` mines on a `config.size()` grid.
    fn generate(&mut self, config: GameConfig) -> MineLayout {
        self.generate_excluding(config, &[])
    }

    /// Like [`MineGenerator::generate`], but keeps every tile in `excluded` free of mines.
    /// The exclusion is dropped if the remaining tiles cannot hold all the mines.
    fn generate_excluding(&mut self, config: GameConfig, excluded: &[Coord2]) -> MineLayout;
}

impl<G: MineGenerator + ?Sized> MineGenerator for &mut G {
    fn generate(&mut self, config: GameConfig) -> MineLayout {
        (**self).generate(config)
    }

    fn generate_excluding(&mut self, config: GameConfig, excluded: &[Coord2]) -> MineLayout {
        (**self).generate_excluding(config, excluded)
    }
}

/// Uniform placement by rejection sampling: draw a random tile, redraw if it already holds a
/// mine or is excluded, until the requested count is reached.
#[derive(Clone, Debug)]
pub struct RandomGenerator {
    rng: SmallRng,
}

impl RandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl MineGenerator for RandomGenerator {
    fn generate_excluding(&mut self, config: GameConfig, excluded: &[Coord2]) -> MineLayout {
        let (rows, cols) = config.size();
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());

        // excluded tiles are marked taken while placing, then cleared
        for &coords in excluded {
            if let Some(tile) = mine_mask.get_mut(coords.to_nd_index()) {
                *tile = true;
            }
        }
        let blocked = mine_mask.iter().filter(|&&taken| taken).count() as CellCount;
        if config.mines() > config.total_cells() - blocked {
            log::warn!(
                "Cannot keep {} tiles free with {:?}, ignoring exclusion",
                blocked,
                config
            );
            mine_mask.fill(false);
        }
        let reserved: Vec<Coord2> = mine_mask
            .indexed_iter()
            .filter(|&(_, &taken)| taken)
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect();

        let mut mines_placed: CellCount = 0;
        let mut draws: u32 = 0;
        while mines_placed < config.mines() {
            let coords: Coord2 = (self.rng.random_range(0..rows), self.rng.random_range(0..cols));
            draws += 1;

            let tile = &mut mine_mask[coords.to_nd_index()];
            if *tile {
                continue;
            }
            *tile = true;
            mines_placed += 1;
        }
        for coords in reserved {
            mine_mask[coords.to_nd_index()] = false;
        }

        log::trace!(
            "Placed {} mines on {}x{} in {} draws",
            mines_placed,
            rows,
            cols,
            draws
        );
        MineLayout::from_mine_mask(mine_mask)
    }
}
