use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, 0-based.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let bounds = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, bounds)
    }
}

/// Iterates the up to 8 neighbors of `center` in row-major order, clipped at the grid edges.
///
/// Walks the 3x3 window around `center` and skips `center` itself.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    first_col: Coord,
    last: Coord2,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (row, col) = center;
        let (rows, cols) = bounds;
        let window = |at: Coord, len: Coord| {
            let last = at.saturating_add(1).min(len.saturating_sub(1));
            (at.saturating_sub(1), last)
        };
        let (first_row, last_row) = window(row, rows);
        let (first_col, last_col) = window(col, cols);

        Self {
            center,
            first_col,
            last: (last_row, last_col),
            cursor: (row < rows && col < cols).then_some((first_row, first_col)),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pos) = self.cursor {
            let (row, col) = pos;
            self.cursor = if col < self.last.1 {
                Some((row, col + 1))
            } else if row < self.last.0 {
                Some((row + 1, self.first_col))
            } else {
                None
            };

            if pos != self.center {
                return Some(pos);
            }
        }
        None
    }
}
