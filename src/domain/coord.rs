/// A cell position on the conceptually infinite grid.
///
/// Both components are signed and unbounded: patterns are free to drift
/// into negative space or arbitrarily far out without ever hitting an
/// artificial border.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Translate by the given deltas
    pub const fn offset(self, drow: i64, dcol: i64) -> Self {
        Self::new(self.row + drow, self.col + dcol)
    }

    /// The Moore neighborhood: the 8 adjacent coordinates, never
    /// including the coordinate itself.
    pub const fn neighbors(self) -> [Coord; 8] {
        let Coord { row, col } = self;
        [
            Coord::new(row - 1, col - 1),
            Coord::new(row - 1, col),
            Coord::new(row - 1, col + 1),
            Coord::new(row, col - 1),
            Coord::new(row, col + 1),
            Coord::new(row + 1, col - 1),
            Coord::new(row + 1, col),
            Coord::new(row + 1, col + 1),
        ]
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}
