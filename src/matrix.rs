// Copyright (C) 2020-2026 Andy Kurnia.

// (col, row). across plays walk towards higher col, down plays walk towards
// lower row (row 14 is printed at the top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub col: i8,
    pub row: i8,
}

impl Loc {
    #[inline(always)]
    pub fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    #[inline(always)]
    pub fn next(self, down: bool) -> Self {
        if down {
            Self::new(self.col, self.row - 1)
        } else {
            Self::new(self.col + 1, self.row)
        }
    }

    #[inline(always)]
    pub fn prev(self, down: bool) -> Self {
        if down {
            Self::new(self.col, self.row + 1)
        } else {
            Self::new(self.col - 1, self.row)
        }
    }

    // offset can be negative.
    #[inline(always)]
    pub fn advance(self, down: bool, offset: i8) -> Self {
        if down {
            Self::new(self.col, self.row - offset)
        } else {
            Self::new(self.col + offset, self.row)
        }
    }
}

impl std::fmt::Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn contains(&self, loc: Loc) -> bool {
        loc.col >= 0 && loc.col < self.cols && loc.row >= 0 && loc.row < self.rows
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    // caller checks contains().
    #[inline(always)]
    pub fn at(&self, loc: Loc) -> usize {
        self.at_row_col(loc.row, loc.col)
    }

    #[inline(always)]
    pub fn loc_of(&self, idx: usize) -> Loc {
        Loc::new(
            (idx % self.cols as usize) as i8,
            (idx / self.cols as usize) as i8,
        )
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn locs(self) -> impl Iterator<Item = Loc> {
        (0..self.len()).map(move |idx| self.loc_of(idx))
    }
}
