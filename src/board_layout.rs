// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix::{Dim, Loc};
use std::sync::LazyLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpotType {
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub letter_multiplier: i8,
}

impl SpotType {
    #[inline(always)]
    pub fn premium(self) -> Premium {
        let (word_multiplier, letter_multiplier) = match self {
            SpotType::Normal => (1, 1),
            SpotType::DoubleLetter => (1, 2),
            SpotType::TripleLetter => (1, 3),
            SpotType::DoubleWord => (2, 1),
            SpotType::TripleWord => (3, 1),
        };
        Premium {
            word_multiplier,
            letter_multiplier,
        }
    }
}

pub struct BoardLayout {
    spots: Box<[SpotType]>,
    dim: Dim,
    star_row: i8,
    star_col: i8,
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star(&self) -> Loc {
        Loc::new(self.star_col, self.star_row)
    }

    #[inline(always)]
    pub fn spots(&self) -> &[SpotType] {
        &self.spots
    }

    // caller checks dim().contains().
    #[inline(always)]
    pub fn spot_at(&self, loc: Loc) -> SpotType {
        self.spots[self.dim.at(loc)]
    }

    #[inline(always)]
    pub fn premium_at(&self, loc: Loc) -> Premium {
        self.spot_at(loc).premium()
    }
}

// mirror across the main diagonal.
fn flip(octant: &[(i8, i8)]) -> Vec<(i8, i8)> {
    octant
        .iter()
        .flat_map(|&(c, r)| [(c, r), (r, c)])
        .collect()
}

// add the images under both axis reflections and the half turn.
fn rotate(quadrant: &[(i8, i8)], last: i8) -> Vec<(i8, i8)> {
    quadrant
        .iter()
        .flat_map(|&(c, r)| [(c, r), (last - c, r), (c, last - r), (last - c, last - r)])
        .collect()
}

// later kinds overwrite earlier ones, so the center lands on double word.
fn make_standard_board_layout() -> BoardLayout {
    let dim = Dim { rows: 15, cols: 15 };
    let last = dim.cols - 1;
    let diagonal = (1..5).map(|i| (i, i)).chain([(7, 7)]).collect::<Vec<(i8, i8)>>();
    let kinds = [
        (
            SpotType::DoubleLetter,
            rotate(&flip(&[(3, 0), (6, 2), (7, 3), (6, 6)]), last),
        ),
        (SpotType::TripleLetter, rotate(&flip(&[(5, 1), (5, 5)]), last)),
        (SpotType::DoubleWord, rotate(&diagonal, last)),
        (SpotType::TripleWord, rotate(&[(0, 0), (7, 0), (0, 7)], last)),
    ];
    let mut spots = vec![SpotType::Normal; dim.len()];
    for (kind, coords) in kinds.iter() {
        for &(col, row) in coords.iter() {
            spots[dim.at_row_col(row, col)] = *kind;
        }
    }
    BoardLayout {
        spots: spots.into_boxed_slice(),
        dim,
        star_row: 7,
        star_col: 7,
    }
}

pub static STANDARD_BOARD_LAYOUT: LazyLock<BoardLayout> =
    LazyLock::new(make_standard_board_layout);
