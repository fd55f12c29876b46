// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::ENGLISH_ALPHABET;
use super::board_layout::{STANDARD_BOARD_LAYOUT, SpotType};
use super::error::BoardError;
use super::matrix::{Dim, Loc};
use std::sync::Arc;

// stored as the board byte, 0x80 set for a blank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u8);

impl Tile {
    pub fn new(letter: char, is_blank: bool) -> Result<Self, BoardError> {
        match ENGLISH_ALPHABET.tile_of(letter) {
            Some(tile) => Ok(Self(tile | ((is_blank as u8) << 7))),
            None => Err(BoardError::InvalidLetter(letter)),
        }
    }

    #[inline(always)]
    pub(crate) fn from_board(tile: u8) -> Option<Self> {
        if tile == 0 { None } else { Some(Self(tile)) }
    }

    #[inline(always)]
    pub fn letter(self) -> char {
        ENGLISH_ALPHABET.char_of(self.0)
    }

    #[inline(always)]
    pub fn is_blank(self) -> bool {
        self.0 & 0x80 != 0
    }

    #[inline(always)]
    pub fn to_board(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_blank() {
            write!(f, "{}*", self.letter())
        } else {
            write!(f, "{}", self.letter())
        }
    }
}

impl std::fmt::Debug for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

// placements return a new board and leave self untouched. equality and
// hashing only look at the tiles, the layout is always the standard one.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    board_tiles: Arc<[u8]>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            board_tiles: vec![0u8; Self::dim().len()].into(),
        }
    }

    #[inline(always)]
    pub fn dim() -> Dim {
        STANDARD_BOARD_LAYOUT.dim()
    }

    // the one place that writes a square. dst holds an in-progress copy.
    fn put(dst: &mut [u8], loc: Loc, tile: Tile) -> Result<(), BoardError> {
        let dim = Self::dim();
        if !dim.contains(loc) {
            return Err(BoardError::OutOfBounds {
                col: loc.col,
                row: loc.row,
            });
        }
        let square = &mut dst[dim.at(loc)];
        match Tile::from_board(*square) {
            None => *square = tile.to_board(),
            Some(existing) if existing == tile => {}
            Some(existing) => {
                return Err(BoardError::Conflict {
                    col: loc.col,
                    row: loc.row,
                    existing,
                    attempted: tile,
                });
            }
        }
        Ok(())
    }

    pub fn place_tile(&self, loc: Loc, letter: char, is_blank: bool) -> Result<Self, BoardError> {
        let tile = Tile::new(letter, is_blank)?;
        let mut board_tiles = self.board_tiles.to_vec();
        Self::put(&mut board_tiles, loc, tile)?;
        Ok(Self {
            board_tiles: board_tiles.into(),
        })
    }

    // down runs towards row 0. squares already holding the same tile are
    // fine. nothing is placed unless every letter fits.
    pub fn place_word(
        &self,
        letters: &str,
        start: Loc,
        down: bool,
        blanks: &[usize],
    ) -> Result<Self, BoardError> {
        let mut board_tiles = self.board_tiles.to_vec();
        for (offset, letter) in letters.chars().enumerate() {
            let tile = Tile::new(letter, blanks.contains(&offset))?;
            // the walk leaves the board long before offset can overflow.
            Self::put(&mut board_tiles, start.advance(down, offset as i8), tile)?;
        }
        Ok(Self {
            board_tiles: board_tiles.into(),
        })
    }

    // panics off the board.
    #[inline(always)]
    pub fn lookup(&self, loc: Loc) -> (SpotType, Option<Tile>) {
        assert!(Self::dim().contains(loc), "{} is off the board", loc);
        (
            STANDARD_BOARD_LAYOUT.spot_at(loc),
            Tile::from_board(self.board_tiles[Self::dim().at(loc)]),
        )
    }

    // None for empty and off-board squares alike.
    #[inline(always)]
    pub fn tile_at(&self, loc: Loc) -> Option<Tile> {
        let dim = Self::dim();
        if dim.contains(loc) {
            Tile::from_board(self.board_tiles[dim.at(loc)])
        } else {
            None
        }
    }

    pub fn open_tiles(&self) -> impl Iterator<Item = Loc> + '_ {
        let dim = Self::dim();
        self.board_tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == 0)
            .map(move |(idx, _)| dim.loc_of(idx))
    }

    pub fn tiles(&self) -> impl Iterator<Item = (Loc, Tile)> + '_ {
        let dim = Self::dim();
        self.board_tiles
            .iter()
            .enumerate()
            .filter_map(move |(idx, &tile)| Tile::from_board(tile).map(|t| (dim.loc_of(idx), t)))
    }

    #[inline(always)]
    pub fn board_tiles(&self) -> &[u8] {
        &self.board_tiles
    }

    pub fn num_tiles(&self) -> usize {
        self.board_tiles.iter().filter(|&&tile| tile != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.board_tiles.iter().all(|&tile| tile == 0)
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.tiles()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::prelude::*;

    fn hello() -> Board {
        Board::empty()
            .place_word("hello", Loc::new(3, 7), false, &[])
            .unwrap()
    }

    #[test]
    fn tile_equality_needs_both_fields() {
        let a = Tile::new('a', false).unwrap();
        assert_eq!(a, Tile::new('a', false).unwrap());
        assert_ne!(a, Tile::new('a', true).unwrap());
        assert_ne!(a, Tile::new('b', false).unwrap());
        assert_eq!(Tile::new('q', true).unwrap().to_string(), "q*");
        assert_matches!(Tile::new('A', false), Err(BoardError::InvalidLetter('A')));
        assert_matches!(Tile::new('é', false), Err(BoardError::InvalidLetter('é')));
    }

    #[test]
    fn out_of_bounds_everywhere_outside() {
        let board = Board::empty();
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(15);
        for _ in 0..500 {
            let col = rng.random_range(-40i8..40);
            let row = rng.random_range(-40i8..40);
            let result = board.place_tile(Loc::new(col, row), 'a', false);
            if (0..15).contains(&col) && (0..15).contains(&row) {
                assert!(result.is_ok());
            } else {
                assert_eq!(result, Err(BoardError::OutOfBounds { col, row }));
            }
        }
    }

    #[test]
    fn first_placement_anywhere_inside() {
        let board = Board::empty();
        for loc in Board::dim().locs() {
            let placed = board.place_tile(loc, 'z', true).unwrap();
            assert_eq!(
                placed.lookup(loc).1,
                Some(Tile::new('z', true).unwrap())
            );
            assert_eq!(placed.num_tiles(), 1);
        }
        assert!(board.is_empty());
    }

    #[test]
    fn same_tile_twice_is_idempotent() {
        let loc = Loc::new(4, 9);
        let once = Board::empty().place_tile(loc, 'k', false).unwrap();
        let twice = once.place_tile(loc, 'k', false).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn conflicting_tile_is_rejected() {
        let loc = Loc::new(4, 9);
        let board = Board::empty().place_tile(loc, 'k', false).unwrap();
        assert_matches!(
            board.place_tile(loc, 'j', false),
            Err(BoardError::Conflict { col: 4, row: 9, .. })
        );
        assert_matches!(
            board.place_tile(loc, 'k', true),
            Err(BoardError::Conflict { col: 4, row: 9, .. })
        );
        assert_eq!(board.lookup(loc).1, Some(Tile::new('k', false).unwrap()));
    }

    #[test]
    fn invalid_letter_is_rejected() {
        assert_matches!(
            Board::empty().place_tile(Loc::new(0, 0), '1', false),
            Err(BoardError::InvalidLetter('1'))
        );
        assert_matches!(
            Board::empty().place_word("ab-c", Loc::new(0, 0), false, &[]),
            Err(BoardError::InvalidLetter('-'))
        );
    }

    #[test]
    fn place_word_walks_both_ways() {
        let board = Board::empty()
            .place_word("cat", Loc::new(2, 10), false, &[1])
            .unwrap()
            .place_word("cow", Loc::new(2, 10), true, &[])
            .unwrap();
        let at = |col, row| board.lookup(Loc::new(col, row)).1.map(|t| t.to_string());
        assert_eq!(at(2, 10).as_deref(), Some("c"));
        assert_eq!(at(3, 10).as_deref(), Some("a*"));
        assert_eq!(at(4, 10).as_deref(), Some("t"));
        assert_eq!(at(2, 9).as_deref(), Some("o"));
        assert_eq!(at(2, 8).as_deref(), Some("w"));
        assert_eq!(board.num_tiles(), 5);
    }

    #[test]
    fn place_word_round_trip() {
        let start = Loc::new(7, 7);
        let board = Board::empty().place_word("quiz", start, true, &[0]).unwrap();
        assert_eq!(board.lookup(start).1, Some(Tile::new('q', true).unwrap()));
        assert_eq!(
            board.lookup(start).0,
            STANDARD_BOARD_LAYOUT.spot_at(start)
        );
    }

    #[test]
    fn place_word_is_atomic() {
        let board = hello();
        // crosses "hello" at the 'l' in column 5 with an 'x'.
        let result = board.place_word("axe", Loc::new(5, 8), true, &[]);
        assert_matches!(result, Err(BoardError::Conflict { col: 5, row: 7, .. }));
        assert_eq!(board, hello());
        assert_eq!(board.tile_at(Loc::new(5, 8)), None);

        // runs off the bottom edge after two good letters.
        let result = board.place_word("abc", Loc::new(0, 1), true, &[]);
        assert_matches!(result, Err(BoardError::OutOfBounds { col: 0, row: -1 }));
        assert_eq!(board.tile_at(Loc::new(0, 1)), None);
        assert_eq!(board.tile_at(Loc::new(0, 0)), None);
    }

    #[test]
    fn place_word_through_matching_tiles() {
        let board = hello()
            .place_word("eel", Loc::new(4, 8), true, &[])
            .unwrap();
        assert_eq!(board.num_tiles(), 7);
        assert_eq!(board.tile_at(Loc::new(4, 6)).map(Tile::letter), Some('l'));
    }

    #[test]
    fn placements_leave_older_boards_alone() {
        let empty = Board::empty();
        let first = empty.place_tile(Loc::new(1, 1), 'a', false).unwrap();
        let second = first.place_tile(Loc::new(2, 1), 'b', false).unwrap();
        assert!(empty.is_empty());
        assert_eq!(first.num_tiles(), 1);
        assert_eq!(second.num_tiles(), 2);
        assert_eq!(first.tile_at(Loc::new(2, 1)), None);
    }

    #[test]
    fn identity_is_the_placed_tiles() {
        use std::hash::{BuildHasher, RandomState};
        let a = Board::empty()
            .place_tile(Loc::new(0, 0), 'a', false)
            .unwrap()
            .place_tile(Loc::new(1, 0), 'b', false)
            .unwrap();
        let b = Board::empty()
            .place_word("ab", Loc::new(0, 0), false, &[])
            .unwrap();
        assert_eq!(a, b);
        let state = RandomState::new();
        assert_eq!(state.hash_one(&a), state.hash_one(&b));
        assert_ne!(a, Board::empty());
    }

    #[test]
    fn open_tiles_cover_the_rest() {
        let board = hello();
        let open = board.open_tiles().collect::<Vec<_>>();
        assert_eq!(open.len(), 225 - 5);
        assert!(open.iter().all(|&loc| board.tile_at(loc).is_none()));
        assert!(!open.contains(&Loc::new(3, 7)));
        assert_eq!(Board::empty().open_tiles().count(), 225);
        assert_eq!(board.board_tiles().len(), 225);
        assert_eq!(board.board_tiles()[Board::dim().at(Loc::new(3, 7))], 8);
    }

    #[test]
    fn tile_at_is_none_off_board() {
        let board = hello();
        assert_eq!(board.tile_at(Loc::new(-1, 7)), None);
        assert_eq!(board.tile_at(Loc::new(3, 15)), None);
        assert_eq!(board.tile_at(Loc::new(3, 7)).map(Tile::letter), Some('h'));
    }
}
