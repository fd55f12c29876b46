// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct StaticGameConfig<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &'a board_layout::BoardLayout,
    rack_size: i8,
    bingo_bonus: i16,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i16 {
        match self {
            GameConfig::Static(x) => {
                // branchless
                x.bingo_bonus & -((num_played >= x.rack_size as usize) as i16)
            }
        }
    }
}

pub fn make_common_english_game_config() -> GameConfig<'static> {
    GameConfig::Static(StaticGameConfig {
        alphabet: &alphabet::ENGLISH_ALPHABET,
        board_layout: &board_layout::STANDARD_BOARD_LAYOUT,
        rack_size: 7,
        bingo_bonus: 50,
    })
}
