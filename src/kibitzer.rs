// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    alphabet::ENGLISH_ALPHABET,
    board::Board,
    dictionary::Dictionary,
    error::BoardError,
    game_config::GameConfig,
    hand::Hand,
    matrix::Loc,
    movegen,
    play_scorer::BoardSnapshot,
};

// a word already on the board. col and row are 0-based, row 14 on top.
// across words run towards higher col, down words towards lower row.
// blanks: 0-based offsets into word.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonPlacement {
    pub word: String,
    pub col: i8,
    pub row: i8,
    #[serde(default)]
    pub down: bool,
    #[serde(default)]
    pub blanks: Vec<usize>,
}

pub fn board_from_placements(placements: &[JsonPlacement]) -> Result<Board, BoardError> {
    placements.iter().try_fold(Board::empty(), |board, placement| {
        board.place_word(
            &placement.word.to_lowercase(),
            Loc::new(placement.col, placement.row),
            placement.down,
            &placement.blanks,
        )
    })
}

fn default_count() -> usize {
    10
}

// hand: letters, ? for blank. at most two blanks, and each one makes the
// search 26 times slower.
// count: maximum number of plays returned.
#[derive(serde::Deserialize, Debug)]
pub struct Question {
    #[serde(default)]
    pub board: Vec<JsonPlacement>,
    pub hand: String,
    #[serde(default = "default_count")]
    pub count: usize,
}

// word: only the new tiles. uppercase for a tile, lowercase for a blank.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonPlay {
    pub col: i8,
    pub row: i8,
    pub down: bool,
    pub word: String,
    pub score: i16,
}

impl From<&movegen::ValuedPlay> for JsonPlay {
    #[inline(always)]
    fn from(valued_play: &movegen::ValuedPlay) -> Self {
        let play = &valued_play.play;
        Self {
            col: play.loc.col,
            row: play.loc.row,
            down: play.down,
            word: play
                .word
                .iter()
                .filter_map(|&tile| ENGLISH_ALPHABET.from_board(tile))
                .collect(),
            score: valued_play.score,
        }
    }
}

#[derive(Debug)]
pub struct Kibitzer {
    pub board: Board,
    pub hand: Hand,
    pub count: usize,
}

impl Kibitzer {
    pub fn prepare(game_config: &GameConfig<'_>, question: &Question) -> Result<Self, BoardError> {
        Ok(Self {
            board: board_from_placements(&question.board)?,
            hand: Hand::for_game(game_config, &question.hand)?,
            count: question.count,
        })
    }

    pub fn best_plays(
        &self,
        game_config: &GameConfig<'_>,
        dictionary: &Dictionary,
    ) -> Vec<JsonPlay> {
        let board_snapshot = BoardSnapshot::new(&self.board, game_config, dictionary);
        movegen::best(&board_snapshot, &self.hand, self.count)
            .iter()
            .map(JsonPlay::from)
            .collect()
    }
}
