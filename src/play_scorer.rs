// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board::Board, dictionary::Dictionary, game_config::GameConfig, matrix::Loc, movegen};

// read-only inputs shared by every play scored in one pass.
pub struct BoardSnapshot<'a> {
    pub board: &'a Board,
    pub game_config: &'a GameConfig<'a>,
    pub dictionary: &'a Dictionary,
    board_is_empty: bool,
}

impl<'a> BoardSnapshot<'a> {
    pub fn new(
        board: &'a Board,
        game_config: &'a GameConfig<'a>,
        dictionary: &'a Dictionary,
    ) -> Self {
        Self {
            board,
            game_config,
            dictionary,
            board_is_empty: board.is_empty(),
        }
    }

    #[inline(always)]
    pub fn board_is_empty(&self) -> bool {
        self.board_is_empty
    }
}

// why a play earns nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("the word runs into the edge of the board")]
    OffBoard,

    #[error("{0:?} is not in the dictionary")]
    NotAWord(String),

    #[error("no word of two or more letters is formed")]
    NoWordFormed,

    #[error("does not touch any tile on the board")]
    Unattached,

    #[error("the first play must cover the star")]
    MissesStar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Scored(i16),
    Invalid(Rejection),
}

impl Verdict {
    #[inline(always)]
    pub fn score(&self) -> i16 {
        match self {
            Verdict::Scored(score) => *score,
            Verdict::Invalid(_) => 0,
        }
    }

    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Scored(_))
    }
}

// the word formed along one orientation. forms_word is false when the walk
// only found a single letter; score is then 0 and placed is left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MajorWord {
    pub score: i16,
    pub forms_word: bool,
    pub touched: bool,
}

// scores the word through loc after laying tiles on the empty squares from
// loc onwards. only new tiles get premiums. placed gets their squares.
pub fn score_major(
    board_snapshot: &BoardSnapshot<'_>,
    loc: Loc,
    down: bool,
    tiles: &[u8],
    word_buffer: &mut Vec<u8>,
    placed: &mut Vec<Loc>,
) -> Result<MajorWord, Rejection> {
    let board = board_snapshot.board;
    let alphabet = board_snapshot.game_config.alphabet();
    let board_layout = board_snapshot.game_config.board_layout();
    let dim = board_layout.dim();
    word_buffer.clear();
    placed.clear();

    // backing up stops quietly below index 0. every other square the walk
    // looks at, including the one after the word, must be on the board.
    let mut at = loc;
    loop {
        let before = at.prev(down);
        if before.col < 0 || before.row < 0 {
            break;
        }
        if !dim.contains(before) {
            return Err(Rejection::OffBoard);
        }
        if board.tile_at(before).is_none() {
            break;
        }
        at = before;
    }

    let mut word_multiplier = 1i16;
    let mut word_score = 0i16;
    let mut touched = false;
    let mut new_tiles = tiles.iter();
    loop {
        if !dim.contains(at) {
            return Err(Rejection::OffBoard);
        }
        if let Some(existing) = board.tile_at(at) {
            let tile = existing.to_board();
            touched = true;
            word_score += alphabet.score(tile) as i16;
            word_buffer.push(tile);
        } else if let Some(&tile) = new_tiles.next() {
            let premium = board_layout.premium_at(at);
            word_multiplier *= premium.word_multiplier as i16;
            word_score += alphabet.score(tile) as i16 * premium.letter_multiplier as i16;
            word_buffer.push(tile);
            placed.push(at);
        } else {
            break;
        }
        at = at.next(down);
    }

    if word_buffer.len() < 2 {
        placed.clear();
        return Ok(MajorWord {
            score: 0,
            forms_word: false,
            touched,
        });
    }
    if !board_snapshot.dictionary.contains_tiles(&word_buffer[..]) {
        return Err(Rejection::NotAWord(
            word_buffer.iter().map(|&tile| alphabet.char_of(tile)).collect(),
        ));
    }
    Ok(MajorWord {
        score: word_score * word_multiplier,
        forms_word: true,
        touched,
    })
}

// owns the buffers reused across score_play calls.
#[derive(Default)]
pub struct PlayScorer {
    word_buffer: Vec<u8>,
    placed: Vec<Loc>,
    cross_placed: Vec<Loc>,
}

impl PlayScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score_major(
        &mut self,
        board_snapshot: &BoardSnapshot<'_>,
        loc: Loc,
        down: bool,
        tiles: &[u8],
    ) -> Result<MajorWord, Rejection> {
        score_major(
            board_snapshot,
            loc,
            down,
            tiles,
            &mut self.word_buffer,
            &mut self.placed,
        )
    }

    // squares of the new tiles from the last score_major.
    #[inline(always)]
    pub fn placed(&self) -> &[Loc] {
        &self.placed
    }

    #[inline(always)]
    pub fn score_play(
        &mut self,
        board_snapshot: &BoardSnapshot<'_>,
        play: &movegen::Play,
    ) -> Verdict {
        self.score_tiles(board_snapshot, play.loc, play.down, &play.word)
    }

    // same as score_play without building a Play.
    pub fn score_tiles(
        &mut self,
        board_snapshot: &BoardSnapshot<'_>,
        loc: Loc,
        down: bool,
        tiles: &[u8],
    ) -> Verdict {
        match self.try_score_tiles(board_snapshot, loc, down, tiles) {
            Ok(score) => Verdict::Scored(score),
            Err(rejection) => Verdict::Invalid(rejection),
        }
    }

    fn try_score_tiles(
        &mut self,
        board_snapshot: &BoardSnapshot<'_>,
        loc: Loc,
        down: bool,
        tiles: &[u8],
    ) -> Result<i16, Rejection> {
        let major = score_major(
            board_snapshot,
            loc,
            down,
            tiles,
            &mut self.word_buffer,
            &mut self.placed,
        )?;
        if !major.forms_word {
            return Err(Rejection::NoWordFormed);
        }

        let mut score = major.score;
        let mut attached = major.touched;
        for (&loc, &tile) in self.placed.iter().zip(tiles.iter()) {
            let cross = score_major(
                board_snapshot,
                loc,
                !down,
                &[tile],
                &mut self.word_buffer,
                &mut self.cross_placed,
            )?;
            score += cross.score;
            attached |= cross.touched;
        }

        if board_snapshot.board_is_empty {
            let star = board_snapshot.game_config.board_layout().star();
            if !self.placed.contains(&star) {
                return Err(Rejection::MissesStar);
            }
        } else if !attached {
            return Err(Rejection::Unattached);
        }

        Ok(score + board_snapshot.game_config.num_played_bonus(tiles.len()))
    }
}
