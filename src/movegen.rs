// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    alphabet::ENGLISH_ALPHABET,
    board::{Board, Tile},
    error::BoardError,
    hand::{self, Hand},
    matrix::Loc,
    play_scorer::{BoardSnapshot, PlayScorer},
};

// word holds only the new tiles, laid from loc onwards over empty squares.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Play {
    pub loc: Loc,
    pub down: bool,
    pub word: Box<[u8]>,
}

impl Play {
    pub fn new(loc: Loc, down: bool, letters: &str, blanks: &[usize]) -> Result<Self, BoardError> {
        let word = letters
            .chars()
            .enumerate()
            .map(|(offset, letter)| {
                Tile::new(letter, blanks.contains(&offset)).map(Tile::to_board)
            })
            .collect::<Result<Box<[u8]>, _>>()?;
        Ok(Self { loc, down, word })
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ",
            self.loc,
            if self.down { "down" } else { "across" }
        )?;
        for &tile in self.word.iter() {
            write!(f, "{}", ENGLISH_ALPHABET.from_board(tile).unwrap_or("?"))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValuedPlay {
    pub play: Play,
    pub score: i16,
}

// higher score first, then the smaller play.
#[inline(always)]
fn best_first(a: &ValuedPlay, b: &ValuedPlay) -> std::cmp::Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.play.cmp(&b.play))
}

// keeps the best k in no particular order. k > 0.
fn keep_best(valued_plays: &mut Vec<ValuedPlay>, k: usize) {
    if valued_plays.len() > k {
        valued_plays.select_nth_unstable_by(k - 1, best_first);
        valued_plays.truncate(k);
    }
}

pub fn enumerate_plays<'a>(
    board: &'a Board,
    candidates: &'a [Box<[u8]>],
) -> impl Iterator<Item = Play> + 'a {
    board.open_tiles().flat_map(move |loc| {
        [false, true].into_iter().flat_map(move |down| {
            candidates.iter().map(move |word| Play {
                loc,
                down,
                word: word.clone(),
            })
        })
    })
}

fn gen_plays_from<FoundPlay: FnMut(Loc, bool, &[u8], i16)>(
    board_snapshot: &BoardSnapshot<'_>,
    play_scorer: &mut PlayScorer,
    locs: &[Loc],
    candidates: &[Box<[u8]>],
    mut found_play: FoundPlay,
) {
    for &loc in locs {
        for down in [false, true] {
            for word in candidates {
                let score = play_scorer
                    .score_tiles(board_snapshot, loc, down, word)
                    .score();
                found_play(loc, down, word, score);
            }
        }
    }
}

// open squares are split into one contiguous shard per thread. each shard
// returns its own plays; the caller orders the merged result.
fn gen_plays_sharded<ScoreShard>(
    board_snapshot: &BoardSnapshot<'_>,
    hand: &Hand,
    num_threads: usize,
    score_shard: ScoreShard,
) -> Vec<ValuedPlay>
where
    ScoreShard: Fn(&BoardSnapshot<'_>, &mut PlayScorer, &[Loc], &[Box<[u8]>]) -> Vec<ValuedPlay>
        + Sync,
{
    let t0 = std::time::Instant::now();
    let candidates = hand::generate_candidates(hand);
    let open_tiles = board_snapshot.board.open_tiles().collect::<Vec<_>>();
    let num_threads = num_threads.clamp(1, open_tiles.len().max(1));
    let shard_len = open_tiles.len().div_ceil(num_threads).max(1);
    tracing::debug!(
        hand = %hand,
        open_tiles = open_tiles.len(),
        candidates = candidates.len(),
        num_threads,
        "generating plays"
    );

    let valued_plays = std::thread::scope(|s| {
        let score_shard = &score_shard;
        let candidates = &candidates[..];
        let handles = open_tiles
            .chunks(shard_len)
            .enumerate()
            .map(|(shard, locs)| {
                s.spawn(move || {
                    let mut play_scorer = PlayScorer::new();
                    let valued_plays =
                        score_shard(board_snapshot, &mut play_scorer, locs, candidates);
                    tracing::trace!(shard, kept = valued_plays.len(), "shard done");
                    valued_plays
                })
            })
            .collect::<Vec<_>>();
        let mut valued_plays = Vec::new();
        for handle in handles {
            match handle.join() {
                Ok(shard_plays) => valued_plays.extend(shard_plays),
                Err(e) => std::panic::resume_unwind(e),
            }
        }
        valued_plays
    });

    tracing::debug!(
        kept = valued_plays.len(),
        elapsed = ?t0.elapsed(),
        "generated plays"
    );
    valued_plays
}

// invalid plays are kept with score 0. lowest first.
pub fn rank(board_snapshot: &BoardSnapshot<'_>, hand: &Hand) -> Vec<ValuedPlay> {
    rank_with_threads(board_snapshot, hand, num_cpus::get())
}

pub fn rank_with_threads(
    board_snapshot: &BoardSnapshot<'_>,
    hand: &Hand,
    num_threads: usize,
) -> Vec<ValuedPlay> {
    let mut valued_plays = gen_plays_sharded(
        board_snapshot,
        hand,
        num_threads,
        |board_snapshot, play_scorer, locs, candidates| {
            let mut valued_plays = Vec::with_capacity(locs.len() * 2 * candidates.len());
            gen_plays_from(
                board_snapshot,
                play_scorer,
                locs,
                candidates,
                |loc, down, word, score| {
                    valued_plays.push(ValuedPlay {
                        play: Play {
                            loc,
                            down,
                            word: word.into(),
                        },
                        score,
                    })
                },
            );
            valued_plays
        },
    );
    valued_plays.sort_unstable_by(|a, b| best_first(b, a));
    valued_plays
}

pub fn best(board_snapshot: &BoardSnapshot<'_>, hand: &Hand, k: usize) -> Vec<ValuedPlay> {
    best_with_threads(board_snapshot, hand, k, num_cpus::get())
}

pub fn best_with_threads(
    board_snapshot: &BoardSnapshot<'_>,
    hand: &Hand,
    k: usize,
    num_threads: usize,
) -> Vec<ValuedPlay> {
    if k == 0 {
        return Vec::new();
    }
    let mut valued_plays = gen_plays_sharded(
        board_snapshot,
        hand,
        num_threads,
        |board_snapshot, play_scorer, locs, candidates| {
            // trimmed back to k whenever it doubles. after a trim, anything
            // scoring below the kth play can never make it back in.
            let limit = k.saturating_mul(2);
            let mut valued_plays = Vec::<ValuedPlay>::with_capacity(limit.min(4096));
            let mut threshold = i16::MIN;
            gen_plays_from(
                board_snapshot,
                play_scorer,
                locs,
                candidates,
                |loc, down, word, score| {
                    if score < threshold {
                        return;
                    }
                    valued_plays.push(ValuedPlay {
                        play: Play {
                            loc,
                            down,
                            word: word.into(),
                        },
                        score,
                    });
                    if valued_plays.len() >= limit {
                        keep_best(&mut valued_plays, k);
                        threshold = valued_plays[k - 1].score;
                    }
                },
            );
            keep_best(&mut valued_plays, k);
            valued_plays
        },
    );
    keep_best(&mut valued_plays, k);
    valued_plays.sort_unstable_by(best_first);
    valued_plays
}
