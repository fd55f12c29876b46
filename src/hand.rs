// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet::ENGLISH_ALPHABET, dictionary::Dictionary, error::BoardError, game_config};

// the tiles available for one play, as a tally.
// index 0 counts blanks, 1..=26 count a..z.
#[derive(Clone, PartialEq, Eq)]
pub struct Hand {
    rack_tally: [u8; 27],
    num_tiles: usize,
}

impl Hand {
    // letters in any case, ? for a blank.
    pub fn new(s: &str) -> Result<Self, BoardError> {
        Self::for_game(&game_config::make_common_english_game_config(), s)
    }

    // each blank multiplies the candidates by 26, so a hand holds at most as
    // many blanks as the bag.
    pub fn for_game(
        game_config: &game_config::GameConfig<'_>,
        s: &str,
    ) -> Result<Self, BoardError> {
        let alphabet = game_config.alphabet();
        let rack_size = game_config.rack_size();
        let mut rack_tally = [0u8; 27];
        let mut num_tiles = 0usize;
        for c in s.chars() {
            let tile = if c == '?' {
                0
            } else {
                match alphabet.tile_of(c.to_ascii_lowercase()) {
                    Some(tile) => tile,
                    None => return Err(BoardError::InvalidLetter(c)),
                }
            };
            num_tiles += 1;
            if num_tiles > rack_size as usize {
                return Err(BoardError::TooManyTiles {
                    len: s.chars().count(),
                    rack_size,
                });
            }
            rack_tally[tile as usize] += 1;
        }
        if rack_tally[0] > alphabet.freq(0) {
            return Err(BoardError::TooManyBlanks {
                len: rack_tally[0],
                available: alphabet.freq(0),
            });
        }
        Ok(Self {
            rack_tally,
            num_tiles,
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_tiles
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_tiles == 0
    }

    // calls found once per distinct non-empty ordered sequence of tiles from
    // this hand, depth first.
    pub fn for_each_candidate<F: FnMut(&[u8])>(&self, found: F) {
        struct CandidateEnv<'a, F: FnMut(&[u8])> {
            found: F,
            rack_tally: &'a mut [u8; 27],
            word_buffer: Vec<u8>,
        }
        fn extend<F: FnMut(&[u8])>(env: &mut CandidateEnv<'_, F>) {
            for tile in 1..27u8 {
                if env.rack_tally[tile as usize] > 0 {
                    env.rack_tally[tile as usize] -= 1;
                    place(env, tile);
                    env.rack_tally[tile as usize] += 1;
                }
            }
            if env.rack_tally[0] > 0 {
                env.rack_tally[0] -= 1;
                for tile in 1..27u8 {
                    place(env, tile | 0x80);
                }
                env.rack_tally[0] += 1;
            }
        }
        fn place<F: FnMut(&[u8])>(env: &mut CandidateEnv<'_, F>, tile: u8) {
            env.word_buffer.push(tile);
            (env.found)(&env.word_buffer);
            extend(env);
            env.word_buffer.pop();
        }
        let mut rack_tally = self.rack_tally;
        extend(&mut CandidateEnv {
            found,
            rack_tally: &mut rack_tally,
            word_buffer: Vec::with_capacity(self.num_tiles),
        });
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in 1..27u8 {
            for _ in 0..self.rack_tally[tile as usize] {
                write!(f, "{}", ENGLISH_ALPHABET.char_of(tile))?;
            }
        }
        for _ in 0..self.rack_tally[0] {
            write!(f, "?")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hand({})", self)
    }
}

pub fn generate_candidates(hand: &Hand) -> Vec<Box<[u8]>> {
    let mut candidates = Vec::new();
    hand.for_each_candidate(|word| candidates.push(word.into()));
    candidates
}

// words the hand spells on its own, by face value without premiums.
// best k first, ties by tiles.
pub fn raw_hand_scores(
    game_config: &game_config::GameConfig<'_>,
    hand: &Hand,
    dictionary: &Dictionary,
    k: usize,
) -> Vec<(Box<[u8]>, i16)> {
    let alphabet = game_config.alphabet();
    let mut found = Vec::<(Box<[u8]>, i16)>::new();
    hand.for_each_candidate(|word| {
        if dictionary.contains_tiles(word) {
            let score = word.iter().map(|&tile| alphabet.score(tile) as i16).sum();
            found.push((word.into(), score));
        }
    });
    found.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    found.truncate(k);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fash::MyHashSet;
    use assert_matches::assert_matches;

    fn strings(hand: &str) -> Vec<String> {
        generate_candidates(&Hand::new(hand).unwrap())
            .iter()
            .map(|word| {
                word.iter()
                    .map(|&tile| {
                        let c = ENGLISH_ALPHABET.char_of(tile);
                        if tile & 0x80 != 0 { c.to_ascii_uppercase() } else { c }
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn every_ordering_of_every_subset() {
        assert_eq!(
            strings("cab"),
            [
                "a", "ab", "abc", "ac", "acb", "b", "ba", "bac", "bc", "bca", "c", "ca", "cab",
                "cb", "cba"
            ]
        );
    }

    #[test]
    fn repeated_letters_do_not_repeat_candidates() {
        assert_eq!(
            strings("aba"),
            ["a", "aa", "aab", "ab", "aba", "b", "ba", "baa"]
        );
        let candidates = strings("uqikoj");
        assert_eq!(candidates.len(), 1956);
        let distinct = candidates.iter().collect::<MyHashSet<_>>();
        assert_eq!(distinct.len(), candidates.len());
    }

    #[test]
    fn full_rack_count() {
        assert_eq!(strings("abcdefg").len(), 13699);
        assert!(strings("gliders").iter().any(|word| word == "gliders"));
    }

    #[test]
    fn blanks_stand_for_every_letter_after_real_tiles() {
        let candidates = strings("a?");
        assert_eq!(candidates.len(), 79);
        assert_eq!(&candidates[..3], ["a", "aA", "aB"]);
        assert_eq!(candidates[27], "A");
        assert_eq!(candidates[28], "Aa");
        assert_eq!(candidates[29], "B");
        assert_eq!(candidates[77], "Z");
        assert_eq!(candidates[78], "Za");
    }

    #[test]
    fn empty_hand_has_no_candidates() {
        assert!(strings("").is_empty());
    }

    #[test]
    fn hand_validation() {
        let hand = Hand::new("LaRe").unwrap();
        assert_eq!(hand.len(), 4);
        assert_eq!(hand.to_string(), "aelr");
        assert_eq!(Hand::new("?z?").unwrap().to_string(), "z??");
        assert_matches!(Hand::new("ab1"), Err(BoardError::InvalidLetter('1')));
        assert_matches!(
            Hand::new("abcdefgh"),
            Err(BoardError::TooManyTiles { len: 8, rack_size: 7 })
        );
        assert_matches!(Hand::new("abcdef1"), Err(BoardError::InvalidLetter('1')));
    }

    #[test]
    fn long_hands_are_rejected_without_overflow() {
        assert_matches!(
            Hand::new(&"a".repeat(256)),
            Err(BoardError::TooManyTiles { len: 256, rack_size: 7 })
        );
        assert_matches!(
            Hand::new(&"?".repeat(1000)),
            Err(BoardError::TooManyTiles { len: 1000, rack_size: 7 })
        );
    }

    #[test]
    fn blanks_are_limited_to_the_bag() {
        assert_eq!(Hand::new("ab??").unwrap().len(), 4);
        assert_matches!(
            Hand::new("a???"),
            Err(BoardError::TooManyBlanks { len: 3, available: 2 })
        );
    }

    fn raw(hand: &str, k: usize) -> Vec<(String, i16)> {
        let game_config = game_config::make_common_english_game_config();
        let dictionary =
            Dictionary::from_words(["a", "ale", "la", "lare", "real", "earl", "zax"]).unwrap();
        raw_hand_scores(&game_config, &Hand::new(hand).unwrap(), &dictionary, k)
            .into_iter()
            .map(|(word, score)| {
                let word = word
                    .iter()
                    .filter_map(|&tile| ENGLISH_ALPHABET.from_board(tile))
                    .collect();
                (word, score)
            })
            .collect()
    }

    #[test]
    fn raw_scores_rank_words_by_face_value() {
        fn words(v: &[(&str, i16)]) -> Vec<(String, i16)> {
            v.iter()
                .map(|&(word, score)| (word.to_string(), score))
                .collect()
        }
        assert_eq!(
            raw("lare", 4),
            words(&[("EARL", 4), ("LARE", 4), ("REAL", 4), ("ALE", 3)])
        );
        assert_eq!(
            raw("lare", 10),
            words(&[
                ("EARL", 4),
                ("LARE", 4),
                ("REAL", 4),
                ("ALE", 3),
                ("LA", 2),
                ("A", 1)
            ])
        );
        assert_eq!(raw("l?", 10), words(&[("La", 1), ("a", 0)]));
        assert!(raw("qz", 10).is_empty());
        assert!(raw("lare", 0).is_empty());
    }
}
