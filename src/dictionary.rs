// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet::ENGLISH_ALPHABET, error, fash};

#[derive(Default)]
pub struct Dictionary {
    words: fash::MyHashSet<Box<[u8]>>,
}

impl Dictionary {
    // one word per line, trimmed and lowercased. empty lines are skipped,
    // anything else outside a-z fails the whole load.
    pub fn from_word_list(giant_string: &str) -> error::Returns<Self> {
        let mut words = fash::MyHashSet::<Box<[u8]>>::default();
        let mut v = Vec::new();
        for (line_number, s) in giant_string.lines().enumerate() {
            let s = s.trim();
            if s.is_empty() {
                continue;
            }
            v.clear();
            v.reserve(s.len());
            for c in s.chars().flat_map(char::to_lowercase) {
                match ENGLISH_ALPHABET.tile_of(c) {
                    Some(tile) => v.push(tile),
                    None => {
                        return_error!(format!(
                            "line {}: invalid letter {:?} in {:?}",
                            line_number + 1,
                            c,
                            s
                        ));
                    }
                }
            }
            words.insert(v[..].into());
        }
        tracing::debug!(words = words.len(), "loaded word list");
        Ok(Self { words })
    }

    pub fn from_words<I, S>(iter: I) -> error::Returns<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = iter.into_iter().fold(String::new(), |mut acc, s| {
            acc.push_str(s.as_ref());
            acc.push('\n');
            acc
        });
        Self::from_word_list(&joined)
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> error::Returns<Self> {
        Self::from_word_list(&std::fs::read_to_string(path)?)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    // case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        let mut v = Vec::with_capacity(word.len());
        for c in word.chars().flat_map(char::to_lowercase) {
            match ENGLISH_ALPHABET.tile_of(c) {
                Some(tile) => v.push(tile),
                None => return false,
            }
        }
        self.words.contains(&v[..])
    }

    // blank bits are ignored.
    #[inline(always)]
    pub fn contains_tiles(&self, tiles: &[u8]) -> bool {
        if tiles.iter().all(|&tile| tile & 0x80 == 0) {
            self.words.contains(tiles)
        } else {
            let v = tiles.iter().map(|&tile| tile & 0x7f).collect::<Vec<u8>>();
            self.words.contains(&v[..])
        }
    }
}
