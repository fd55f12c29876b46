// Copyright (C) 2020-2026 Andy Kurnia.

// tile 0 is the blank, 1..=26 are a..z. on the board, 0x80 marks a blank
// standing for the letter in the low bits, and 0 is an empty square.

pub struct Letter<'a> {
    label: &'a str,
    blank_label: &'a str,
    freq: u8,
    score: i8,
}

pub struct Alphabet<'a> {
    letters: &'a [Letter<'a>],
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.letters.len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline(always)]
    fn get(&self, idx: u8) -> &'a Letter<'a> {
        &self.letters[idx as usize]
    }

    // lowercase a-z only.
    #[inline(always)]
    pub fn tile_of(&self, c: char) -> Option<u8> {
        if c.is_ascii_lowercase() {
            Some((c as u8) - b'a' + 1)
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn char_of(&self, tile: u8) -> char {
        ((tile & 0x7f) - 1 + b'a') as char
    }

    #[inline(always)]
    pub fn from_board(&self, tile: u8) -> Option<&'a str> {
        let c = tile & 0x7f;
        if c == 0 || c >= self.len() {
            None
        } else if tile & 0x80 == 0 {
            Some(self.get(c).label)
        } else {
            Some(self.get(c).blank_label)
        }
    }

    // how many of this tile a full bag holds.
    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    // blanks always score as tile 0.
    #[inline(always)]
    pub fn score(&self, tile: u8) -> i8 {
        if tile & 0x80 != 0 {
            self.get(0).score
        } else {
            self.get(tile).score
        }
    }
}

macro_rules! letter {
    ($label:expr, $blank_label:expr, $freq:expr, $score:expr) => {
        Letter {
            label: $label,
            blank_label: $blank_label,
            freq: $freq,
            score: $score,
        }
    };
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet {
    letters: &[
        letter!("?", "?", 2, 0),
        letter!("A", "a", 9, 1),
        letter!("B", "b", 2, 3),
        letter!("C", "c", 2, 3),
        letter!("D", "d", 4, 2),
        letter!("E", "e", 12, 1),
        letter!("F", "f", 2, 4),
        letter!("G", "g", 3, 2),
        letter!("H", "h", 2, 4),
        letter!("I", "i", 9, 1),
        letter!("J", "j", 1, 8),
        letter!("K", "k", 1, 5),
        letter!("L", "l", 4, 1),
        letter!("M", "m", 2, 3),
        letter!("N", "n", 6, 1),
        letter!("O", "o", 8, 1),
        letter!("P", "p", 2, 3),
        letter!("Q", "q", 1, 10),
        letter!("R", "r", 6, 1),
        letter!("S", "s", 4, 1),
        letter!("T", "t", 6, 1),
        letter!("U", "u", 4, 1),
        letter!("V", "v", 2, 4),
        letter!("W", "w", 2, 4),
        letter!("X", "x", 1, 8),
        letter!("Y", "y", 2, 4),
        letter!("Z", "z", 1, 10),
    ],
};
