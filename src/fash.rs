// Copyright (C) 2020-2026 Andy Kurnia.

// Fast insecure non-cryptographic hash, tuned for short tile sequences.

#[derive(Default)]
pub struct MyHasher(u64);

const SEED: u64 = 0x51_7c_c1_b7_27_22_0a_95;

impl std::hash::Hasher for MyHasher {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline(always)]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0.rotate_left(5) ^ (b as u64)).wrapping_mul(SEED);
        }
    }

    #[inline(always)]
    fn write_usize(&mut self, i: usize) {
        self.0 = (self.0.rotate_left(5) ^ (i as u64)).wrapping_mul(SEED);
    }
}

pub type MyHasherDefault = std::hash::BuildHasherDefault<MyHasher>;
pub type MyHashSet<T> = std::collections::HashSet<T, MyHasherDefault>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinguishes_anagrams() {
        let mut set = MyHashSet::<Box<[u8]>>::default();
        set.insert([1u8, 12, 5][..].into());
        assert!(set.contains(&[1u8, 12, 5][..]));
        assert!(!set.contains(&[12u8, 1, 5][..]));
        assert!(!set.contains(&[1u8, 12][..]));
    }
}
