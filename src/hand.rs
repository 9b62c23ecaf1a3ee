// Copyright (C) 2020-2024 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

// tally indexed by tile. absent letters are zero, counts never go negative.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Hand(Box<[u32]>);

impl Hand {
    pub fn new(alphabet: &alphabet::Alphabet) -> Self {
        Self(vec![0u32; alphabet.len() as usize].into_boxed_slice())
    }

    pub fn from_tiles(alphabet: &alphabet::Alphabet, tiles: &[u8]) -> Self {
        let mut hand = Self::new(alphabet);
        for &tile in tiles {
            hand.0[tile as usize] += 1;
        }
        hand
    }

    // ceil(n/3) vowels, the rest consonants, each uniformly picked from its set,
    // then the jokers on top when n > 0.
    pub fn deal(
        alphabet: &alphabet::Alphabet,
        rng: &mut dyn RngCore,
        n: usize,
        num_jokers: u8,
    ) -> Self {
        let vowels = alphabet.vowels().collect::<Vec<_>>();
        let consonants = alphabet.consonants().collect::<Vec<_>>();
        let num_vowels = n.div_ceil(3);
        let mut hand = Self::new(alphabet);
        for i in 0..n {
            let pool = if i < num_vowels { &vowels } else { &consonants };
            if let Some(&tile) = pool.choose(rng) {
                hand.0[tile as usize] += 1;
            }
        }
        if n > 0 {
            hand.0[alphabet::JOKER as usize] += num_jokers as u32;
        }
        hand
    }

    #[inline(always)]
    pub fn count(&self, tile: u8) -> u32 {
        self.0.get(tile as usize).copied().unwrap_or(0)
    }

    #[inline(always)]
    pub fn tally(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    // tiles in alphabet order, with repeats.
    pub fn tiles(&self) -> Vec<u8> {
        let mut v = Vec::with_capacity(self.len());
        for (tile, &count) in (0u8..).zip(self.0.iter()) {
            for _ in 0..count {
                v.push(tile);
            }
        }
        v
    }

    // letters in the word that are not (or no longer) in the hand are ignored.
    pub fn played(&self, word: &[u8]) -> Self {
        let mut new_hand = self.clone();
        for &tile in word {
            if let Some(count) = new_hand.0.get_mut(tile as usize) {
                *count = count.saturating_sub(1);
            }
        }
        new_hand
    }

    pub fn can_supply(&self, word: &[u8]) -> bool {
        let mut needed = vec![0u32; self.0.len()];
        for &tile in word {
            match needed.get_mut(tile as usize) {
                Some(n) => *n += 1,
                None => return false,
            }
        }
        needed.iter().zip(self.0.iter()).all(|(n, have)| n <= have)
    }

    // all copies of letter become one letter that the hand does not hold yet.
    // None (hand unchanged) if there is nothing to replace or nothing to replace it with.
    pub fn substitute(
        &self,
        alphabet: &alphabet::Alphabet,
        rng: &mut dyn RngCore,
        letter: u8,
    ) -> Option<(u8, Self)> {
        if letter == alphabet::JOKER || self.count(letter) == 0 {
            return None;
        }
        let unused = (1..alphabet.len())
            .filter(|&tile| self.count(tile) == 0)
            .collect::<Vec<_>>();
        let &new_letter = unused.choose(rng)?;
        let mut new_hand = self.clone();
        new_hand.0[new_letter as usize] = self.0[letter as usize];
        new_hand.0[letter as usize] = 0;
        Some((new_letter, new_hand))
    }

    pub fn fmt_hand<'a>(&'a self, alphabet: &'a alphabet::Alphabet<'a>) -> HandDisplay<'a> {
        HandDisplay {
            alphabet,
            hand: self,
        }
    }
}

pub struct HandDisplay<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    hand: &'a Hand,
}

// letters first, jokers last, like "a x x l l l e *".
impl std::fmt::Display for HandDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tiles = self.hand.tiles();
        let ordered = tiles
            .iter()
            .filter(|&&tile| tile != alphabet::JOKER)
            .chain(tiles.iter().filter(|&&tile| tile == alphabet::JOKER));
        for (i, &tile) in ordered.enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self.alphabet.label(tile).unwrap_or("?"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_of(alphabet: &alphabet::Alphabet, s: &str) -> Hand {
        Hand::from_tiles(alphabet, &alphabet.parse_word(s).unwrap())
    }

    #[test]
    fn test_deal_has_vowel_share_and_one_joker() {
        let alphabet = alphabet::make_english_alphabet();
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
        for _ in 0..200 {
            let hand = Hand::deal(&alphabet, &mut rng, 7, 1);
            assert_eq!(hand.count(alphabet::JOKER), 1);
            assert_eq!(hand.len(), 8);
            let vowels = alphabet.vowels().map(|v| hand.count(v)).sum::<u32>();
            let consonants = alphabet.consonants().map(|c| hand.count(c)).sum::<u32>();
            assert_eq!(vowels, 3);
            assert_eq!(consonants, 4);
        }
    }

    #[test]
    fn test_deal_empty_hand_has_no_joker() {
        let alphabet = alphabet::make_english_alphabet();
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(8);
        let hand = Hand::deal(&alphabet, &mut rng, 0, 1);
        assert!(hand.is_empty());
        assert_eq!(hand.len(), 0);
    }

    #[test]
    fn test_deal_is_deterministic_for_a_seed() {
        let alphabet = alphabet::make_english_alphabet();
        let a = Hand::deal(
            &alphabet,
            &mut rand_chacha::ChaCha20Rng::seed_from_u64(9),
            10,
            1,
        );
        let b = Hand::deal(
            &alphabet,
            &mut rand_chacha::ChaCha20Rng::seed_from_u64(9),
            10,
            1,
        );
        assert_eq!(a, b);
        assert_eq!(a.len(), 11);
    }

    #[test]
    fn test_played_never_goes_negative_and_is_pure() {
        let alphabet = alphabet::make_english_alphabet();
        let hand = hand_of(&alphabet, "quail");
        let before = hand.clone();
        let after = hand.played(&alphabet.parse_word("quaaailzz").unwrap());
        assert_eq!(hand, before);
        assert!(after.is_empty());
        assert!(after.tally().iter().all(|&c| c == 0));

        let after = hand.played(&alphabet.parse_word("ail").unwrap());
        assert_eq!(after, hand_of(&alphabet, "qu"));
    }

    #[test]
    fn test_can_supply_counts_multiplicity() {
        let alphabet = alphabet::make_english_alphabet();
        let hand = hand_of(&alphabet, "hello*");
        assert!(hand.can_supply(&alphabet.parse_word("hell").unwrap()));
        assert!(hand.can_supply(&alphabet.parse_word("h*llo").unwrap()));
        assert!(!hand.can_supply(&alphabet.parse_word("helllo").unwrap()));
        assert!(!hand.can_supply(&alphabet.parse_word("h**").unwrap()));
        assert!(hand.can_supply(&[]));
    }

    #[test]
    fn test_substitute_replaces_all_copies_with_unused_letter() {
        let alphabet = alphabet::make_english_alphabet();
        let hand = hand_of(&alphabet, "hello");
        let l = alphabet.tile_of('l').unwrap();
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(10);
        for _ in 0..50 {
            let (new_letter, new_hand) = hand.substitute(&alphabet, &mut rng, l).unwrap();
            assert_ne!(new_letter, alphabet::JOKER);
            assert_eq!(hand.count(new_letter), 0);
            assert_eq!(new_hand.count(new_letter), 2);
            assert_eq!(new_hand.count(l), 0);
            assert_eq!(new_hand.len(), hand.len());
        }
        assert_eq!(hand, hand_of(&alphabet, "hello"));
    }

    #[test]
    fn test_substitute_rejects_absent_letter_and_joker() {
        let alphabet = alphabet::make_english_alphabet();
        let hand = hand_of(&alphabet, "hel*");
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(11);
        assert_eq!(
            hand.substitute(&alphabet, &mut rng, alphabet.tile_of('z').unwrap()),
            None
        );
        assert_eq!(hand.substitute(&alphabet, &mut rng, alphabet::JOKER), None);
    }

    #[test]
    fn test_display_lists_jokers_last() {
        let alphabet = alphabet::make_english_alphabet();
        let hand = hand_of(&alphabet, "*xax");
        assert_eq!(hand.fmt_hand(&alphabet).to_string(), "a x x *");
        assert_eq!(Hand::new(&alphabet).fmt_hand(&alphabet).to_string(), "");
    }
}
