// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, error, hand};

// sorted and deduplicated, so membership is a binary search.
pub struct Lexicon {
    words: Box<[Box<[u8]>]>,
    num_skipped: usize,
}

impl Lexicon {
    pub fn from_machine_words(mut machine_words: Vec<Box<[u8]>>) -> Self {
        machine_words.sort_unstable();
        machine_words.dedup();
        Self {
            words: machine_words.into_boxed_slice(),
            num_skipped: 0,
        }
    }

    // one word per line. lines are trimmed and lowercased, blank lines skipped.
    // lines that are not plain a-z words are skipped and counted.
    pub fn from_text(alphabet: &alphabet::Alphabet, giant_string: &str) -> Self {
        let mut machine_words = Vec::new();
        let mut num_skipped = 0;
        for line in giant_string.lines() {
            let s = line.trim();
            if s.is_empty() {
                continue;
            }
            match alphabet.parse_word(s) {
                Some(v) if !v.contains(&alphabet::JOKER) => {
                    machine_words.push(v.into_boxed_slice());
                }
                _ => num_skipped += 1,
            }
        }
        let mut lexicon = Self::from_machine_words(machine_words);
        lexicon.num_skipped = num_skipped;
        lexicon
    }

    pub fn from_words<I: IntoIterator<Item = S>, S: AsRef<str>>(
        alphabet: &alphabet::Alphabet,
        words: I,
    ) -> Self {
        let mut giant_string = String::new();
        for word in words {
            giant_string.push_str(word.as_ref());
            giant_string.push('\n');
        }
        Self::from_text(alphabet, &giant_string)
    }

    pub fn load(alphabet: &alphabet::Alphabet, filename: &str) -> error::Returns<Self> {
        let lexicon = Self::from_text(alphabet, &std::fs::read_to_string(filename)?);
        if lexicon.is_empty() {
            return_error!(Lexicon, format!("no words in {}", filename));
        }
        Ok(lexicon)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    // non-blank lines that were not loaded.
    #[inline(always)]
    pub fn num_skipped(&self) -> usize {
        self.num_skipped
    }

    #[inline(always)]
    pub fn contains(&self, word: &[u8]) -> bool {
        self.words.binary_search_by(|w| (**w).cmp(word)).is_ok()
    }
}

// the hand must hold every tile of the word. each joker stands for a vowel,
// and all jokers in one word stand for the same vowel.
pub fn is_valid_word(
    alphabet: &alphabet::Alphabet,
    word: &[u8],
    hand: &hand::Hand,
    lexicon: &Lexicon,
) -> bool {
    if !hand.can_supply(word) {
        return false;
    }
    if !word.contains(&alphabet::JOKER) {
        return lexicon.contains(word);
    }
    let mut candidate = word.to_vec();
    alphabet.vowels().any(|vowel| {
        for (c, &tile) in candidate.iter_mut().zip(word) {
            if tile == alphabet::JOKER {
                *c = vowel;
            }
        }
        lexicon.contains(&candidate)
    })
}
