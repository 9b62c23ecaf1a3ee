// Copyright (C) 2020-2024 Andy Kurnia.

use super::alphabet;

// sum of face values, times max(1, 7*len - 3*(hand_size - len)).
// hand_size is the size the hand was dealt at, not what is left of it.
pub fn word_score(alphabet: &alphabet::Alphabet, word: &[u8], hand_size: usize) -> u32 {
    let face_value = word
        .iter()
        .map(|&tile| alphabet.score(tile) as i64)
        .sum::<i64>();
    let word_len = word.len() as i64;
    let multiplier = std::cmp::max(1, 7 * word_len - 3 * (hand_size as i64 - word_len));
    (face_value * multiplier) as u32
}

pub fn word_score_str(alphabet: &alphabet::Alphabet, word: &str, hand_size: usize) -> Option<u32> {
    Some(word_score(alphabet, &alphabet.parse_word(word)?, hand_size))
}
