// Copyright (C) 2020-2024 Andy Kurnia.

use super::alphabet;

pub enum DealSource {
    // ceil(n/3) vowels and the rest consonants, uniformly by letter.
    Alphabet,
    // weighted by the bag's remaining tiles; jokers only when drawn.
    Bag,
}

pub struct StaticGameConfig<'a> {
    deal_source: DealSource,
    alphabet: alphabet::Alphabet<'a>,
    hand_size: u8,
    num_jokers: u8,
    stop_command: &'a str,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn deal_source(&self) -> &DealSource {
        match self {
            GameConfig::Static(x) => &x.deal_source,
        }
    }

    #[inline(always)]
    pub fn hand_size(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.hand_size,
        }
    }

    // added on top of hand_size when dealing from the alphabet.
    #[inline(always)]
    pub fn num_jokers(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_jokers,
        }
    }

    #[inline(always)]
    pub fn stop_command(&self) -> &'a str {
        match self {
            GameConfig::Static(x) => x.stop_command,
        }
    }
}

pub fn make_common_english_game_config<'a>() -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        deal_source: DealSource::Alphabet,
        alphabet: alphabet::make_english_alphabet(),
        hand_size: 7,
        num_jokers: 1,
        stop_command: "!!",
    })
}

pub fn make_bag_dealt_english_game_config<'a>() -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        deal_source: DealSource::Bag,
        alphabet: alphabet::make_english_alphabet(),
        hand_size: 7,
        num_jokers: 0,
        stop_command: "!!",
    })
}
