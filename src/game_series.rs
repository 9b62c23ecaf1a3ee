// Copyright (C) 2020-2024 Andy Kurnia.

use super::{bag, game_config, hand, hand_session, interact, lexicon};
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SeriesState {
    pub hands_remaining: u32,
    pub total_score: u32,
    // one-shot for the whole series, never reset.
    pub substitution_used: bool,
    pub replay_used: bool,
}

// None when input has ended, Some(true) for yes, Some(false) for no.
// anything else is reported and asked again.
fn ask_yes_no(
    input: &mut dyn interact::Input,
    output: &mut dyn interact::Output,
    prompt: &str,
) -> Option<bool> {
    loop {
        let line = input.next_input(prompt)?;
        match line.trim().to_lowercase().as_str() {
            "yes" => return Some(true),
            "no" => return Some(false),
            _ => output.emit(interact::Event::InvalidInput { input: line }),
        }
    }
}

pub fn read_num_hands(
    input: &mut dyn interact::Input,
    output: &mut dyn interact::Output,
) -> Option<u32> {
    loop {
        let line = input.next_input("Enter a number of hands: ")?;
        match line.trim().parse::<u32>() {
            Ok(num_hands) => return Some(num_hands),
            Err(_) => output.emit(interact::Event::InvalidInput { input: line }),
        }
    }
}

pub struct GameSeries<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    lexicon: &'a lexicon::Lexicon,
    rng: Box<dyn RngCore>,
    bag: bag::TileBag,
    state: SeriesState,
    hand_scores: Vec<u32>,
}

impl<'a> GameSeries<'a> {
    pub fn new(
        game_config: &'a game_config::GameConfig<'a>,
        lexicon: &'a lexicon::Lexicon,
        mut rng: Box<dyn RngCore>,
        num_hands: u32,
    ) -> Self {
        let bag = bag::TileBag::new(game_config.alphabet(), &mut *rng);
        Self {
            game_config,
            lexicon,
            rng,
            bag,
            state: SeriesState {
                hands_remaining: num_hands,
                total_score: 0,
                substitution_used: false,
                replay_used: false,
            },
            hand_scores: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn state(&self) -> &SeriesState {
        &self.state
    }

    #[inline(always)]
    pub fn bag(&self) -> &bag::TileBag {
        &self.bag
    }

    // one entry per real hand, after any replay.
    #[inline(always)]
    pub fn hand_scores(&self) -> &[u32] {
        &self.hand_scores
    }

    pub fn run(
        &mut self,
        input: &mut dyn interact::Input,
        output: &mut dyn interact::Output,
    ) -> u32 {
        while self.state.hands_remaining > 0 {
            let score = self.play_one_hand(input, output);
            self.hand_scores.push(score);
            self.state.total_score += score;
            self.state.hands_remaining -= 1;
        }
        output.emit(interact::Event::SeriesFinished {
            total: self.state.total_score,
        });
        self.state.total_score
    }

    fn play_one_hand(
        &mut self,
        input: &mut dyn interact::Input,
        output: &mut dyn interact::Output,
    ) -> u32 {
        let game_config = self.game_config;
        let hand_size = game_config.hand_size() as usize;

        let mut hand = self.deal(output, false);
        if !self.state.substitution_used {
            hand = self.offer_substitution(input, output, hand);
        }
        let first = hand_session::HandSession::new(game_config, self.lexicon, hand, hand_size)
            .play(input, output);

        if self.state.replay_used {
            return first;
        }
        match ask_yes_no(input, output, "Would you like to replay the hand? ") {
            Some(true) => {
                self.state.replay_used = true;
                let hand = self.deal(output, true);
                let second =
                    hand_session::HandSession::new(game_config, self.lexicon, hand, hand_size)
                        .play(input, output);
                let kept = std::cmp::max(first, second);
                output.emit(interact::Event::ReplayKept {
                    first,
                    second,
                    kept,
                });
                kept
            }
            Some(false) => {
                self.state.replay_used = true;
                first
            }
            None => first,
        }
    }

    fn deal(&mut self, output: &mut dyn interact::Output, replay: bool) -> hand::Hand {
        let game_config = self.game_config;
        let alphabet = game_config.alphabet();
        let hand_size = game_config.hand_size() as usize;
        let hand = match game_config.deal_source() {
            game_config::DealSource::Alphabet => {
                hand::Hand::deal(alphabet, &mut *self.rng, hand_size, game_config.num_jokers())
            }
            game_config::DealSource::Bag => {
                let tiles = match self.bag.draw(hand_size) {
                    Ok(tiles) => tiles,
                    Err(shortfall) => {
                        output.emit(interact::Event::BagShort {
                            wanted: shortfall.wanted,
                            drawn: shortfall.tiles.len(),
                        });
                        shortfall.tiles
                    }
                };
                hand::Hand::from_tiles(alphabet, &tiles)
            }
        };
        output.emit(interact::Event::Dealt {
            hand: hand.fmt_hand(alphabet).to_string(),
            replay,
        });
        hand
    }

    // an explicit yes or no uses up the option, even if the letter turns out unusable.
    fn offer_substitution(
        &mut self,
        input: &mut dyn interact::Input,
        output: &mut dyn interact::Output,
        hand: hand::Hand,
    ) -> hand::Hand {
        match ask_yes_no(input, output, "Would you like to substitute a letter? ") {
            Some(true) => self.state.substitution_used = true,
            Some(false) => {
                self.state.substitution_used = true;
                return hand;
            }
            None => return hand,
        }
        let Some(line) = input.next_input("Which letter would you like to replace? ") else {
            return hand;
        };
        let game_config = self.game_config;
        let alphabet = game_config.alphabet();
        let mut chars = line.trim().chars();
        let tile = match (chars.next(), chars.next()) {
            (Some(c), None) => alphabet.tile_of(c),
            _ => None,
        };
        let Some(tile) = tile else {
            output.emit(interact::Event::InvalidInput { input: line });
            return hand;
        };
        match hand.substitute(alphabet, &mut *self.rng, tile) {
            Some((new_tile, new_hand)) => {
                output.emit(interact::Event::Substituted {
                    old_letter: alphabet.fmt_tiles(&[tile]),
                    new_letter: alphabet.fmt_tiles(&[new_tile]),
                    hand: new_hand.fmt_hand(alphabet).to_string(),
                });
                new_hand
            }
            None => {
                output.emit(interact::Event::SubstitutionFailed {
                    letter: alphabet.fmt_tiles(&[tile]),
                });
                hand
            }
        }
    }
}
