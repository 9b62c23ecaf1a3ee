// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, game_config, hand, interact, lexicon, play_scorer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Stopped,
    Played { word: String, points: u32, total: u32 },
    Rejected { word: String },
}

// Plays one hand. Only valid words use up tiles.
pub struct HandSession<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    lexicon: &'a lexicon::Lexicon,
    stop_command: &'a str,
    hand: hand::Hand,
    hand_size: usize,
    score: u32,
    state: SessionState,
}

impl<'a> HandSession<'a> {
    // hand_size is the scoring n, fixed for the whole session.
    pub fn new(
        game_config: &'a game_config::GameConfig<'a>,
        lexicon: &'a lexicon::Lexicon,
        hand: hand::Hand,
        hand_size: usize,
    ) -> Self {
        let state = if hand.is_empty() {
            SessionState::Finished
        } else {
            SessionState::Active
        };
        Self {
            alphabet: game_config.alphabet(),
            lexicon,
            stop_command: game_config.stop_command(),
            hand,
            hand_size,
            score: 0,
            state,
        }
    }

    #[inline(always)]
    pub fn hand(&self) -> &hand::Hand {
        &self.hand
    }

    #[inline(always)]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline(always)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline(always)]
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    // a finished session ignores further input.
    pub fn submit(&mut self, input: &str) -> Turn {
        if self.is_finished() {
            return Turn::Stopped;
        }
        let word = input.trim();
        if word == self.stop_command {
            self.state = SessionState::Finished;
            return Turn::Stopped;
        }
        let tiles = match self.alphabet.parse_word(word) {
            Some(tiles)
                if lexicon::is_valid_word(self.alphabet, &tiles, &self.hand, self.lexicon) =>
            {
                tiles
            }
            _ => {
                return Turn::Rejected {
                    word: word.to_string(),
                };
            }
        };
        let points = play_scorer::word_score(self.alphabet, &tiles, self.hand_size);
        self.score += points;
        self.hand = self.hand.played(&tiles);
        if self.hand.is_empty() {
            self.state = SessionState::Finished;
        }
        Turn::Played {
            word: word.to_string(),
            points,
            total: self.score,
        }
    }

    // runs until the hand is used up, the player stops, or input ends.
    pub fn play(&mut self, input: &mut dyn interact::Input, output: &mut dyn interact::Output) -> u32 {
        let stop_command = self.stop_command;
        let prompt = format!(
            "Enter word, or \"{}\" to indicate that you are finished: ",
            stop_command
        );
        while !self.is_finished() {
            output.emit(interact::Event::CurrentHand {
                hand: self.hand.fmt_hand(self.alphabet).to_string(),
            });
            let turn = match input.next_input(&prompt) {
                Some(line) => self.submit(&line),
                None => self.submit(stop_command),
            };
            match turn {
                Turn::Stopped => {}
                Turn::Played {
                    word,
                    points,
                    total,
                } => output.emit(interact::Event::WordPlayed {
                    word,
                    points,
                    total,
                }),
                Turn::Rejected { word } => output.emit(interact::Event::WordRejected { word }),
            }
        }
        output.emit(interact::Event::HandFinished { score: self.score });
        self.score
    }
}
