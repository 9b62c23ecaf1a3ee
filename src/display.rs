// Copyright (C) 2020-2024 Andy Kurnia.

use super::interact;

// Human-readable console rendering of engine events.
#[derive(Default)]
pub struct ConsoleOutput;

pub fn describe(event: &interact::Event) -> String {
    match event {
        interact::Event::Dealt { hand, replay } => {
            if *replay {
                format!("Replaying with a fresh hand: {}", hand)
            } else {
                format!("Dealt: {}", hand)
            }
        }
        interact::Event::BagShort { wanted, drawn } => {
            if *drawn == 0 {
                format!("Bag is empty and doesn't contain anymore tiles! ({} wanted)", wanted)
            } else {
                format!("Bag only had {} of the {} tiles wanted.", drawn, wanted)
            }
        }
        interact::Event::CurrentHand { hand } => format!("Current hand: {}", hand),
        interact::Event::Substituted {
            old_letter,
            new_letter,
            hand,
        } => format!("Replaced {} with {}: {}", old_letter, new_letter, hand),
        interact::Event::SubstitutionFailed { letter } => {
            format!("Cannot replace {}, the hand is unchanged.", letter)
        }
        interact::Event::InvalidInput { input } => format!("Not a valid input: {:?}", input),
        interact::Event::WordPlayed {
            word,
            points,
            total,
        } => format!("\"{}\" earned {} points. Total: {}", word, points, total),
        interact::Event::WordRejected { .. } => {
            "This is not a valid word. Please choose another word.".to_string()
        }
        interact::Event::HandFinished { score } => {
            format!("Total score for this hand: {}\n--------------", score)
        }
        interact::Event::ReplayKept {
            first,
            second,
            kept,
        } => format!("Kept {} (first try {}, replay {})", kept, first, second),
        interact::Event::SeriesFinished { total } => {
            format!("Total score over all hands: {}", total)
        }
    }
}

impl interact::Output for ConsoleOutput {
    fn emit(&mut self, event: interact::Event) {
        println!("{}", describe(&event));
    }
}
