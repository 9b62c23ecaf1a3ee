// Copyright (C) 2020-2024 Andy Kurnia.

use rand::prelude::*;
use wordhand::{error, game_config, game_series, interact, lexicon};

// lexicon: the words that count as valid plays.
// seed: makes the deals reproducible.
// hands: number of hands in the series.
// inputs: every line the player would type, in order, including
//   yes/no answers and the letter to substitute.
// deal_from_bag: draw hands from the weighted tile bag instead.
#[derive(serde::Deserialize)]
struct Question {
    lexicon: Vec<String>,
    seed: u64,
    hands: u32,
    inputs: Vec<String>,
    #[serde(default)]
    deal_from_bag: bool,
}

#[derive(serde::Serialize)]
struct Answer<'a> {
    total: u32,
    hand_scores: &'a [u32],
    state: &'a game_series::SeriesState,
    unused_inputs: usize,
    events: &'a [interact::Event],
}

pub fn main() -> error::Returns<()> {
    let data = r#"
      {
        "lexicon": [ "a", "at", "cat", "cot", "hello", "jab", "quail", "tea", "toe" ],
        "seed": 12345,
        "hands": 2,
        "inputs": [
          "no",
          "cat", "tea", "!!",
          "yes",
          "toe", "!!",
          "!!"
        ]
      }
    "#;
    let args = std::env::args().collect::<Vec<_>>();
    let question = match args.get(1) {
        Some(filename) => serde_json::from_str::<Question>(&std::fs::read_to_string(filename)?)?,
        None => serde_json::from_str::<Question>(data)?,
    };

    let game_config = if question.deal_from_bag {
        game_config::make_bag_dealt_english_game_config()
    } else {
        game_config::make_common_english_game_config()
    };
    let lexicon = lexicon::Lexicon::from_words(game_config.alphabet(), &question.lexicon);
    if lexicon.num_skipped() > 0 {
        wordhand::return_error!(
            Question,
            format!("lexicon: {} entries are not plain words", lexicon.num_skipped())
        );
    }

    let mut series = game_series::GameSeries::new(
        &game_config,
        &lexicon,
        Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(question.seed)),
        question.hands,
    );
    let mut input = interact::ScriptedInput::new(question.inputs);
    let mut output = interact::EventLog::default();
    let total = series.run(&mut input, &mut output);

    let answer = Answer {
        total,
        hand_scores: series.hand_scores(),
        state: series.state(),
        unused_inputs: input.remaining(),
        events: &output.0,
    };
    println!("{}", serde_json::to_string_pretty(&answer)?);

    Ok(())
}
