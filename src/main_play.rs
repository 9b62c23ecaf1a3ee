// Copyright (C) 2020-2024 Andy Kurnia.

use rand::prelude::*;
use wordhand::{display, error, game_config, game_series, lexicon, rlhelper};

// play [words.txt] [hands] [seed]
fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    let wordlist_filename = args.get(1).map_or("words.txt", |s| s.as_str());
    let game_config = game_config::make_common_english_game_config();

    println!("Loading word list from file...");
    let lexicon = lexicon::Lexicon::load(game_config.alphabet(), wordlist_filename)?;
    println!(
        "   {} words loaded ({} skipped).",
        lexicon.len(),
        lexicon.num_skipped()
    );

    let mut input = rlhelper::ReadlineInput::new()?;
    let mut output = display::ConsoleOutput;

    let num_hands = match args.get(2) {
        Some(s) => s.parse::<u32>()?,
        None => match game_series::read_num_hands(&mut input, &mut output) {
            Some(num_hands) => num_hands,
            None => return Ok(()),
        },
    };
    let rng: Box<dyn RngCore> = match args.get(3) {
        Some(s) => Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(s.parse()?)),
        None => Box::new(rand_chacha::ChaCha20Rng::from_os_rng()),
    };

    let mut series = game_series::GameSeries::new(&game_config, &lexicon, rng, num_hands);
    series.run(&mut input, &mut output);
    if series.hand_scores().len() > 1 {
        println!("hand scores: {:?}", series.hand_scores());
    }

    Ok(())
}
