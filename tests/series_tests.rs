//! Series tests - scripted players against seeded deals

use rand::prelude::*;
use wordhand::{alphabet, bag, game_config, game_series, hand, interact, lexicon, play_scorer};

// Replays the series' use of the generator: the bag shuffle, then the deals.
fn predict_deals(
    game_config: &game_config::GameConfig,
    seed: u64,
    count: usize,
) -> Vec<hand::Hand> {
    let alphabet = game_config.alphabet();
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
    bag::TileBag::new(alphabet, &mut rng);
    (0..count)
        .map(|_| {
            hand::Hand::deal(
                alphabet,
                &mut rng,
                game_config.hand_size() as usize,
                game_config.num_jokers(),
            )
        })
        .collect()
}

// all the letters of the hand, jokers left out.
fn letters_of(alphabet: &alphabet::Alphabet, hand: &hand::Hand) -> String {
    let letters = hand
        .tiles()
        .into_iter()
        .filter(|&tile| tile != alphabet::JOKER)
        .collect::<Vec<_>>();
    alphabet.fmt_tiles(&letters)
}

fn play_series(
    game_config: &game_config::GameConfig,
    words: &[String],
    seed: u64,
    num_hands: u32,
    script: &[&str],
) -> (u32, Vec<u32>, interact::EventLog) {
    let lexicon = lexicon::Lexicon::from_words(game_config.alphabet(), words);
    let mut series = game_series::GameSeries::new(
        game_config,
        &lexicon,
        Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(seed)),
        num_hands,
    );
    let mut input = interact::ScriptedInput::new(script.iter().copied());
    let mut output = interact::EventLog::default();
    let total = series.run(&mut input, &mut output);
    assert_eq!(series.state().total_score, total);
    (total, series.hand_scores().to_vec(), output)
}

#[test]
fn test_playing_whole_hand_scores_full_multiplier() {
    let game_config = game_config::make_common_english_game_config();
    let alphabet = game_config.alphabet();
    let deals = predict_deals(&game_config, 21, 1);
    let word = letters_of(alphabet, &deals[0]);
    assert_eq!(word.len(), 7);
    let expected = play_scorer::word_score_str(alphabet, &word, 7).unwrap();

    let (total, hand_scores, output) = play_series(
        &game_config,
        &[word.clone()],
        21,
        1,
        &["no", &word, "!!", "no"],
    );
    assert_eq!(total, expected);
    assert_eq!(hand_scores, vec![expected]);
    assert!(output.0.contains(&interact::Event::WordPlayed {
        word: word.clone(),
        points: expected,
        total: expected
    }));
    // only the joker is left after the word.
    assert!(output
        .0
        .contains(&interact::Event::CurrentHand { hand: "*".into() }));
}

#[test]
fn test_replay_keeps_the_better_score() {
    let game_config = game_config::make_common_english_game_config();
    let alphabet = game_config.alphabet();
    let deals = predict_deals(&game_config, 22, 2);
    let first_word = letters_of(alphabet, &deals[0]);
    let second_word = letters_of(alphabet, &deals[1]);
    let first = play_scorer::word_score_str(alphabet, &first_word, 7).unwrap();
    let second = play_scorer::word_score_str(alphabet, &second_word, 7).unwrap();
    let words = [first_word.clone(), second_word.clone()];

    // replay that scores nothing does not lose the first score.
    let (total, _, output) = play_series(
        &game_config,
        &words,
        22,
        1,
        &["no", &first_word, "!!", "yes", "!!"],
    );
    assert_eq!(total, first);
    assert!(output.0.contains(&interact::Event::ReplayKept {
        first,
        second: 0,
        kept: first
    }));

    // replay on the fresh deal.
    let (total, hand_scores, _) = play_series(
        &game_config,
        &words,
        22,
        1,
        &["no", "!!", "yes", &second_word, "!!"],
    );
    assert_eq!(total, second);
    assert_eq!(hand_scores, vec![second]);
}

#[test]
fn test_substitution_changes_the_hand_before_play() {
    let game_config = game_config::make_common_english_game_config();
    let alphabet = game_config.alphabet();
    let deals = predict_deals(&game_config, 23, 1);
    let old_hand = &deals[0];
    let letter = alphabet.fmt_tiles(&old_hand.tiles()[1..2]);
    let letter_tile = alphabet.tile_of(letter.chars().next().unwrap()).unwrap();
    assert_ne!(letter_tile, alphabet::JOKER);

    let (_, _, output) = play_series(
        &game_config,
        &[],
        23,
        2,
        &["yes", &letter.to_uppercase(), "!!", "no", "!!"],
    );
    let substituted = output
        .0
        .iter()
        .find_map(|e| match e {
            interact::Event::Substituted {
                old_letter,
                new_letter,
                hand,
            } => Some((old_letter.clone(), new_letter.clone(), hand.clone())),
            _ => None,
        })
        .unwrap();
    assert_eq!(substituted.0, letter);
    let new_tile = alphabet.tile_of(substituted.1.chars().next().unwrap()).unwrap();
    assert_eq!(old_hand.count(new_tile), 0);
    assert!(!substituted.2.split(' ').any(|l| l == letter));
    // the session plays the substituted hand.
    assert!(output
        .0
        .contains(&interact::Event::CurrentHand { hand: substituted.2 }));
}

#[test]
fn test_one_offer_each_regardless_of_hand_count() {
    let game_config = game_config::make_common_english_game_config();
    for num_hands in 1..6 {
        let mut script = vec!["no", "!!", "no"];
        script.extend(std::iter::repeat_n("!!", num_hands - 1));
        let lexicon = lexicon::Lexicon::from_words(game_config.alphabet(), ["cat"]);
        let mut series = game_series::GameSeries::new(
            &game_config,
            &lexicon,
            Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(24)),
            num_hands as u32,
        );
        let mut input = interact::ScriptedInput::new(script);
        let mut output = interact::EventLog::default();
        series.run(&mut input, &mut output);
        let offers = input
            .prompts()
            .iter()
            .filter(|p| p.starts_with("Would you like"))
            .count();
        assert_eq!(offers, 2);
        assert_eq!(series.hand_scores().len(), num_hands);
        assert_eq!(input.remaining(), 0);
    }
}
