// Copyright (C) 2020-2024 Andy Kurnia.

use rand::prelude::*;
use wordhand::{alphabet, bag, error};

// bag [seed]
fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    let mut rng: Box<dyn RngCore> = match args.get(1) {
        Some(s) => Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(s.parse()?)),
        None => Box::new(rand_chacha::ChaCha20Rng::from_os_rng()),
    };
    let alphabet = alphabet::make_english_alphabet();
    let mut bag = bag::TileBag::new(&alphabet, &mut *rng);
    println!("bag {:3}: {}", bag.len(), alphabet.fmt_tiles(bag.tiles()));

    let rack = bag.draw(7)?;
    println!("drew: {}", alphabet.fmt_tiles(&rack));
    let new_tiles = bag.exchange(&mut *rng, &rack[..3])?;
    println!(
        "exchanged {} for {}",
        alphabet.fmt_tiles(&rack[..3]),
        alphabet.fmt_tiles(&new_tiles)
    );
    println!("bag {:3}: {}", bag.len(), alphabet.fmt_tiles(bag.tiles()));

    let rest = bag.draw(bag.len())?;
    println!("drained {} tiles", rest.len());
    match bag.draw(4) {
        Ok(tiles) => println!("drew: {}", alphabet.fmt_tiles(&tiles)),
        Err(shortfall) => println!("{}", shortfall),
    }
    if let Err(err) = bag.exchange(&mut *rng, &rack[3..]) {
        println!("{}", err);
    }

    bag.return_tiles(&mut *rng, &rest);
    println!("bag {:3}: {}", bag.len(), alphabet.fmt_tiles(bag.tiles()));

    Ok(())
}
