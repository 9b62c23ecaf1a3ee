// Copyright (C) 2020-2024 Andy Kurnia.

use super::{alphabet, error};
use rand::prelude::*;

// the bag ran out before the requested count was drawn.
// tiles holds whatever could still be drawn.
#[derive(Debug, PartialEq, Eq)]
pub struct Shortfall {
    pub tiles: Vec<u8>,
    pub wanted: usize,
}

impl std::fmt::Display for Shortfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.tiles.is_empty() {
            write!(f, "no tiles left in the bag ({} wanted)", self.wanted)
        } else {
            write!(
                f,
                "insufficient tiles: drew {} of {} wanted",
                self.tiles.len(),
                self.wanted
            )
        }
    }
}

impl std::error::Error for Shortfall {}

// invariant: always shuffled after a bulk mutation, so pop() is a uniform draw.
pub struct TileBag(Vec<u8>);

impl TileBag {
    pub fn new(alphabet: &alphabet::Alphabet, rng: &mut dyn RngCore) -> TileBag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for tile in 0..alphabet.len() {
            for _ in 0..alphabet.freq(tile) {
                bag.push(tile);
            }
        }
        let mut bag = TileBag(bag);
        bag.shuffle(rng);
        bag
    }

    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.0.shuffle(rng);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.0
    }

    pub fn draw(&mut self, count: usize) -> Result<Vec<u8>, Shortfall> {
        let available = std::cmp::min(count, self.0.len());
        let tiles = self.0.split_off(self.0.len() - available);
        if available < count {
            Err(Shortfall {
                tiles,
                wanted: count,
            })
        } else {
            Ok(tiles)
        }
    }

    pub fn return_tiles(&mut self, rng: &mut dyn RngCore, tiles: &[u8]) {
        if tiles.is_empty() {
            return;
        }
        self.0.extend_from_slice(tiles);
        self.shuffle(rng);
    }

    // draw replacements first so the returned tiles cannot come straight back.
    pub fn exchange(&mut self, rng: &mut dyn RngCore, tiles: &[u8]) -> error::Returns<Vec<u8>> {
        if self.0.is_empty() {
            return_error!(Bag, "the bag is empty".into());
        }
        if tiles.len() >= self.0.len() {
            return_error!(
                Bag,
                format!(
                    "cannot exchange {} tiles, the bag only has {}",
                    tiles.len(),
                    self.0.len()
                )
            );
        }
        let new_tiles = self.draw(tiles.len())?;
        self.return_tiles(rng, tiles);
        Ok(new_tiles)
    }
}

impl Clone for TileBag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}
