// Copyright (C) 2020-2024 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod display;
pub mod game_config;
pub mod game_series;
pub mod hand;
pub mod hand_session;
pub mod interact;
pub mod lexicon;
pub mod play_scorer;
pub mod rlhelper;
