// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod board;
pub mod board_layout;
pub mod dictionary;
pub mod display;
pub mod fash;
pub mod game_config;
pub mod hand;
pub mod kibitzer;
pub mod matrix;
pub mod movegen;
pub mod play_scorer;
