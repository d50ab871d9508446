//! Hangman - Single-screen word-guessing game

pub mod core;
pub mod game;
pub mod renderer;
pub mod ui;
