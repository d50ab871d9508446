//! The clickable A-Z letter grid.

use glam::Vec2;

use crate::game::layout::{letter_center, LETTER_RADIUS};

/// Number of letter buttons (A-Z).
pub const LETTER_COUNT: usize = 26;

/// A round, clickable letter. Hidden once guessed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterButton {
    pub position: Vec2,
    pub letter: char,
    pub visible: bool,
}

impl LetterButton {
    /// Whether `point` lies strictly inside the button circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance(point) < LETTER_RADIUS
    }
}

/// All 26 letter buttons, created once and reused across rounds.
#[derive(Debug, Clone)]
pub struct LetterGrid {
    buttons: Vec<LetterButton>,
}

impl Default for LetterGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterGrid {
    pub fn new() -> Self {
        let buttons = ('A'..='Z')
            .enumerate()
            .map(|(index, letter)| LetterButton {
                position: letter_center(index),
                letter,
                visible: true,
            })
            .collect();
        Self { buttons }
    }

    pub fn buttons(&self) -> &[LetterButton] {
        &self.buttons
    }

    pub fn visible(&self) -> impl Iterator<Item = &LetterButton> {
        self.buttons.iter().filter(|button| button.visible)
    }

    /// The visible letter whose button is under `point`, if any.
    pub fn hit_test(&self, point: Vec2) -> Option<char> {
        self.visible()
            .find(|button| button.contains(point))
            .map(|button| button.letter)
    }

    pub fn is_visible(&self, letter: char) -> bool {
        self.get(letter).is_some_and(|button| button.visible)
    }

    /// Hide the button for `letter`. Returns false if it was already hidden
    /// or is not a letter.
    pub fn hide(&mut self, letter: char) -> bool {
        match self.get_mut(letter) {
            Some(button) if button.visible => {
                button.visible = false;
                true
            }
            _ => false,
        }
    }

    pub fn show_all(&mut self) {
        for button in &mut self.buttons {
            button.visible = true;
        }
    }

    fn index_of(letter: char) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| (letter as u8 - b'A') as usize)
    }

    fn get(&self, letter: char) -> Option<&LetterButton> {
        Self::index_of(letter).and_then(|index| self.buttons.get(index))
    }

    fn get_mut(&mut self, letter: char) -> Option<&mut LetterButton> {
        Self::index_of(letter).and_then(|index| self.buttons.get_mut(index))
    }
}
