//! Screen geometry in logical pixels.
//!
//! The layout is authored for an 800x500 window with the origin at the
//! top-left corner and y growing downwards.

use glam::Vec2;

use crate::game::subject::Subject;

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 500.0;

/// Radius of a letter button.
pub const LETTER_RADIUS: f32 = 20.0;
/// Space between neighbouring letter buttons.
pub const LETTER_GAP: f32 = 15.0;
/// Letter buttons per row.
pub const LETTERS_PER_ROW: usize = 13;
/// Centre line of the first letter row.
pub const LETTER_ROW_Y: f32 = 400.0;

/// Top-left corner of the hangman image.
pub const GALLOWS_ORIGIN: Vec2 = Vec2::new(100.0, 100.0);
/// Vertical position of the masked word.
pub const WORD_Y: f32 = 200.0;

pub const HINT_POPUP: Bounds = Bounds::new(250.0, 100.0, 300.0, 100.0);

/// Axis-aligned rectangle, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}

/// Buttons on the right side of the game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Hint,
    Quit,
    Restart,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Hint, Control::Quit, Control::Restart];

    pub fn label(self) -> &'static str {
        match self {
            Control::Hint => "Hint",
            Control::Quit => "Quit",
            Control::Restart => "Restart",
        }
    }

    pub fn bounds(self) -> Bounds {
        match self {
            Control::Hint => Bounds::new(600.0, 100.0, 100.0, 40.0),
            Control::Quit => Bounds::new(600.0, 160.0, 100.0, 40.0),
            Control::Restart => Bounds::new(600.0, 220.0, 100.0, 40.0),
        }
    }
}

/// Every control under `point`, in [`Control::ALL`] order.
pub fn controls_at(point: Vec2) -> impl Iterator<Item = Control> {
    Control::ALL
        .into_iter()
        .filter(move |control| control.bounds().contains(point))
}

/// Menu button for a subject.
pub fn subject_bounds(subject: Subject) -> Bounds {
    match subject {
        Subject::Science => Bounds::new(300.0, 200.0, 200.0, 50.0),
        Subject::Geography => Bounds::new(300.0, 270.0, 200.0, 50.0),
        Subject::English => Bounds::new(300.0, 340.0, 200.0, 50.0),
    }
}

/// The subject whose menu button is under `point`, if any.
pub fn subject_at(point: Vec2) -> Option<Subject> {
    Subject::ALL
        .into_iter()
        .find(|&subject| subject_bounds(subject).contains(point))
}

/// Centre of the letter button at `index` (0 = 'A').
pub fn letter_center(index: usize) -> Vec2 {
    let pitch = LETTER_RADIUS * 2.0 + LETTER_GAP;
    let start_x = ((SCREEN_WIDTH - pitch * LETTERS_PER_ROW as f32) / 2.0).round();
    let column = (index % LETTERS_PER_ROW) as f32;
    let row = (index / LETTERS_PER_ROW) as f32;
    Vec2::new(
        start_x + LETTER_GAP * 2.0 + pitch * column,
        LETTER_ROW_Y + row * pitch,
    )
}
