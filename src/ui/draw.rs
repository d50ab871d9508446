//! Painting of every screen with the egui painter.
//!
//! Positions come from [`crate::game::layout`]; egui points map 1:1 to the
//! logical pixels used there.

use egui::{pos2, Align2, Color32, FontId, Painter, Pos2, Rect, Rounding, Stroke};
use glam::Vec2;

use crate::game::layout::{self, Bounds, Control, GALLOWS_ORIGIN, HINT_POPUP, LETTER_RADIUS};
use crate::game::{Banner, GameState, Session, Subject};
use crate::ui::state::GameUi;

const INK: Color32 = Color32::BLACK;
const PAPER: Color32 = Color32::WHITE;

const TITLE_SIZE: f32 = 48.0;
const WORD_SIZE: f32 = 40.0;
const LETTER_SIZE: f32 = 24.0;
const BUTTON_SIZE: f32 = 18.0;
const BANNER_SIZE: f32 = 36.0;

fn to_pos2(v: Vec2) -> Pos2 {
    pos2(v.x, v.y)
}

fn to_rect(bounds: Bounds) -> Rect {
    Rect::from_min_max(to_pos2(bounds.min), to_pos2(bounds.max()))
}

/// Draw the whole window for the current session phase
pub fn draw_ui(ctx: &egui::Context, ui: &GameUi, session: &Session) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(PAPER))
        .show(ctx, |panel| {
            let painter = panel.painter();

            if let Some(banner) = session.visible_banner() {
                draw_banner(painter, banner);
            } else if let Some(state) = session.state() {
                draw_board(painter, ui, state);
            } else {
                draw_subject_menu(painter);
            }
        });
}

fn draw_button(painter: &Painter, bounds: Bounds, label: &str) {
    let rect = to_rect(bounds);
    painter.rect_filled(rect, Rounding::same(5.0), INK);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(BUTTON_SIZE),
        PAPER,
    );
}

fn draw_subject_menu(painter: &Painter) {
    painter.text(
        pos2(layout::SCREEN_WIDTH / 2.0, 50.0),
        Align2::CENTER_TOP,
        "Select a Subject",
        FontId::proportional(TITLE_SIZE),
        INK,
    );

    for subject in Subject::ALL {
        draw_button(painter, layout::subject_bounds(subject), subject.label());
    }
}

fn draw_board(painter: &Painter, ui: &GameUi, state: &GameState) {
    painter.text(
        pos2(layout::SCREEN_WIDTH / 2.0, 20.0),
        Align2::CENTER_TOP,
        "HANGMAN GAME",
        FontId::proportional(TITLE_SIZE),
        INK,
    );

    painter.text(
        pos2(layout::SCREEN_WIDTH / 2.0, layout::WORD_Y),
        Align2::CENTER_TOP,
        state.masked_word(),
        FontId::proportional(WORD_SIZE),
        INK,
    );

    for button in state.letters().visible() {
        let center = to_pos2(button.position);
        painter.circle_stroke(center, LETTER_RADIUS, Stroke::new(3.0, INK));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            button.letter,
            FontId::proportional(LETTER_SIZE),
            INK,
        );
    }

    for control in Control::ALL {
        draw_button(painter, control.bounds(), control.label());
    }

    if let Some(texture) = ui.stage_texture(state.wrong_guesses()) {
        let rect = Rect::from_min_size(to_pos2(GALLOWS_ORIGIN), texture.size_vec2());
        painter.image(
            texture.id(),
            rect,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    // Popup goes last so the gallows image never covers it
    if state.hint_visible() {
        draw_hint(painter, &state.hint());
    }
}

fn draw_hint(painter: &Painter, hint: &str) {
    let rect = to_rect(HINT_POPUP);
    painter.rect_filled(rect, Rounding::ZERO, PAPER);
    painter.rect_stroke(rect, Rounding::ZERO, Stroke::new(3.0, INK));

    let galley = painter.layout(
        format!("Hint: {hint}"),
        FontId::proportional(BUTTON_SIZE),
        INK,
        rect.width(),
    );
    painter.galley(rect.min, galley, INK);
}

fn draw_banner(painter: &Painter, banner: &Banner) {
    painter.text(
        pos2(layout::SCREEN_WIDTH / 2.0, layout::SCREEN_HEIGHT / 2.0),
        Align2::CENTER_CENTER,
        &banner.message,
        FontId::proportional(BANNER_SIZE),
        INK,
    );
}
