//! UI module - egui drawing of the menu, board and round banner

pub mod draw;
pub mod state;

pub use draw::draw_ui;
pub use state::GameUi;
