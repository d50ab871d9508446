//! UI state: uploaded textures and pointer tracking

use glam::Vec2;

use crate::renderer::GallowsImages;

/// State the UI keeps between frames
pub struct GameUi {
    /// One texture per hangman stage
    pub stage_textures: Vec<egui::TextureHandle>,
    /// Last known cursor position in logical pixels
    pub cursor: Option<Vec2>,
}

impl GameUi {
    /// Upload the stage images as egui textures
    pub fn new(ctx: &egui::Context, images: &GallowsImages) -> Self {
        let stage_textures = images
            .stages()
            .iter()
            .enumerate()
            .map(|(stage, img)| {
                let size = [img.width() as usize, img.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
                ctx.load_texture(
                    format!("hangman{stage}"),
                    color_image,
                    egui::TextureOptions::LINEAR,
                )
            })
            .collect();

        Self {
            stage_textures,
            cursor: None,
        }
    }

    /// Texture for the given wrong-guess count
    pub fn stage_texture(&self, wrong_guesses: u8) -> Option<&egui::TextureHandle> {
        let last = self.stage_textures.len().checked_sub(1)?;
        self.stage_textures.get((wrong_guesses as usize).min(last))
    }

    pub fn move_cursor(&mut self, position: Vec2) {
        self.cursor = Some(position);
    }

    pub fn leave(&mut self) {
        self.cursor = None;
    }
}
