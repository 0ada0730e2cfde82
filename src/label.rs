use crate::color::{Color, Theme};
use crate::painter::Painter;
use crate::settings;

/// Single line of text drawn at a fixed position with a fixed style.
pub struct InfoLabel {
    pub x: f64,
    pub y: f64,
    pub color: Color,
    pub font: &'static str,
    text: String,
}

impl InfoLabel {
    pub fn new() -> Self {
        InfoLabel {
            x: settings::LABEL_X,
            y: settings::LABEL_Y,
            color: Theme::RED,
            font: settings::LABEL_FONT,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn draw<P: Painter>(&self, painter: &mut P) -> Result<(), P::Error> {
        painter.fill_text(&self.text, self.x, self.y, self.font, self.color)
    }
}

impl Default for InfoLabel {
    fn default() -> Self {
        InfoLabel::new()
    }
}
