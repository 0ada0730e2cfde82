// Canvas size applied when the painter attaches, and info label placement

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

pub const LABEL_X: f64 = 24.0;
pub const LABEL_Y: f64 = 24.0;
pub const LABEL_FONT: &str = "14px \"Arial Rounded MT Bold\"";
