// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Canvas fill styles take CSS color strings, alpha goes from 0-255 to 0-1
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }
}

// Fixed palette for the scene
pub struct Theme;

impl Theme {
    pub const GREY: Color = Color::from_u32(0x3c3c3cff);
    pub const YELLOW: Color = Color::from_u32(0xf8d34aff);
    pub const RED: Color = Color::from_u32(0xe2453cff);
}
