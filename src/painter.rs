// Drawing primitives the scene needs from its host, and the 2d canvas
// implementation of them.

use crate::color::Color;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Painter {
    type Error;

    fn fill_background(&mut self, color: Color, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> Result<(), Self::Error>;

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &str,
        color: Color,
    ) -> Result<(), Self::Error>;
}

impl Painter for CanvasRenderingContext2d {
    type Error = JsValue;

    fn fill_background(&mut self, color: Color, width: f64, height: f64) -> Result<(), JsValue> {
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.fill_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> Result<(), JsValue> {
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.begin_path();
        self.arc(x, y, radius, 0.0, 2.0 * PI)?;
        self.fill();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &str,
        color: Color,
    ) -> Result<(), JsValue> {
        self.set_font(font);
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        CanvasRenderingContext2d::fill_text(self, text, x, y)
    }
}
