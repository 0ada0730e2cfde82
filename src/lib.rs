#[macro_use]
mod utils;
pub mod color;
pub mod label;
pub mod moving_circle;
pub mod painter;
pub mod random;
pub mod scene;
pub mod settings;

extern crate nalgebra_glm as glm;

use random::{HostRandom, RandomSource, SeededRandom};
use scene::Scene;
use utils::Timer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub use moving_circle::{CircleId, ExitListener, MovingCircle};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Browser side of the demo. The page owns the canvas, forwards mouse presses
// and calls tick() from requestAnimationFrame.
#[wasm_bindgen]
pub struct CirclePainter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    scene: Scene,
}

#[wasm_bindgen]
impl CirclePainter {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<CirclePainter, JsValue> {
        CirclePainter::attach(canvas, Box::new(HostRandom))
    }

    /// Same as the constructor, but circle velocities come from a seeded
    /// generator so runs can be replayed.
    pub fn with_seed(canvas: HtmlCanvasElement, seed: u32) -> Result<CirclePainter, JsValue> {
        log!("circle painter seeded with {}", seed);
        CirclePainter::attach(canvas, Box::new(SeededRandom::new(seed as u64)))
    }

    pub fn tick(&mut self) -> Result<(), JsValue> {
        let _timer = Timer::new("CirclePainter::tick");
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.scene.tick(&mut self.context, width, height)
    }

    pub fn on_mouse_pressed(&mut self, x: f64, y: f64) {
        self.scene.on_mouse_pressed(x, y);
    }

    pub fn circle_count(&self) -> usize {
        self.scene.circle_count()
    }

    pub fn info_text(&self) -> String {
        self.scene.info_label().text().to_owned()
    }
}

impl CirclePainter {
    fn attach(
        canvas: HtmlCanvasElement,
        random: Box<dyn RandomSource>,
    ) -> Result<CirclePainter, JsValue> {
        canvas.set_width(settings::WINDOW_WIDTH);
        canvas.set_height(settings::WINDOW_HEIGHT);
        let context = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        log!(
            "circle painter attached to {}x{} canvas",
            canvas.width(),
            canvas.height()
        );

        Ok(CirclePainter {
            canvas,
            context,
            scene: Scene::new(random),
        })
    }
}
