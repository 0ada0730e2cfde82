// Owns every circle on the canvas. Each tick moves all circles, drops the ones
// that left the canvas during that move, then draws what is left together with
// the circle count.

use crate::color::Theme;
use crate::label::InfoLabel;
use crate::moving_circle::{CircleId, ExitListener, MovingCircle};
use crate::painter::Painter;
use crate::random::RandomSource;

// Circles that reported leaving the scene during the current update pass
#[derive(Default)]
struct PendingRemovals {
    ids: Vec<CircleId>,
}

impl ExitListener for PendingRemovals {
    fn has_left_scene(&mut self, circle: &MovingCircle) {
        self.ids.push(circle.id());
    }
}

pub struct Scene {
    circles: Vec<MovingCircle>,
    to_be_removed: PendingRemovals,
    info_label: InfoLabel,
    random: Box<dyn RandomSource>,
    next_id: u64,
}

impl Scene {
    pub fn new(random: Box<dyn RandomSource>) -> Scene {
        Scene {
            circles: Vec::new(),
            to_be_removed: PendingRemovals::default(),
            info_label: InfoLabel::new(),
            random,
            next_id: 0,
        }
    }

    pub fn circles(&self) -> &[MovingCircle] {
        &self.circles
    }

    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    pub fn info_label(&self) -> &InfoLabel {
        &self.info_label
    }

    /// Spawns a circle with a random velocity at the pressed position.
    pub fn on_mouse_pressed(&mut self, x: f64, y: f64) -> CircleId {
        let id = self.next_id();
        let circle = MovingCircle::new(id, x, y, &mut *self.random);
        self.circles.push(circle);
        id
    }

    pub fn tick<P: Painter>(&mut self, painter: &mut P, width: f64, height: f64) -> Result<(), P::Error> {
        painter.fill_background(Theme::GREY, width, height)?;
        self.update_circles(width, height);
        self.clear_circles();
        self.draw_circles(painter)?;
        self.info_label
            .set_text(format!("circles in scene: {}", self.circles.len()));
        self.info_label.draw(painter)
    }

    fn next_id(&mut self) -> CircleId {
        let id = CircleId(self.next_id);
        self.next_id += 1;
        id
    }

    // Circles only get recorded here, the vec is left alone until the pass is done
    fn update_circles(&mut self, width: f64, height: f64) {
        let to_be_removed = &mut self.to_be_removed;
        for circle in &mut self.circles {
            circle.update(width, height, to_be_removed);
        }
    }

    fn clear_circles(&mut self) {
        let ids = &self.to_be_removed.ids;
        if !ids.is_empty() {
            self.circles.retain(|circle| !ids.contains(&circle.id()));
        }
        self.to_be_removed.ids.clear();
    }

    fn draw_circles<P: Painter>(&self, painter: &mut P) -> Result<(), P::Error> {
        for circle in &self.circles {
            circle.draw(painter)?;
        }
        Ok(())
    }
}
