// A circle that drifts across the canvas at a fixed random velocity and tells
// its listener once it has moved completely out of the visible area.

use crate::color::{Color, Theme};
use crate::painter::Painter;
use crate::random::RandomSource;
use glm::TVec2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CircleId(pub u64);

/// Told about circles that have left the scene. The circle calls this from
/// inside `update`, so implementors should only record the circle and act on
/// it once the update pass is over.
pub trait ExitListener {
    fn has_left_scene(&mut self, circle: &MovingCircle);
}

#[derive(Clone, Debug)]
pub struct MovingCircle {
    id: CircleId,
    pos: TVec2<f64>,
    vel: TVec2<f64>,
}

impl MovingCircle {
    pub const RADIUS: f64 = 20.0;
    pub const MIN_SPEED: f64 = 1.0;
    pub const MAX_SPEED: f64 = 4.0;
    pub const COLOR: Color = Theme::YELLOW;

    pub fn new(id: CircleId, x: f64, y: f64, random: &mut dyn RandomSource) -> MovingCircle {
        let vel_x = MovingCircle::random_velocity(random);
        let vel_y = MovingCircle::random_velocity(random);
        MovingCircle::with_velocity(id, x, y, vel_x, vel_y)
    }

    pub fn with_velocity(id: CircleId, x: f64, y: f64, vel_x: f64, vel_y: f64) -> MovingCircle {
        MovingCircle {
            id,
            pos: glm::vec2(x, y),
            vel: glm::vec2(vel_x, vel_y),
        }
    }

    // Magnitude is uniform in [MIN_SPEED, MAX_SPEED), direction flipped half the time
    fn random_velocity(random: &mut dyn RandomSource) -> f64 {
        let v = MovingCircle::MIN_SPEED
            + random.next_unit() * (MovingCircle::MAX_SPEED - MovingCircle::MIN_SPEED);
        if random.next_unit() > 0.5 {
            -v
        } else {
            v
        }
    }

    pub fn id(&self) -> CircleId {
        self.id
    }

    pub fn position(&self) -> (f64, f64) {
        (self.pos.x, self.pos.y)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.vel.x, self.vel.y)
    }

    pub fn radius(&self) -> f64 {
        MovingCircle::RADIUS
    }

    // Canvas coordinates of each side of the circle: (left, top, right, bottom)
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let left = self.pos.x - MovingCircle::RADIUS;
        let top = self.pos.y - MovingCircle::RADIUS;
        let right = self.pos.x + MovingCircle::RADIUS;
        let bottom = self.pos.y + MovingCircle::RADIUS;
        (left, top, right, bottom)
    }

    pub fn is_outside(&self, width: f64, height: f64) -> bool {
        let (left, top, right, bottom) = self.bounding_box();
        left > width || top > height || right < 0.0 || bottom < 0.0
    }

    /// Moves one step. If that step took the circle entirely off the canvas,
    /// the listener hears about it.
    pub fn update(&mut self, width: f64, height: f64, listener: &mut dyn ExitListener) {
        self.pos += self.vel;
        if self.is_outside(width, height) {
            listener.has_left_scene(self);
        }
    }

    pub fn draw<P: Painter>(&self, painter: &mut P) -> Result<(), P::Error> {
        painter.fill_circle(self.pos.x, self.pos.y, MovingCircle::RADIUS, MovingCircle::COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::recording::{DrawCall, RecordingPainter};
    use crate::random::SeededRandom;

    #[derive(Default)]
    struct Exits(Vec<CircleId>);

    impl ExitListener for Exits {
        fn has_left_scene(&mut self, circle: &MovingCircle) {
            self.0.push(circle.id());
        }
    }

    struct Fixed(Vec<f64>);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0.remove(0)
        }
    }

    #[test]
    fn velocity_comes_from_magnitude_then_sign_draws() {
        let mut random = Fixed(vec![0.0, 0.2, 0.5, 0.9]);
        let circle = MovingCircle::new(CircleId(0), 10.0, 10.0, &mut random);
        assert_eq!(circle.velocity(), (1.0, -2.5));
    }

    #[test]
    fn random_speeds_stay_in_range_with_both_signs() {
        let mut random = SeededRandom::new(3);
        let mut seen_negative = false;
        let mut seen_positive = false;
        for i in 0..500 {
            let circle = MovingCircle::new(CircleId(i), 0.0, 0.0, &mut random);
            assert_eq!(circle.radius(), MovingCircle::RADIUS);
            let (vx, vy) = circle.velocity();
            for v in [vx, vy].iter() {
                assert!(v.abs() >= MovingCircle::MIN_SPEED && v.abs() <= MovingCircle::MAX_SPEED);
                seen_negative |= *v < 0.0;
                seen_positive |= *v > 0.0;
            }
        }
        assert!(seen_negative && seen_positive);
    }

    #[test]
    fn update_moves_by_velocity_once() {
        let mut exits = Exits::default();
        let mut circle = MovingCircle::with_velocity(CircleId(1), 100.0, 100.0, 3.0, -2.0);
        circle.update(800.0, 600.0, &mut exits);
        assert_eq!(circle.position(), (103.0, 98.0));
        circle.update(800.0, 600.0, &mut exits);
        assert_eq!(circle.position(), (106.0, 96.0));
        assert!(exits.0.is_empty());
    }

    #[test]
    fn bounding_box_surrounds_center() {
        let circle = MovingCircle::with_velocity(CircleId(0), 400.0, 300.0, 1.0, 1.0);
        assert_eq!(circle.bounding_box(), (380.0, 280.0, 420.0, 320.0));
    }

    #[test]
    fn notifies_when_fully_past_each_edge() {
        let cases = [
            (-19.0, 300.0, -2.0, 0.0),
            (300.0, -19.0, 0.0, -2.0),
            (819.0, 300.0, 2.0, 0.0),
            (300.0, 619.0, 0.0, 2.0),
        ];
        for (i, &(x, y, vx, vy)) in cases.iter().enumerate() {
            let mut exits = Exits::default();
            let mut circle = MovingCircle::with_velocity(CircleId(i as u64), x, y, vx, vy);
            circle.update(800.0, 600.0, &mut exits);
            assert_eq!(exits.0, vec![CircleId(i as u64)]);
        }
    }

    #[test]
    fn touching_the_edge_is_still_inside() {
        let mut exits = Exits::default();
        // left edge lands exactly on the canvas width
        let mut circle = MovingCircle::with_velocity(CircleId(0), 815.0, 300.0, 5.0, 0.0);
        circle.update(800.0, 600.0, &mut exits);
        assert!(exits.0.is_empty());
        circle.update(800.0, 600.0, &mut exits);
        assert_eq!(exits.0, vec![CircleId(0)]);
    }

    #[test]
    fn keeps_notifying_while_outside() {
        let mut exits = Exits::default();
        let mut circle = MovingCircle::with_velocity(CircleId(9), -30.0, 10.0, -1.0, 0.0);
        circle.update(800.0, 600.0, &mut exits);
        circle.update(800.0, 600.0, &mut exits);
        assert_eq!(exits.0, vec![CircleId(9), CircleId(9)]);
    }

    #[test]
    fn draw_fills_circle_at_position() {
        let mut painter = RecordingPainter::default();
        let circle = MovingCircle::with_velocity(CircleId(0), 12.5, 40.0, 1.0, 1.0);
        circle.draw(&mut painter).unwrap();
        assert_eq!(
            painter.calls,
            vec![DrawCall::Circle {
                x: 12.5,
                y: 40.0,
                radius: 20.0,
                color: Theme::YELLOW
            }]
        );
    }
}
