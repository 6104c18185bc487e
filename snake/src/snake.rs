use std::time::{Duration, Instant};
use tetra::graphics::mesh::Mesh;
use tetra::graphics::{Color, DrawParams};
use tetra::math::Vec2;
use tetra::Context;
use crate::components::{Direction, Position};
use crate::settings::DIRECTION_CHANGE_INTERVAL;

pub struct Snake {
    pub body: Vec<Position>,
    pub direction: Direction,
    cell_size: i32,
    width: i32,
    height: i32,
    last_direction_change: Instant,
    direction_change_interval: Duration,
}

impl Snake {
    /// A fresh three segment snake heading right. The direction change
    /// cooldown starts counting at `now`.
    pub fn new(cell_size: i32, width: i32, height: i32, now: Instant) -> Self {
        Snake::with_body(
            vec![Position::new(100, 100), Position::new(90, 100), Position::new(80, 100)],
            Direction::Right,
            cell_size,
            width,
            height,
            now,
        )
    }

    pub(crate) fn with_body(
        body: Vec<Position>,
        direction: Direction,
        cell_size: i32,
        width: i32,
        height: i32,
        now: Instant,
    ) -> Self {
        debug_assert!(!body.is_empty(), "a snake needs at least a head");

        Snake {
            body,
            direction,
            cell_size,
            width,
            height,
            last_direction_change: now,
            direction_change_interval: DIRECTION_CHANGE_INTERVAL,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn move_forward(&mut self) {
        let new_head = self.head() + self.direction.offset(self.cell_size);
        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Requests a new heading. Returns whether it was taken; reversals and
    /// requests inside the cooldown are dropped.
    pub fn change_direction(&mut self, direction: Direction, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_direction_change);
        if elapsed < self.direction_change_interval || direction == self.direction.reverse() {
            log::trace!("Ignoring direction change to {:?}", direction);
            return false;
        }

        self.direction = direction;
        self.last_direction_change = now;
        true
    }

    /// Appends a copy of the tail. It separates from the old tail on the next move.
    pub fn grow(&mut self) {
        let tail = self.body[self.body.len() - 1];
        self.body.push(tail);
    }

    pub fn check_collision(&self) -> bool {
        let head = self.head();
        !head.is_within(self.width, self.height) || self.body[1..].contains(&head)
    }

    pub fn draw(&self, ctx: &mut Context, cell: &Mesh, color: Color) {
        for segment in self.body.iter() {
            cell.draw(
                ctx,
                DrawParams::new()
                    .position(Vec2::new(segment.x as f32, segment.y as f32))
                    .color(color),
            );
        }
    }
}
