use rand::Rng;
use tetra::graphics::mesh::Mesh;
use tetra::graphics::{Color, DrawParams};
use tetra::math::Vec2;
use tetra::Context;
use crate::components::Position;

pub struct Food {
    pub position: Position,
    cell_size: i32,
    width: i32,
    height: i32,
}

impl Food {
    pub fn new<R: Rng>(cell_size: i32, width: i32, height: i32, rng: &mut R) -> Self {
        let mut food = Food {
            position: Position::default(),
            cell_size,
            width,
            height,
        };
        food.generate_position(rng);
        food
    }

    /// Picks a new cell uniformly over the whole grid. The snake's body is
    /// not excluded.
    pub fn generate_position<R: Rng>(&mut self, rng: &mut R) {
        let columns = (self.width + self.cell_size - 1) / self.cell_size;
        let rows = (self.height + self.cell_size - 1) / self.cell_size;

        self.position = Position::new(
            rng.gen_range(0, columns) * self.cell_size,
            rng.gen_range(0, rows) * self.cell_size,
        );
    }

    pub fn draw(&self, ctx: &mut Context, cell: &Mesh, color: Color) {
        cell.draw(
            ctx,
            DrawParams::new()
                .position(Vec2::new(self.position.x as f32, self.position.y as f32))
                .color(color),
        );
    }
}
