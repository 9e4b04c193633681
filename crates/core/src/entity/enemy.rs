use crate::spatial;
use crate::types::{Direction, Rect, Vec2};

use super::{Entity, SpriteCell, StepContext};

const PATROL_SPEED: f32 = 40.0;
/// Smaller than a tile so a fresh enemy fits entirely inside its spawn tile.
const ENEMY_SIZE: Vec2 = Vec2::new(12.0, 12.0);
const FACING_CELLS: [SpriteCell; 4] =
    [SpriteCell(10), SpriteCell(11), SpriteCell(9), SpriteCell(8)];

/// Walks straight ahead and turns clockwise whenever the next box is blocked.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    position: Vec2,
    size: Vec2,
    speed: f32,
    facing: Direction,
}

impl Enemy {
    pub fn new(position: Vec2, facing: Direction) -> Self {
        Self { position, size: ENEMY_SIZE, speed: PATROL_SPEED, facing }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }
}

impl Entity for Enemy {
    fn update(&mut self, ctx: &StepContext<'_>) {
        let velocity = self.facing.unit() * self.speed;
        let next = Rect::from_origin_size(self.position + ctx.displacement(velocity), self.size);
        if spatial::can_occupy(ctx.grid, &next) {
            self.position = next.origin();
        } else {
            self.facing = self.facing.clockwise();
        }
    }

    fn aabb(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    fn sprite(&self) -> SpriteCell {
        FACING_CELLS[self.facing.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileGrid;
    use crate::types::TileKind;

    #[test]
    fn turns_clockwise_at_a_wall_then_keeps_walking() {
        let mut grid = TileGrid::new(6, 6, 16);
        grid.fill_rect(TileKind::Floor, 1, 1, 2, 2);
        let mut enemy = Enemy::new(Vec2::new(18.0, 18.0), Direction::Right);
        let ctx = StepContext { grid: &grid, delta_ms: 250 };

        enemy.update(&ctx);
        assert_eq!(enemy.position(), Vec2::new(28.0, 18.0));
        // The next box would reach x = 50, inside the void column 3.
        enemy.update(&ctx);
        assert_eq!(enemy.position(), Vec2::new(28.0, 18.0));
        assert_eq!(enemy.facing(), Direction::Down);
        enemy.update(&ctx);
        assert_eq!(enemy.position(), Vec2::new(28.0, 28.0));
    }

    #[test]
    fn boxed_in_enemy_spins_in_place() {
        let mut grid = TileGrid::new(3, 3, 16);
        grid.set(1, 1, TileKind::EnemySpawn);
        let start = Vec2::new(17.0, 17.0);
        let mut enemy = Enemy::new(start, Direction::Up);
        let ctx = StepContext { grid: &grid, delta_ms: 250 };
        for _ in 0..4 {
            enemy.update(&ctx);
            assert_eq!(enemy.position(), start);
        }
        assert_eq!(enemy.facing(), Direction::Up);
        assert!(spatial::can_occupy(&grid, &enemy.aabb()));
    }
}
