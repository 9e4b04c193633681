use crate::spatial;
use crate::types::{Direction, Rect, Vec2};

use super::{Animation, Entity, Motion, SpriteCell, StepContext};

const WALK_SPEED: f32 = 75.0;
const PLAYER_SIZE: Vec2 = Vec2::new(16.0, 16.0);
const WALK_FRAME_MS: u32 = 300;

/// Idle cell per facing, indexed by `Direction::index`.
const IDLE_CELLS: [SpriteCell; 4] = [SpriteCell(2), SpriteCell(6), SpriteCell(4), SpriteCell(1)];
const WALK_CELLS: [[SpriteCell; 2]; 4] = [
    [SpriteCell(3), SpriteCell(2)],
    [SpriteCell(6), SpriteCell(7)],
    [SpriteCell(5), SpriteCell(4)],
    [SpriteCell(0), SpriteCell(1)],
];

/// Direction controls held during one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveInput {
    pub fn toward(direction: Direction) -> Self {
        let mut input = Self::default();
        match direction {
            Direction::Right => input.right = true,
            Direction::Left => input.left = true,
            Direction::Up => input.up = true,
            Direction::Down => input.down = true,
        }
        input
    }

    pub fn is_empty(self) -> bool {
        !(self.right || self.left || self.up || self.down)
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    position: Vec2,
    velocity: Vec2,
    size: Vec2,
    walk_speed: f32,
    motion: Motion,
    facing: Direction,
    input: MoveInput,
    walk_animations: [Animation; 4],
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size: PLAYER_SIZE,
            walk_speed: WALK_SPEED,
            motion: Motion::Idle,
            facing: Direction::Down,
            input: MoveInput::default(),
            walk_animations: WALK_CELLS.map(|cells| Animation::new(WALK_FRAME_MS, cells.to_vec())),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Input consumed by the next [`Entity::update`].
    pub fn set_input(&mut self, input: MoveInput) {
        self.input = input;
    }

    /// Later matches override earlier ones: Right, Left, Up, then Down.
    /// Opposing controls cancel on their axis; with no control held the player idles.
    fn steer(&mut self, input: MoveInput) {
        if input.right && !input.left {
            self.walk(Direction::Right);
        }
        if input.left && !input.right {
            self.walk(Direction::Left);
        }
        if input.up && !input.down {
            self.walk(Direction::Up);
        }
        if input.down && !input.up {
            self.walk(Direction::Down);
        }
        if input.is_empty() {
            self.velocity = Vec2::ZERO;
            self.motion = Motion::Idle;
        }
    }

    fn walk(&mut self, direction: Direction) {
        self.motion = Motion::Walking;
        self.facing = direction;
        self.velocity = direction.unit() * self.walk_speed;
    }
}

impl Entity for Player {
    fn update(&mut self, ctx: &StepContext<'_>) {
        self.steer(self.input);
        if self.motion == Motion::Walking {
            self.walk_animations[self.facing.index()].advance(ctx.delta_ms);
        }

        let origin = self.position + ctx.displacement(self.velocity);
        let next = Rect::from_origin_size(origin, self.size);
        if spatial::can_occupy(ctx.grid, &next) {
            self.position = next.origin();
        }
    }

    fn aabb(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    fn sprite(&self) -> SpriteCell {
        match self.motion {
            Motion::Idle => IDLE_CELLS[self.facing.index()],
            Motion::Walking => self.walk_animations[self.facing.index()].current_frame(),
        }
    }
}
