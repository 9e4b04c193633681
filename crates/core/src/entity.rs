//! Runtime actors that move over a finished dungeon.
//! Every move is validated against the grid through `spatial::can_occupy`.
//! Drawing, textures, and input devices live outside this crate.

mod animation;
mod enemy;
mod player;

pub use animation::Animation;
pub use enemy::Enemy;
pub use player::{MoveInput, Player};

use crate::grid::TileGrid;
use crate::types::{Rect, Vec2};

/// Column of a 16-pixel sprite strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteCell(pub u8);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Idle,
    Walking,
}

/// Read-only inputs shared by every entity update in one step.
#[derive(Clone, Copy, Debug)]
pub struct StepContext<'a> {
    pub grid: &'a TileGrid,
    pub delta_ms: u32,
}

impl StepContext<'_> {
    pub fn displacement(&self, velocity: Vec2) -> Vec2 {
        velocity * (self.delta_ms as f32 / 1000.0)
    }
}

pub trait Entity {
    fn update(&mut self, ctx: &StepContext<'_>);
    fn aabb(&self) -> Rect;
    fn sprite(&self) -> SpriteCell;
}
