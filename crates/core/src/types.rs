use std::ops::{Add, AddAssign, Mul};

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    /// Void. Nothing may stand here.
    #[default]
    None,
    Floor,
    PlayerSpawn,
    EnemySpawn,
}

impl TileKind {
    pub fn is_passable(self) -> bool {
        self != Self::None
    }

    /// Stable byte code used by fingerprints and dumps.
    pub fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Floor => 1,
            Self::PlayerSpawn => 2,
            Self::EnemySpawn => 3,
        }
    }
}

/// Integer tile coordinate. `x` grows right, `y` grows down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TilePos {
    pub x: usize,
    pub y: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

/// Axis-aligned box in world units (tile coordinates times tile size).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { left: origin.x, top: origin.y, width: size.x, height: size.y }
    }

    pub fn origin(&self) -> Vec2 {
        Vec2 { x: self.left, y: self.top }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2 { x: self.left + self.width / 2.0, y: self.top + self.height / 2.0 }
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2 { x: self.left, y: self.top },
            Vec2 { x: self.right(), y: self.top },
            Vec2 { x: self.left, y: self.bottom() },
            Vec2 { x: self.right(), y: self.bottom() },
        ]
    }

    /// Overlap on both axes. Shared edges count as intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        self.left <= other.right()
            && other.left <= self.right()
            && self.top <= other.bottom()
            && other.top <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    pub fn index(self) -> usize {
        match self {
            Self::Right => 0,
            Self::Left => 1,
            Self::Up => 2,
            Self::Down => 3,
        }
    }

    /// Unit step in world space. Up is towards smaller `y`.
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
        }
    }

    pub fn clockwise(self) -> Self {
        match self {
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            Self::Up => Self::Right,
        }
    }
}
