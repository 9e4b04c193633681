//! Room rectangles and the hallway/room geometry of a single branch step.

use serde::{Deserialize, Serialize};

use crate::grid::TileGrid;
use crate::spatial;
use crate::types::{Direction, Rect, TilePos};

/// Rectangle in tile coordinates covering `[x, x + width) x [y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl RoomRect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    /// First column past the room.
    pub fn right(self) -> usize {
        self.x + self.width
    }

    /// First row past the room.
    pub fn bottom(self) -> usize {
        self.y + self.height
    }

    pub fn center(self) -> TilePos {
        TilePos { x: self.x + self.width / 2, y: self.y + self.height / 2 }
    }

    pub fn contains(self, pos: TilePos) -> bool {
        (self.x..self.right()).contains(&pos.x) && (self.y..self.bottom()).contains(&pos.y)
    }

    pub fn world_bounds(self, tile_size: usize) -> Rect {
        let size = tile_size as f32;
        Rect::new(
            self.x as f32 * size,
            self.y as f32 * size,
            self.width as f32 * size,
            self.height as f32 * size,
        )
    }
}

/// Candidate rectangle in signed tile space; it may hang off the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Placement {
    x: i64,
    y: i64,
    width: usize,
    height: usize,
}

impl Placement {
    fn world_bounds(self, tile_size: usize) -> Rect {
        let size = tile_size as f32;
        Rect::new(
            self.x as f32 * size,
            self.y as f32 * size,
            self.width as f32 * size,
            self.height as f32 * size,
        )
    }

    /// The placement as a room, if its world bounds lie inside the map.
    pub(super) fn on_grid(self, grid: &TileGrid) -> Option<RoomRect> {
        if !spatial::is_inside_map(grid, &self.world_bounds(grid.tile_size())) {
            return None;
        }
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        Some(RoomRect { x, y, width: self.width, height: self.height })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct BranchPlan {
    pub(super) hallway: Placement,
    pub(super) room: Placement,
}

/// Lays out a hallway leaving the middle of `from`'s edge facing `direction`,
/// and a room of `room_size` butted against the hallway's far end.
pub(super) fn plan_branch(
    from: RoomRect,
    direction: Direction,
    hallway_width: usize,
    hallway_length: usize,
    room_size: (usize, usize),
) -> BranchPlan {
    let (room_width, room_height) = room_size;
    let center_x = (from.x + from.width / 2) as i64;
    let center_y = (from.y + from.height / 2) as i64;
    let half_hallway = (hallway_width / 2) as i64;
    let length = hallway_length as i64;

    match direction {
        Direction::Right | Direction::Left => {
            let hallway_x = if direction == Direction::Right {
                from.right() as i64
            } else {
                from.x as i64 - length
            };
            let room_x = if direction == Direction::Right {
                hallway_x + length
            } else {
                hallway_x - room_width as i64
            };
            BranchPlan {
                hallway: Placement {
                    x: hallway_x,
                    y: center_y - half_hallway,
                    width: hallway_length,
                    height: hallway_width,
                },
                room: Placement {
                    x: room_x,
                    y: center_y - (room_height / 2) as i64,
                    width: room_width,
                    height: room_height,
                },
            }
        }
        Direction::Up | Direction::Down => {
            let hallway_y = if direction == Direction::Down {
                from.bottom() as i64
            } else {
                from.y as i64 - length
            };
            let room_y = if direction == Direction::Down {
                hallway_y + length
            } else {
                hallway_y - room_height as i64
            };
            BranchPlan {
                hallway: Placement {
                    x: center_x - half_hallway,
                    y: hallway_y,
                    width: hallway_width,
                    height: hallway_length,
                },
                room: Placement {
                    x: center_x - (room_width / 2) as i64,
                    y: room_y,
                    width: room_width,
                    height: room_height,
                },
            }
        }
    }
}
