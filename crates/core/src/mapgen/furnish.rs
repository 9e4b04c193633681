//! Enemy spawn markers scattered inside freshly carved rooms.

use rand_chacha::rand_core::Rng;
use tracing::trace;

use crate::grid::TileGrid;
use crate::types::TileKind;

use super::random::uniform_inclusive;
use super::room::RoomRect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomFurnisher {
    max_spawns: u32,
}

impl RoomFurnisher {
    pub fn new(max_spawns: u32) -> Self {
        Self { max_spawns }
    }

    /// Marks up to `max_spawns` random tiles of `room` as `EnemySpawn`.
    ///
    /// Draws may repeat a tile; repeats collapse into a single marker. Returns
    /// the number of draws made, not the number of distinct markers.
    pub fn furnish<R: Rng>(&self, grid: &mut TileGrid, room: RoomRect, rng: &mut R) -> usize {
        let draws = uniform_inclusive(rng, 0, self.max_spawns as usize);
        for _ in 0..draws {
            let x = uniform_inclusive(rng, room.x, room.right() - 1);
            let y = uniform_inclusive(rng, room.y, room.bottom() - 1);
            grid.set(x, y, TileKind::EnemySpawn);
            trace!(x, y, "placed enemy spawn marker");
        }
        draws
    }
}
