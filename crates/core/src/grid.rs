//! Fixed-size tile storage shared by dungeon generation and runtime collision.
//! The grid is written while a dungeon is carved and only read afterwards.
//! Out-of-range access is a caller bug and panics instead of returning a fallback tile.

use std::collections::VecDeque;

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Rect, TileKind, TilePos, Vec2};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tile_size: usize,
    tiles: Vec<TileKind>,
}

impl TileGrid {
    pub fn new(width: usize, height: usize, tile_size: usize) -> Self {
        assert!(width > 0 && height > 0, "grid must have non-zero size, got {width}x{height}");
        assert!(tile_size > 0, "tile size must be non-zero");
        let Some(len) = width.checked_mul(height) else {
            panic!("{width}x{height} grid overflows the tile count");
        };
        Self { width, height, tile_size, tiles: vec![TileKind::None; len] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    pub fn get(&self, x: usize, y: usize) -> TileKind {
        self.tiles[self.index(x, y)]
    }

    pub fn try_get(&self, x: usize, y: usize) -> Option<TileKind> {
        self.contains(x, y).then(|| self.tiles[y * self.width + x])
    }

    pub fn set(&mut self, x: usize, y: usize, kind: TileKind) {
        let index = self.index(x, y);
        self.tiles[index] = kind;
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Sets every tile in `[x, x + w) x [y, y + h)` to `kind`.
    pub fn fill_rect(&mut self, kind: TileKind, x: usize, y: usize, w: usize, h: usize) {
        assert!(
            x + w <= self.width && y + h <= self.height,
            "rectangle ({x}, {y}, {w}, {h}) leaves the {}x{} grid",
            self.width,
            self.height
        );
        for row in y..(y + h) {
            let start = row * self.width + x;
            self.tiles[start..start + w].fill(kind);
        }
    }

    pub fn tile_world_bounds(&self, x: usize, y: usize) -> Rect {
        let size = self.tile_size as f32;
        Rect::new(x as f32 * size, y as f32 * size, size, size)
    }

    pub fn tile_world_origin(&self, pos: TilePos) -> Vec2 {
        let size = self.tile_size as f32;
        Vec2::new(pos.x as f32 * size, pos.y as f32 * size)
    }

    pub fn world_bounds(&self) -> Rect {
        let size = self.tile_size as f32;
        Rect::new(0.0, 0.0, self.width as f32 * size, self.height as f32 * size)
    }

    /// Column-major scan: `x` ascending outside, `y` ascending inside.
    pub fn positions_of(&self, kind: TileKind) -> impl Iterator<Item = TilePos> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.height)
                .filter(move |&y| self.tiles[y * self.width + x] == kind)
                .map(move |y| TilePos { x, y })
        })
    }

    pub fn find_first_tile_of_kind(&self, kind: TileKind) -> Option<TilePos> {
        self.positions_of(kind).next()
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    /// Number of passable tiles 4-connected to `start` through passable tiles.
    pub fn reachable_from(&self, start: TilePos) -> usize {
        if !self.get(start.x, start.y).is_passable() {
            return 0;
        }

        let mut seen = vec![false; self.tiles.len()];
        let mut open = VecDeque::from([start]);
        seen[start.y * self.width + start.x] = true;
        let mut reached = 0;

        while let Some(pos) = open.pop_front() {
            reached += 1;
            let neighbors = [
                (pos.x.checked_sub(1), Some(pos.y)),
                (pos.x.checked_add(1), Some(pos.y)),
                (Some(pos.x), pos.y.checked_sub(1)),
                (Some(pos.x), pos.y.checked_add(1)),
            ];
            for (x, y) in neighbors {
                let (Some(x), Some(y)) = (x, y) else {
                    continue;
                };
                if !self.contains(x, y) {
                    continue;
                }
                let index = y * self.width + x;
                if seen[index] || !self.tiles[index].is_passable() {
                    continue;
                }
                seen[index] = true;
                open.push_back(TilePos { x, y });
            }
        }

        reached
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> + '_ {
        self.tiles.chunks(self.width)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(12 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend((self.tile_size as u32).to_le_bytes());
        bytes.extend(self.tiles.iter().map(|tile| tile.code()));
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.contains(x, y),
            "tile ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn new_grid_is_all_void() {
        let grid = TileGrid::new(5, 3, 16);
        assert_eq!(grid.count(TileKind::None), 15);
        assert_eq!(grid.find_first_tile_of_kind(TileKind::Floor), None);
    }

    #[test]
    fn set_then_get_uses_distinct_cells_on_non_square_grids() {
        let mut grid = TileGrid::new(7, 3, 16);
        grid.set(6, 0, TileKind::Floor);
        grid.set(0, 2, TileKind::EnemySpawn);
        assert_eq!(grid.get(6, 0), TileKind::Floor);
        assert_eq!(grid.get(0, 2), TileKind::EnemySpawn);
        assert_eq!(grid.count(TileKind::None), 19);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn get_past_width_panics() {
        let grid = TileGrid::new(4, 4, 16);
        grid.get(4, 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn set_past_height_panics() {
        let mut grid = TileGrid::new(4, 4, 16);
        grid.set(0, 4, TileKind::Floor);
    }

    #[test]
    #[should_panic(expected = "leaves")]
    fn fill_rect_past_edge_panics() {
        let mut grid = TileGrid::new(4, 4, 16);
        grid.fill_rect(TileKind::Floor, 2, 2, 3, 1);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn tile_count_overflow_panics() {
        TileGrid::new(usize::MAX / 2, 3, 16);
    }

    #[test]
    fn try_get_reports_out_of_range_as_none() {
        let grid = TileGrid::new(4, 4, 16);
        assert_eq!(grid.try_get(3, 3), Some(TileKind::None));
        assert_eq!(grid.try_get(4, 3), None);
    }

    #[test]
    fn tile_world_bounds_scales_by_tile_size() {
        let grid = TileGrid::new(8, 8, 16);
        assert_eq!(grid.tile_world_bounds(3, 2), Rect::new(48.0, 32.0, 16.0, 16.0));
        assert_eq!(grid.world_bounds(), Rect::new(0.0, 0.0, 128.0, 128.0));
    }

    #[test]
    fn find_first_scans_columns_before_rows() {
        let mut grid = TileGrid::new(6, 6, 16);
        grid.set(4, 0, TileKind::EnemySpawn);
        grid.set(1, 5, TileKind::EnemySpawn);
        grid.set(1, 3, TileKind::EnemySpawn);
        assert_eq!(
            grid.find_first_tile_of_kind(TileKind::EnemySpawn),
            Some(TilePos { x: 1, y: 3 })
        );
        let order: Vec<_> = grid.positions_of(TileKind::EnemySpawn).collect();
        assert_eq!(
            order,
            vec![TilePos { x: 1, y: 3 }, TilePos { x: 1, y: 5 }, TilePos { x: 4, y: 0 }]
        );
    }

    #[test]
    fn reachable_from_stops_at_void_and_ignores_diagonals() {
        let mut grid = TileGrid::new(6, 6, 16);
        grid.fill_rect(TileKind::Floor, 0, 0, 2, 2);
        grid.set(2, 2, TileKind::Floor);
        grid.fill_rect(TileKind::Floor, 4, 0, 2, 6);
        assert_eq!(grid.reachable_from(TilePos { x: 0, y: 0 }), 4);
        assert_eq!(grid.reachable_from(TilePos { x: 5, y: 5 }), 12);
        assert_eq!(grid.reachable_from(TilePos { x: 3, y: 3 }), 0);
    }

    #[test]
    fn fingerprint_tracks_tile_changes() {
        let mut grid = TileGrid::new(6, 6, 16);
        let empty = grid.fingerprint();
        grid.set(2, 2, TileKind::Floor);
        assert_ne!(grid.fingerprint(), empty);
        grid.set(2, 2, TileKind::None);
        assert_eq!(grid.fingerprint(), empty);
    }

    proptest! {
        #[test]
        fn set_then_get_round_trips_in_range(
            width in 1_usize..24,
            height in 1_usize..24,
            x_seed in any::<usize>(),
            y_seed in any::<usize>(),
            code in 0_u8..4,
        ) {
            let kinds =
                [TileKind::None, TileKind::Floor, TileKind::PlayerSpawn, TileKind::EnemySpawn];
            let kind = kinds[code as usize];
            let (x, y) = (x_seed % width, y_seed % height);
            let mut grid = TileGrid::new(width, height, 16);
            grid.set(x, y, kind);
            prop_assert_eq!(grid.get(x, y), kind);
        }

        #[test]
        fn fill_rect_touches_exactly_the_rectangle(
            x in 0_usize..12,
            y in 0_usize..12,
            w in 0_usize..8,
            h in 0_usize..8,
        ) {
            let mut grid = TileGrid::new(20, 20, 8);
            grid.set(19, 19, TileKind::EnemySpawn);
            grid.fill_rect(TileKind::Floor, x, y, w, h);
            for ty in 0..20 {
                for tx in 0..20 {
                    let inside = (x..x + w).contains(&tx) && (y..y + h).contains(&ty);
                    let expected = if inside {
                        TileKind::Floor
                    } else if (tx, ty) == (19, 19) {
                        TileKind::EnemySpawn
                    } else {
                        TileKind::None
                    };
                    prop_assert_eq!(grid.get(tx, ty), expected, "tile ({}, {})", tx, ty);
                }
            }
        }
    }
}
