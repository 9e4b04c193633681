//! Stateless box and point queries over a `TileGrid`.
//! Generation uses them to reject placements; entities use them to reject moves.

use crate::grid::TileGrid;
use crate::types::{Rect, TileKind, TilePos, Vec2};

/// Tile enclosing a world-space point. Panics when the point is off the grid.
pub fn tile_coord_for_point(grid: &TileGrid, point: Vec2) -> TilePos {
    assert!(
        point.x >= 0.0 && point.y >= 0.0,
        "point ({}, {}) has a negative coordinate",
        point.x,
        point.y
    );
    let size = grid.tile_size();
    TilePos { x: point.x as usize / size, y: point.y as usize / size }
}

pub fn tile_at(grid: &TileGrid, point: Vec2) -> TileKind {
    let pos = tile_coord_for_point(grid, point);
    grid.get(pos.x, pos.y)
}

/// Like [`tile_at`], but reports points off the grid as `None` instead of panicking.
pub fn try_tile_at(grid: &TileGrid, point: Vec2) -> Option<TileKind> {
    if !(point.x >= 0.0 && point.y >= 0.0) {
        return None;
    }
    let size = grid.tile_size();
    grid.try_get(point.x as usize / size, point.y as usize / size)
}

pub fn intersects_tile(grid: &TileGrid, bounds: &Rect, x: usize, y: usize) -> bool {
    grid.tile_world_bounds(x, y).intersects(bounds)
}

/// Samples the tile under each of the four corners of `bounds`.
///
/// A box can cover a tile of `kind` through the middle of an edge without any
/// corner landing on it; that case reports `false`. Corners that fall off the
/// grid read as [`TileKind::None`].
pub fn is_touching_tile_type(grid: &TileGrid, kind: TileKind, bounds: &Rect) -> bool {
    bounds
        .corners()
        .into_iter()
        .any(|corner| try_tile_at(grid, corner).unwrap_or(TileKind::None) == kind)
}

/// True when all four edges of `bounds` lie within the map's world bounds.
pub fn is_inside_map(grid: &TileGrid, bounds: &Rect) -> bool {
    let map = grid.world_bounds();
    bounds.left >= map.left
        && bounds.top >= map.top
        && bounds.right() <= map.right()
        && bounds.bottom() <= map.bottom()
}

/// True when every tile in `[x, x + w) x [y, y + h)` is void.
pub fn is_square_empty(grid: &TileGrid, x: usize, y: usize, w: usize, h: usize) -> bool {
    assert!(
        x + w <= grid.width() && y + h <= grid.height(),
        "square ({x}, {y}, {w}, {h}) leaves the {}x{} grid",
        grid.width(),
        grid.height()
    );
    (y..y + h).all(|ty| (x..x + w).all(|tx| grid.get(tx, ty) == TileKind::None))
}

/// Whether an entity may stand on `bounds`.
pub fn can_occupy(grid: &TileGrid, bounds: &Rect) -> bool {
    is_inside_map(grid, bounds) && !is_touching_tile_type(grid, TileKind::None, bounds)
}
