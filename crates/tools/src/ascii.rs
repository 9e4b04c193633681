//! Plain-text rendering of a tile grid, one character per tile.

use nozoki_core::{TileGrid, TileKind};

pub fn tile_char(kind: TileKind) -> char {
    match kind {
        TileKind::None => '#',
        TileKind::Floor => '.',
        TileKind::PlayerSpawn => '@',
        TileKind::EnemySpawn => 'e',
    }
}

pub fn render_rows(grid: &TileGrid) -> Vec<String> {
    grid.rows().map(|row| row.iter().copied().map(tile_char).collect()).collect()
}

pub fn render(grid: &TileGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in render_rows(grid) {
        out.push_str(&row);
        out.push('\n');
    }
    out
}
