//! Formation grid layout.
//!
//! Places rows × columns of invaders centred on x = 0 and derives each
//! invader's sweep boundaries from its spawn point.

use glam::Vec2;

use invaders_core::constants::*;

/// Where one invader of the formation spawns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationSlot {
    /// 1-based row, counted upward from the lowest row.
    pub row: u32,
    /// 0-based column, counted from the left.
    pub column: u32,
    /// Number shown on the invader.
    pub glyph: u32,
    pub position: Vec2,
}

/// Lateral offsets of `columns` invaders, centred on zero.
///
/// Odd counts put the middle invader at zero; even counts straddle it.
pub fn column_offsets(columns: u32, spacing: f32) -> Vec<f32> {
    let cols = columns as i32;
    let low = 1 - cols / 2 - cols % 2;
    let high = cols / 2;
    let start = if cols % 2 > 0 { 0.0 } else { -spacing / 2.0 };

    (low..=high).map(|i| start + i as f32 * spacing).collect()
}

/// Spawn height of a 1-based row.
pub fn row_height(row: u32) -> f32 {
    ROW_BASE_HEIGHT + row as f32 * INVADER_SPACING
}

/// Boundary pairs for an invader spawned at `spawn`.
///
/// Sweep states turn `SWEEP_HALF_WIDTH` either side of the spawn x; both
/// drop states first stop one `DROP_STEP` below the spawn height.
pub fn generate_limits(spawn: Vec2) -> [Vec2; 4] {
    let right = spawn.x + SWEEP_HALF_WIDTH;
    let left = spawn.x - SWEEP_HALF_WIDTH;
    let drop_to = spawn.y - DROP_STEP;
    [
        Vec2::new(right, 0.0),
        Vec2::new(right, drop_to),
        Vec2::new(left, 0.0),
        Vec2::new(left, drop_to),
    ]
}

/// Speed an invader starts the round with.
pub fn initial_speed(max_speed: f32) -> f32 {
    INVADER_BASE_SPEED.min(max_speed)
}

/// Every slot of a rows × columns formation, bottom row first.
pub fn formation(rows: u32, columns: u32) -> Vec<FormationSlot> {
    let offsets = column_offsets(columns, INVADER_SPACING);
    (1..=rows)
        .flat_map(|row| {
            let y = row_height(row);
            offsets
                .iter()
                .enumerate()
                .map(move |(column, &x)| FormationSlot {
                    row,
                    column: column as u32,
                    glyph: column as u32 + 1,
                    position: Vec2::new(x, y),
                })
        })
        .collect()
}
