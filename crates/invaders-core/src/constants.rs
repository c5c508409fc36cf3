//! Simulation constants and tuning parameters.
//!
//! Distances are in meters of AR world space: x is lateral, y is height
//! above the ship's firing line, z is depth away from the viewer.

/// Simulation tick rate (Hz) used by the headless runner.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal tick rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Formation layout ---

/// Horizontal and vertical distance between neighbouring invaders.
pub const INVADER_SPACING: f32 = 0.1;

/// Height of the row below the first spawned row. Row `n` spawns at
/// `ROW_BASE_HEIGHT + n * INVADER_SPACING`.
pub const ROW_BASE_HEIGHT: f32 = 0.5;

/// Lateral travel from an invader's spawn x to either sweep boundary.
pub const SWEEP_HALF_WIDTH: f32 = 0.5;

/// Vertical distance covered by one drop.
pub const DROP_STEP: f32 = SWEEP_HALF_WIDTH / 4.0;

// --- Invader speed ---

/// Speed every invader starts a round with (m/s), capped by the configured maximum.
pub const INVADER_BASE_SPEED: f32 = 0.05;

/// Speed gained each time an invader completes a drop.
pub const INVADER_SPEED_INCREMENT: f32 = 0.01;

// --- Configuration bounds ---

/// Lowest accepted invader speed ceiling.
pub const MIN_MAX_SPEED: f32 = 0.06;

/// Highest accepted invader speed ceiling.
pub const MAX_MAX_SPEED: f32 = 0.2;

/// Largest accepted number of invader rows.
pub const MAX_ROWS: u32 = 10;

/// Largest accepted number of invader columns.
pub const MAX_COLUMNS: u32 = 9;

/// Default number of invader rows.
pub const DEFAULT_ROWS: u32 = 5;

/// Default number of invader columns.
pub const DEFAULT_COLUMNS: u32 = 9;

// --- Bullets ---

/// Constant upward speed of a fired bullet (m/s).
pub const BULLET_SPEED: f32 = 1.5;

/// Bullets further than this from the origin on any axis are reclaimed.
pub const PLAY_VOLUME_HALF_EXTENT: f32 = 3.0;

// --- Zones ---

/// Height of the loss-trigger slab, just above the ship's firing line.
pub const LOSS_TRIGGER_HEIGHT: f32 = 0.1;

/// Height of the bullet sponge, above the highest possible invader row.
pub const BULLET_SPONGE_HEIGHT: f32 =
    ROW_BASE_HEIGHT + (MAX_ROWS as f32 + 2.0) * INVADER_SPACING;

// --- Collision extents (half sizes of axis-aligned boxes) ---

/// Half size of an invader's collision cube.
pub const INVADER_HALF_EXTENT: f32 = 0.035;

/// Half size of a bullet's collision cube.
pub const BULLET_HALF_EXTENT: f32 = 0.01;

/// Half width (x) of a zone slab.
pub const ZONE_HALF_WIDTH: f32 = 2.0;

/// Half thickness (y) of a zone slab.
pub const ZONE_HALF_THICKNESS: f32 = 0.02;

/// Half depth (z) of a zone slab.
pub const ZONE_HALF_DEPTH: f32 = 1.0;
