//! Simulation constants and tuning parameters.

// --- Arena ---

/// Default half extent of the square play area (world units).
pub const ARENA_HALF_EXTENT: f32 = 64.0;

/// Default inset from the arena edge that entities are clamped to.
pub const ARENA_MARGIN: f32 = 2.0;

// --- Pool capacities ---

/// Maximum simultaneous enemies. Reaching a wave target above this wins the game.
pub const ENEMY_CAPACITY: usize = 250;

/// Maximum simultaneous projectiles in flight.
pub const PROJECTILE_CAPACITY: usize = 64;

/// Maximum simultaneous items lying in the world.
pub const ITEM_CAPACITY: usize = 128;

/// Maximum props placed in the arena.
pub const PROP_CAPACITY: usize = 64;

// --- Player ---

/// Player starting health.
pub const PLAYER_START_HEALTH: i32 = 10;

/// Player starting health cap.
pub const PLAYER_START_HEALTH_CAP: i32 = 10;

/// Camera eye height above the ground.
pub const PLAYER_EYE_HEIGHT: f32 = 1.0;

/// Pitch limit (radians) so the view never flips over.
pub const CAMERA_PITCH_LIMIT: f32 = 1.45;

/// Player velocity decay per second after a shove.
pub const PLAYER_SHOVE_DAMPING: f32 = 6.0;

/// Ground-plane radius inside which the player collects an item.
pub const PICKUP_RADIUS: f32 = 1.0;

// --- Stat floors ---

/// A weapon's ammo cap never drops below this.
pub const AMMO_CAP_FLOOR: i32 = 10;

/// The player's health cap never drops below this.
pub const HEALTH_CAP_FLOOR: i32 = 3;

// --- Enemies ---

/// Height of an enemy's body center above the ground (hit spheres, proximity fuse).
pub const ENEMY_CENTER_HEIGHT: f32 = 1.0;

/// Score awarded per enemy killed.
pub const SCORE_PER_KILL: u32 = 100;

// --- Weapons ---

/// Precise hit-sphere radius around an enemy for ray weapons.
pub const HIT_RADIUS: f32 = 0.75;

/// Wide hit-sphere radius used by the scatter weapon's target selection.
pub const WIDE_HIT_RADIUS: f32 = 1.0;

/// Number of rays cast per scatter shot.
pub const SCATTER_RAY_COUNT: usize = 8;

/// Maximum perpendicular offset applied to scatter rays before rotation.
pub const SCATTER_SPREAD: f32 = 0.12;

/// Launch speed of a launcher projectile.
pub const PROJECTILE_LAUNCH_SPEED: f32 = 18.0;

// --- Projectiles ---

/// Distance to an enemy body center that triggers a projectile explosion.
pub const PROJECTILE_FUSE_RADIUS: f32 = 0.5;

/// Radius of projectile splash damage on the ground plane.
pub const SPLASH_RADIUS: f32 = 9.5;

/// Vertical velocity lost per second by projectiles in flight.
pub const PROJECTILE_DROP: f32 = 6.0;

// --- Waves ---

/// Enemies in the first wave.
pub const STARTING_ENEMIES: u32 = 5;

/// Extra enemies added per wave number when a wave is cleared.
pub const ENEMIES_PER_WAVE_STEP: u32 = 10;

/// Fewest ammo pickups scattered after a wave is cleared.
pub const WAVE_AMMO_DROPS_MIN: i32 = 3;

/// Most ammo pickups scattered after a wave is cleared.
pub const WAVE_AMMO_DROPS_MAX: i32 = 7;

// --- Props ---

/// Props scattered at session start.
pub const PROP_COUNT: usize = 24;
