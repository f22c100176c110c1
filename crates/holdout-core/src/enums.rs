//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Drifting in a random direction until the player comes into view.
    #[default]
    Wander,
    /// Homing on the player.
    Pursue,
    /// In range, striking once per animation cycle.
    Attack,
}

/// Enemy archetype. Later kinds unlock as waves progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Grunt,
    Runner,
    Brute,
    Stalker,
}

impl EnemyKind {
    /// Every kind, in unlock order.
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Grunt,
        EnemyKind::Runner,
        EnemyKind::Brute,
        EnemyKind::Stalker,
    ];

    /// Number of enemy kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Kind for an unlock index, clamped to the last kind.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::COUNT - 1)]
    }
}

/// Weapon type. The discriminant doubles as the registry index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Hitscan sidearm, unlocked from the start.
    #[default]
    Pistol,
    /// Lobs an explosive projectile.
    Launcher,
    /// Fans out a spread of rays.
    Shotgun,
}

impl WeaponKind {
    /// Every weapon, in registry order.
    pub const ALL: [WeaponKind; 3] = [WeaponKind::Pistol, WeaponKind::Launcher, WeaponKind::Shotgun];

    /// Number of weapon types.
    pub const COUNT: usize = Self::ALL.len();

    /// Registry index of this weapon.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Weapon for a registry index, clamped to the valid range.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::COUNT - 1)]
    }
}

/// What happens when a weapon discharges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireEffect {
    /// One ray along the view; every enemy on it is hit.
    Hitscan,
    /// One ballistic projectile along the view.
    Projectile,
    /// A fan of rays, each striking the enemy nearest the player.
    Scatter,
}

/// What an enemy does to the player each time its attack lands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AttackEffect {
    /// Plain melee hit.
    Strike { damage: i32 },
    /// Heavy hit that also shoves the player away from the attacker.
    Maul { damage: i32, shove: f32 },
}

impl Default for AttackEffect {
    fn default() -> Self {
        AttackEffect::Strike { damage: 1 }
    }
}

/// What happens when an enemy dies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum DeathEffect {
    /// Leaves nothing behind.
    #[default]
    Nothing,
    /// Drops a random loot item with the given percent chance.
    DropLoot { chance_percent: i32 },
}

/// Top-level game mode. Terminal modes replace the per-frame update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Playing,
    /// Player health fell below zero.
    GameOver,
    /// A wave target exceeded enemy capacity.
    Victory,
}

impl GameMode {
    /// Whether the session has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameMode::Playing)
    }
}

/// Static scenery variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropKind {
    #[default]
    Crate,
    Barrel,
    Pillar,
    Lamp,
}

impl PropKind {
    pub const ALL: [PropKind; 4] = [PropKind::Crate, PropKind::Barrel, PropKind::Pillar, PropKind::Lamp];
}

/// Named sound effects requested from the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    PistolShot,
    LauncherShot,
    ShotgunBlast,
    EnemyHit,
    EnemyDeath,
    EnemyAttack,
    PlayerHurt,
    Explosion,
    Pickup,
    WaveStart,
    GameOver,
    Victory,
}
