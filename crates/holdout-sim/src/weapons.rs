//! Weapon registry: static definitions plus per-weapon runtime state.
//!
//! The fire animation doubles as the rate limiter. A weapon can only fire
//! from frame 0; firing jumps to the last frame and the animation has to run
//! back down before the next shot.

use holdout_core::components::WeaponState;
use holdout_core::constants::AMMO_CAP_FLOOR;
use holdout_core::enums::{FireEffect, Sound, WeaponKind};

/// Immutable definition of a weapon type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponDef {
    pub kind: WeaponKind,
    /// Damage per hit (per ray for scatter, per explosion for projectiles).
    pub damage: i32,
    /// Ammo cap before any ammo bags.
    pub ammo_cap: i32,
    /// Ammo loaded when the session starts.
    pub starting_ammo: i32,
    /// Frames in the fire animation.
    pub frames: i32,
    /// Seconds per fire-animation frame.
    pub frame_time: f32,
    pub fire: FireEffect,
    pub sound: Sound,
    /// Ammo granted by one ammo pickup.
    pub pickup_ammo: i32,
}

/// Get the static definition for a weapon type.
pub fn definition(kind: WeaponKind) -> WeaponDef {
    match kind {
        WeaponKind::Pistol => WeaponDef {
            kind,
            damage: 1,
            ammo_cap: 50,
            starting_ammo: 20,
            frames: 4,
            frame_time: 0.06,
            fire: FireEffect::Hitscan,
            sound: Sound::PistolShot,
            pickup_ammo: 12,
        },
        WeaponKind::Launcher => WeaponDef {
            kind,
            damage: 6,
            ammo_cap: AMMO_CAP_FLOOR,
            starting_ammo: 0,
            frames: 6,
            frame_time: 0.12,
            fire: FireEffect::Projectile,
            sound: Sound::LauncherShot,
            pickup_ammo: 3,
        },
        WeaponKind::Shotgun => WeaponDef {
            kind,
            damage: 1,
            ammo_cap: 24,
            starting_ammo: 0,
            frames: 8,
            frame_time: 0.09,
            fire: FireEffect::Scatter,
            sound: Sound::ShotgunBlast,
            pickup_ammo: 6,
        },
    }
}

/// Runtime state of every weapon, indexed by `WeaponKind::index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arsenal {
    weapons: [WeaponState; WeaponKind::COUNT],
}

impl Arsenal {
    /// Fresh session loadout: only the pistol is unlocked.
    pub fn new() -> Self {
        let weapons = WeaponKind::ALL.map(|kind| {
            let def = definition(kind);
            WeaponState {
                unlocked: kind == WeaponKind::Pistol,
                ammo: def.starting_ammo.min(def.ammo_cap),
                ammo_cap: def.ammo_cap,
                current_frame: 0,
                timer_secs: 0.0,
            }
        });
        Self { weapons }
    }

    pub fn state(&self, kind: WeaponKind) -> &WeaponState {
        &self.weapons[kind.index()]
    }

    pub fn state_mut(&mut self, kind: WeaponKind) -> &mut WeaponState {
        &mut self.weapons[kind.index()]
    }

    /// Every weapon with its state, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (WeaponKind, &WeaponState)> {
        WeaponKind::ALL.into_iter().zip(self.weapons.iter())
    }

    /// Whether any weapon is mid fire-animation.
    pub fn is_busy(&self) -> bool {
        self.weapons.iter().any(|w| w.current_frame > 0)
    }

    /// Whether `kind` may fire right now.
    pub fn can_fire(&self, kind: WeaponKind) -> bool {
        let state = self.state(kind);
        state.unlocked && state.current_frame == 0 && state.ammo > 0
    }

    /// Pull the trigger on `kind`. On success one round is spent, the fire
    /// animation starts, and the definition is returned so the caller can run
    /// its fire effect exactly once.
    pub fn try_fire(&mut self, kind: WeaponKind) -> Option<WeaponDef> {
        if !self.can_fire(kind) {
            return None;
        }
        let def = definition(kind);
        let state = self.state_mut(kind);
        state.ammo -= 1;
        state.current_frame = def.frames - 1;
        state.timer_secs = 0.0;
        Some(def)
    }

    /// Step every running fire animation toward frame 0.
    pub fn animate(&mut self, dt: f32) {
        for (kind, state) in WeaponKind::ALL.into_iter().zip(self.weapons.iter_mut()) {
            if state.current_frame <= 0 {
                continue;
            }
            state.timer_secs += dt;
            if state.timer_secs > definition(kind).frame_time {
                state.timer_secs = 0.0;
                state.current_frame -= 1;
            }
        }
    }

    /// Next unlocked weapon after `current`, wrapping around.
    pub fn next_unlocked(&self, current: WeaponKind) -> Option<WeaponKind> {
        (1..=WeaponKind::COUNT)
            .map(|step| WeaponKind::from_index((current.index() + step) % WeaponKind::COUNT))
            .find(|kind| *kind != current && self.state(*kind).unlocked)
    }
}

impl Default for Arsenal {
    fn default() -> Self {
        Self::new()
    }
}
