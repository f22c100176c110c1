//! Pickup effects. Every stat change is clamped so caps never fall below
//! their floors and current values never exceed their caps.

use rand::Rng;

use holdout_core::components::{Pickup, Player};
use holdout_core::constants::{AMMO_CAP_FLOOR, HEALTH_CAP_FLOOR};
use holdout_core::enums::WeaponKind;

use crate::random::roll;
use crate::weapons::{definition, Arsenal};

/// Apply a pickup's effect to the player and their weapons.
pub fn apply(pickup: &Pickup, player: &mut Player, arsenal: &mut Arsenal) {
    match *pickup {
        Pickup::Ammo { weapon, amount } => {
            let state = arsenal.state_mut(weapon);
            state.ammo = (state.ammo + amount).clamp(0, state.ammo_cap);
        }
        Pickup::UnlockWeapon { weapon } => {
            let state = arsenal.state_mut(weapon);
            state.unlocked = true;
            state.ammo = (state.ammo + 1).clamp(0, state.ammo_cap);
        }
        Pickup::AmmoBag { weapon, extra } => {
            let state = arsenal.state_mut(weapon);
            state.ammo_cap = (state.ammo_cap + extra).max(AMMO_CAP_FLOOR);
            state.ammo = state.ammo.clamp(0, state.ammo_cap);
        }
        Pickup::Heal { amount } => {
            player.health = (player.health + amount).min(player.health_cap);
        }
        Pickup::HealthBoost { amount } => {
            player.health_cap = (player.health_cap + amount).max(HEALTH_CAP_FLOOR);
            player.health = player.health.min(player.health_cap);
        }
    }
}

/// Standard ammo refill for a weapon.
pub fn ammo_pickup(weapon: WeaponKind) -> Pickup {
    Pickup::Ammo {
        weapon,
        amount: definition(weapon).pickup_ammo,
    }
}

/// Random loot dropped by a dying enemy.
pub fn random_loot<R: Rng + ?Sized>(rng: &mut R) -> Pickup {
    let weapon = WeaponKind::from_index(roll(rng, 0, WeaponKind::COUNT as i32 - 1) as usize);
    match roll(rng, 0, 9) {
        0..=3 => ammo_pickup(weapon),
        4..=5 => Pickup::Heal { amount: 2 },
        6 => Pickup::UnlockWeapon { weapon },
        7 => Pickup::AmmoBag { weapon, extra: 5 },
        8 => Pickup::HealthBoost { amount: 2 },
        _ => Pickup::Heal { amount: 4 },
    }
}
