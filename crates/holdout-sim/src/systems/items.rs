//! Item pickup system.
//!
//! An item the player overlaps is released from its pool before its effect
//! is applied, so no item can be collected twice.

use tracing::debug;

use holdout_core::constants::PICKUP_RADIUS;
use holdout_core::enums::Sound;
use holdout_core::types::ground;

use crate::pickups;
use crate::world::GameWorld;

/// Collect every item within reach of the player.
pub fn run(world: &mut GameWorld) {
    let player = world.player.position;
    let reached: Vec<usize> = world
        .items
        .iter()
        .filter(|(_, item)| ground(item.position).distance(player) < PICKUP_RADIUS)
        .map(|(slot, _)| slot)
        .collect();

    for slot in reached {
        let Some(item) = world.items.release(slot) else {
            continue;
        };
        pickups::apply(&item.pickup, &mut world.player, &mut world.arsenal);
        world.play(Sound::Pickup, 1.0, 1.0);
        debug!(slot, pickup = ?item.pickup, "item collected");
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use holdout_core::components::{Item, Pickup};
    use holdout_core::enums::WeaponKind;
    use holdout_core::types::lift;

    use super::*;
    use crate::config::SimConfig;
    use crate::world_setup::spawn_item;

    fn ammo_at(w: &mut GameWorld, at: Vec2) -> usize {
        spawn_item(
            w,
            Item {
                position: lift(at, 0.0),
                pickup: Pickup::Ammo {
                    weapon: WeaponKind::Pistol,
                    amount: 5,
                },
            },
        )
        .unwrap()
    }

    #[test]
    fn overlapping_item_applies_once() {
        let mut w = GameWorld::new(&SimConfig::default());
        let slot = ammo_at(&mut w, Vec2::new(0.5, 0.0));

        run(&mut w);
        assert!(!w.items.is_active(slot));
        assert_eq!(w.arsenal.state(WeaponKind::Pistol).ammo, 25);

        run(&mut w);
        assert_eq!(w.arsenal.state(WeaponKind::Pistol).ammo, 25);
        assert_eq!(w.audio_events.len(), 1);
    }

    #[test]
    fn reach_is_strict() {
        let mut w = GameWorld::new(&SimConfig::default());
        let edge = ammo_at(&mut w, Vec2::new(PICKUP_RADIUS, 0.0));
        run(&mut w);
        assert!(w.items.is_active(edge));
        assert_eq!(w.arsenal.state(WeaponKind::Pistol).ammo, 20);
    }

    #[test]
    fn freed_slot_is_reused() {
        let mut w = GameWorld::new(&SimConfig::default());
        let slot = ammo_at(&mut w, Vec2::ZERO);
        run(&mut w);
        assert_eq!(ammo_at(&mut w, Vec2::new(20.0, 20.0)), slot);
    }
}
