//! Wave director: escalates to the next wave once every enemy of the
//! current one is dead, or declares victory when the next wave would not
//! fit in the enemy pool.

use tracing::info;

use holdout_core::constants::ENEMIES_PER_WAVE_STEP;
use holdout_core::enums::{GameMode, Sound};

use crate::world::GameWorld;
use crate::world_setup::{spawn_ammo_drops, spawn_wave};

/// Check for a cleared wave and start the next one.
pub fn run(world: &mut GameWorld) {
    if world.mode.is_terminal() || world.wave.live_enemies >= 1 {
        return;
    }

    let wave = &mut world.wave;
    wave.max_enemies += wave.wave * ENEMIES_PER_WAVE_STEP;
    wave.wave += 1;
    wave.live_enemies = wave.max_enemies;
    let (number, target) = (wave.wave, wave.max_enemies);

    if target as usize > world.enemies.capacity() {
        world.mode = GameMode::Victory;
        world.play(Sound::Victory, 1.0, 1.0);
        info!(wave = number, score = world.wave.score, "all waves survived, victory");
        return;
    }

    spawn_wave(world, target);
    spawn_ammo_drops(world);
    world.play(Sound::WaveStart, 1.0, 1.0);
    info!(wave = number, enemies = target, "wave started");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::world_setup::setup_session;

    fn session(capacity: usize) -> GameWorld {
        let config = SimConfig::default()
            .with_enemy_capacity(capacity)
            .with_starting_enemies(5);
        let mut world = GameWorld::new(&config);
        setup_session(&mut world, &config);
        world
    }

    #[test]
    fn live_wave_is_left_alone() {
        let mut w = session(250);
        let before = w.wave;
        run(&mut w);
        assert_eq!(w.wave, before);
    }

    #[test]
    fn cleared_wave_escalates() {
        let mut w = session(250);
        w.enemies.clear();
        w.wave.live_enemies = 0;

        run(&mut w);

        assert_eq!(w.wave.wave, 2);
        assert_eq!(w.wave.max_enemies, 15);
        assert_eq!(w.wave.live_enemies, 15);
        assert_eq!(w.enemies.active_count(), 15);
        assert!(w.items.active_count() >= 3);
        assert_eq!(w.mode, GameMode::Playing);
    }

    #[test]
    fn overflowing_wave_is_victory() {
        let mut w = session(14);
        w.enemies.clear();
        w.wave.live_enemies = 0;

        run(&mut w);

        assert_eq!(w.mode, GameMode::Victory);
        assert_eq!(w.wave.max_enemies, 15);
        assert_eq!(w.enemies.active_count(), 0);
        assert_eq!(w.items.active_count(), 0);
    }

    #[test]
    fn exact_fit_still_spawns() {
        let mut w = session(15);
        w.enemies.clear();
        w.wave.live_enemies = 0;
        run(&mut w);
        assert_eq!(w.mode, GameMode::Playing);
        assert_eq!(w.enemies.active_count(), 15);
    }

    #[test]
    fn terminal_mode_halts_escalation() {
        let mut w = session(250);
        w.wave.live_enemies = 0;
        w.mode = GameMode::GameOver;
        run(&mut w);
        assert_eq!(w.wave.wave, 1);
    }
}
