//! Enemy behavior finite state machine.
//!
//! Pure functions that compute state transitions, heading, and animation
//! changes for one enemy from its current situation. No world access: the
//! caller advances the animation timer and integrates position beforehand,
//! then applies the returned update and any attack it requests.

use glam::Vec2;
use rand::Rng;

use holdout_core::enums::EnemyState;

/// Input to the FSM for a single enemy.
#[derive(Debug, Clone, Copy)]
pub struct EnemyContext {
    pub state: EnemyState,
    /// Animation counter after this frame's timer step; -1 ends a cycle.
    pub anim_frame: i32,
    pub anim_frames: i32,
    pub velocity: Vec2,
    /// Ground-plane vector from the enemy to the player.
    pub to_player: Vec2,
    pub detect_range: f32,
    pub attack_range: f32,
}

impl EnemyContext {
    fn distance(&self) -> f32 {
        self.to_player.length()
    }

    fn rearmed(&self) -> i32 {
        self.anim_frames - 1
    }
}

/// Output from the FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyUpdate {
    pub state: EnemyState,
    pub velocity: Vec2,
    pub anim_frame: i32,
    /// Rows to add to the sprite row (+1 entering Attack, -1 leaving it).
    pub sprite_row_shift: i32,
    /// The enemy's attack effect should fire this frame.
    pub attack: bool,
    pub state_changed: bool,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate<R: Rng + ?Sized>(ctx: &EnemyContext, rng: &mut R) -> EnemyUpdate {
    match ctx.state {
        EnemyState::Wander => evaluate_wander(ctx, rng),
        EnemyState::Pursue => evaluate_pursue(ctx),
        EnemyState::Attack => evaluate_attack(ctx),
    }
}

fn no_change(ctx: &EnemyContext) -> EnemyUpdate {
    EnemyUpdate {
        state: ctx.state,
        velocity: ctx.velocity,
        anim_frame: ctx.anim_frame,
        sprite_row_shift: 0,
        attack: false,
        state_changed: false,
    }
}

fn evaluate_wander<R: Rng + ?Sized>(ctx: &EnemyContext, rng: &mut R) -> EnemyUpdate {
    let mut update = no_change(ctx);

    if ctx.anim_frame == -1 {
        update.anim_frame = ctx.rearmed();
        if rng.gen_range(0..=1) == 1 {
            update.velocity = wander_direction(rng);
        }
    }

    if ctx.distance() < ctx.detect_range {
        update.state = EnemyState::Pursue;
        update.anim_frame = 0;
        update.state_changed = true;
    }

    update
}

fn evaluate_pursue(ctx: &EnemyContext) -> EnemyUpdate {
    let mut update = no_change(ctx);
    update.velocity = ctx.to_player.normalize_or_zero();

    if ctx.anim_frame == -1 {
        update.anim_frame = ctx.rearmed();
    }

    if ctx.distance() < ctx.attack_range {
        update.state = EnemyState::Attack;
        update.velocity = Vec2::ZERO;
        update.anim_frame = 0;
        update.sprite_row_shift = 1;
        update.attack = true;
        update.state_changed = true;
    }

    update
}

fn evaluate_attack(ctx: &EnemyContext) -> EnemyUpdate {
    let mut update = no_change(ctx);

    if ctx.anim_frame != -1 {
        return update;
    }

    if ctx.distance() >= ctx.attack_range {
        // Target slipped away: chase again without striking
        update.state = EnemyState::Pursue;
        update.anim_frame = 0;
        update.sprite_row_shift = -1;
        update.state_changed = true;
    } else {
        update.anim_frame = ctx.rearmed();
        update.attack = true;
    }

    update
}

/// One of the nine headings from {-1,0,1}², normalized. Zero stays zero.
pub fn wander_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let x = rng.gen_range(-1..=1) as f32;
    let y = rng.gen_range(-1..=1) as f32;
    Vec2::new(x, y).normalize_or_zero()
}
