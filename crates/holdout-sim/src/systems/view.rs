//! View and movement system.
//!
//! Rotates the camera from pointer delta, moves the player on the ground
//! plane, and puts the camera eye back on the player.

use holdout_core::commands::FrameInput;
use holdout_core::constants::{CAMERA_PITCH_LIMIT, PLAYER_EYE_HEIGHT, PLAYER_SHOVE_DAMPING};
use holdout_core::types::lift;

use crate::world::GameWorld;

/// Apply one frame of view and movement input.
pub fn run(world: &mut GameWorld, input: &FrameInput, dt: f32, sensitivity: f32, move_speed: f32) {
    let camera = &mut world.camera;
    camera.yaw += input.look_delta.x * sensitivity;
    camera.pitch = (camera.pitch - input.look_delta.y * sensitivity)
        .clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);

    let movement = input.movement.clamp_length_max(1.0);
    let wish = camera.ground_right() * movement.x + camera.ground_forward() * movement.y;

    let player = &mut world.player;
    let step = (wish * move_speed + player.velocity) * dt;
    player.position = world.bounds.clamp(player.position + step);

    // Shove velocity bleeds off exponentially
    let damping = (1.0 - PLAYER_SHOVE_DAMPING * dt).max(0.0);
    player.velocity *= damping;

    world.camera.position = lift(player.position, PLAYER_EYE_HEIGHT);
}
