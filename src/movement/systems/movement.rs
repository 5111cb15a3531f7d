//! Movement domain: fixed-rate motion policy and jump activation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AvianBody, CharacterController, JumpKind, MovementTuning, Player};

/// Runs in `FixedUpdate`, ahead of avian's integration in `FixedPostUpdate`.
pub(crate) fn apply_motion(
    time: Res<Time<Virtual>>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut CharacterController,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
        ),
        With<Player>,
    >,
) {
    // Same clock as the jump buffer deadline
    let now = time.elapsed_secs();

    for (mut controller, mut velocity, mut gravity_scale, mass) in &mut query {
        let mut body = AvianBody {
            velocity: &mut velocity,
            gravity_scale: &mut gravity_scale,
            inverse_mass: mass.inverse(),
        };

        let report = controller.on_fixed_tick(now, &mut body, &tuning);

        match report.jump {
            Some(JumpKind::Ground) => debug!("Ground jump: v={:?}", velocity.0),
            Some(JumpKind::Wall(side)) => debug!(
                "Wall jump off {:?}: v={:?}, lockout_left={:.2}, lockout_right={:.2}",
                side,
                velocity.0,
                controller.timers.stop_left_timer,
                controller.timers.stop_right_timer
            ),
            None => {}
        }
    }
}
