//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterController, GameLayer, MovementTuning, Player};

/// Collider size in world units; the default probe layout is tuned against it.
pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(1.7, 2.0);

/// Spawn the player as a dynamic body whose gravity scale the controller owns.
pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    info!(
        "Spawning player: max_speed={}, jump_speed={}, jump_delay={}",
        tuning.max_speed, tuning.jump_speed, tuning.jump_delay
    );

    commands.spawn((
        Player,
        CharacterController::new(&tuning.probes),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(8.0, 0.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            Mass(1.0),
            LinearVelocity::default(),
            GravityScale(1.0),
            Friction::new(0.0).with_combine_rule(CoefficientCombine::Min),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
