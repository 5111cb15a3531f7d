//! Core domain: camera setup and follow.

use bevy::prelude::*;

use crate::core::resources::{CameraSettings, MainCamera};
use crate::movement::Player;

pub(crate) fn setup_camera(mut commands: Commands, settings: Res<CameraSettings>) {
    commands.spawn((
        Camera2d,
        MainCamera,
        Projection::from(OrthographicProjection {
            scale: 1.0 / settings.pixels_per_unit,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Track the target in X and Y, never dropping below `min_y`. Depth is preserved.
pub fn follow_position(camera: Vec3, target: Vec2, min_y: f32) -> Vec3 {
    Vec3::new(target.x, target.y.max(min_y), camera.z)
}

pub(crate) fn follow_player(
    settings: Res<CameraSettings>,
    player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };

    for mut transform in &mut camera {
        transform.translation = follow_position(
            transform.translation,
            player_transform.translation.truncate(),
            settings.min_y,
        );
    }
}
