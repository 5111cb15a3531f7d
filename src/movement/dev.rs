//! Movement domain: test room and debug-only probe gizmos.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};
#[cfg(feature = "dev-tools")]
use crate::movement::{CharacterController, MovementTuning, Player, ProbeSet};

#[derive(Clone, Copy)]
enum Surface {
    Ground,
    Wall,
}

fn spawn_block(commands: &mut Commands, surface: Surface, size: Vec2, at: Vec2) {
    let mut block = commands.spawn((
        Transform::from_xyz(at.x, at.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    ));

    match surface {
        Surface::Ground => block.insert((
            Ground,
            Sprite {
                color: Color::srgb(0.4, 0.5, 0.4),
                custom_size: Some(size),
                ..default()
            },
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        )),
        Surface::Wall => block.insert((
            Wall,
            Sprite {
                color: Color::srgb(0.3, 0.3, 0.4),
                custom_size: Some(size),
                ..default()
            },
            CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
        )),
    };
}

/// Static terrain for trying out runs, wall slides and wall jumps.
pub(crate) fn spawn_test_room(mut commands: Commands) {
    // Floor
    spawn_block(&mut commands, Surface::Ground, Vec2::new(60.0, 2.0), Vec2::new(0.0, -4.0));

    // Outer walls
    spawn_block(&mut commands, Surface::Wall, Vec2::new(2.0, 30.0), Vec2::new(-31.0, 10.0));
    spawn_block(&mut commands, Surface::Wall, Vec2::new(2.0, 30.0), Vec2::new(31.0, 10.0));

    // Platforms
    spawn_block(&mut commands, Surface::Ground, Vec2::new(8.0, 1.0), Vec2::new(-8.0, 2.0));
    spawn_block(&mut commands, Surface::Ground, Vec2::new(8.0, 1.0), Vec2::new(14.0, 5.0));
    spawn_block(&mut commands, Surface::Ground, Vec2::new(6.0, 1.0), Vec2::new(2.0, 9.0));

    // Narrow shaft for chained wall jumps
    spawn_block(&mut commands, Surface::Wall, Vec2::new(1.5, 14.0), Vec2::new(-22.0, 4.0));
    spawn_block(&mut commands, Surface::Wall, Vec2::new(1.5, 14.0), Vec2::new(-17.0, 4.0));
}

#[cfg(feature = "dev-tools")]
pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<MovementTuning>,
    query: Query<(&Transform, &CharacterController), With<Player>>,
) {
    for (transform, controller) in &query {
        let probes = ProbeSet::new(
            transform.translation.truncate(),
            controller.orientation.base_offset,
            &tuning.probes,
        );
        for ray in probes.rays() {
            gizmos.line_2d(ray.origin, ray.end(), Color::srgb(1.0, 0.0, 0.0));
        }
    }
}
