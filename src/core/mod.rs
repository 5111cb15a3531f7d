//! Core domain: camera and shared app setup.

mod resources;
mod systems;


pub use resources::{CameraSettings, MainCamera};
pub use systems::follow_position;

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Startup, setup_camera)
            .add_systems(PostUpdate, follow_player);
    }
}
