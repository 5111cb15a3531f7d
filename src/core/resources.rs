//! Core domain: camera settings.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct CameraSettings {
    /// The camera never follows the player below this height
    pub min_y: f32,
    /// Screen pixels per world unit
    pub pixels_per_unit: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            min_y: 0.0,
            pixels_per_unit: 32.0,
        }
    }
}

/// Marker for the camera that tracks the player
#[derive(Component, Debug)]
pub struct MainCamera;
