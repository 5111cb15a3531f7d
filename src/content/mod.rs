//! Content domain: data-driven controller tuning loaded at startup.

mod loader;
mod validation;


pub use loader::{TuningLoadError, load_tuning, parse_json, parse_ron};
pub use validation::{TuningValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::movement::MovementTuning;

/// Where the tuning file lives. `.ron` and `.json` are both accepted.
#[derive(Resource, Debug, Clone)]
pub struct TuningSource {
    pub path: PathBuf,
}

impl Default for TuningSource {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/data/controller.ron"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningSource>()
            // Tuning must be in place before the player spawns at Startup
            .add_systems(PreStartup, load_controller_tuning);
    }
}

/// Load, validate and install tuning. Any failure keeps the built-in defaults.
fn load_controller_tuning(mut commands: Commands, source: Res<TuningSource>) {
    let tuning = match load_tuning(&source.path) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default tuning", e);
            commands.insert_resource(MovementTuning::default());
            return;
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        warn!(
            "{} has {} invalid field(s); using default tuning",
            source.path.display(),
            errors.len()
        );
        commands.insert_resource(MovementTuning::default());
        return;
    }

    info!(
        "Loaded controller tuning from {}: max_speed={}, jump_speed={}, decay={}/{}",
        source.path.display(),
        tuning.max_speed,
        tuning.jump_speed,
        tuning.normal_decay,
        tuning.idle_decay
    );
    commands.insert_resource(tuning);
}
