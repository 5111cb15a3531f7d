//! Range checks for controller tuning.

use crate::movement::MovementTuning;

/// A tuning value outside its allowed range.
#[derive(Debug, PartialEq)]
pub struct TuningValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for TuningValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tuning field '{}' = {} is out of range (expected {})",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a field satisfies a predicate
macro_rules! check_range {
    ($errors:expr, $value:expr, $field:expr, $expected:expr, |$v:ident| $pred:expr) => {{
        let $v = $value;
        if !($pred) {
            $errors.push(TuningValidationError {
                field: $field,
                value: $v,
                expected: $expected,
            });
        }
    }};
}

/// Validate every tuning value.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<TuningValidationError> {
    let mut errors = Vec::new();

    // Speeds
    check_range!(errors, tuning.move_speed, "move_speed", "> 0", |v| v > 0.0);
    check_range!(errors, tuning.max_speed, "max_speed", "> 0", |v| v > 0.0);
    check_range!(errors, tuning.max_fall_speed, "max_fall_speed", "< 0", |v| v < 0.0);
    check_range!(errors, tuning.jump_speed, "jump_speed", "> 0", |v| v > 0.0);
    check_range!(errors, tuning.stop_threshold, "stop_threshold", ">= 0", |v| v >= 0.0);

    // Damping
    check_range!(errors, tuning.normal_decay, "normal_decay", "in (0, 1]", |v| {
        v > 0.0 && v <= 1.0
    });
    check_range!(errors, tuning.idle_decay, "idle_decay", "in (0, 1]", |v| {
        v > 0.0 && v <= 1.0
    });

    // Gravity scales
    check_range!(errors, tuning.jump_gravity, "jump_gravity", ">= 0", |v| v >= 0.0);
    check_range!(errors, tuning.fall_gravity, "fall_gravity", ">= 0", |v| v >= 0.0);
    check_range!(
        errors,
        tuning.wall_slide_gravity,
        "wall_slide_gravity",
        ">= 0",
        |v| v >= 0.0
    );
    check_range!(
        errors,
        tuning.jump_cut_multiplier,
        "jump_cut_multiplier",
        ">= 1",
        |v| v >= 1.0
    );

    // Wall jump and timers
    check_range!(
        errors,
        tuning.wall_jump_push_multiplier,
        "wall_jump_push_multiplier",
        ">= 0",
        |v| v >= 0.0
    );
    check_range!(errors, tuning.jump_delay, "jump_delay", "> 0", |v| v > 0.0);
    check_range!(
        errors,
        tuning.stop_horizontal_timer,
        "stop_horizontal_timer",
        ">= 0",
        |v| v >= 0.0
    );

    // Probes
    check_range!(errors, tuning.probes.down_len, "probes.down_len", "> 0", |v| v > 0.0);
    check_range!(errors, tuning.probes.wall_len, "probes.wall_len", "> 0", |v| v > 0.0);

    errors
}
