//! Loader for controller tuning files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::MovementTuning;

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for TuningLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn parse_ron(file: &str, contents: &str) -> Result<MovementTuning, TuningLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn parse_json(file: &str, contents: &str) -> Result<MovementTuning, TuningLoadError> {
    serde_json::from_str(contents).map_err(|e| TuningLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load tuning from a `.ron` or `.json` file. Fields the file omits keep their defaults.
pub fn load_tuning(path: &Path) -> Result<MovementTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("ron") => parse_ron(&file_name, &contents),
        Some("json") => parse_json(&file_name, &contents),
        other => Err(TuningLoadError {
            file: file_name,
            message: format!("Unsupported tuning format: {:?}", other),
        }),
    }
}
