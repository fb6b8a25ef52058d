use std::path::Path;

use crate::analysis::Simulation;
use crate::error::LeslieError;

/// Serialize a simulation (matrix, growth analysis, history) to JSON.
pub fn to_json(simulation: &Simulation, pretty: bool) -> Result<String, LeslieError> {
    let content = if pretty {
        serde_json::to_string_pretty(simulation)?
    } else {
        serde_json::to_string(simulation)?
    };
    Ok(content)
}

/// Write a simulation to a JSON file, creating the parent directory if needed.
pub fn write_json(
    simulation: &Simulation,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), LeslieError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_json(simulation, pretty)?)?;
    Ok(())
}
