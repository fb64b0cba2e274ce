use base985161::Settings;
use std::fs;
use std::path::PathBuf;

use super::global::GlobalArgs;

/// Expands `~` in a user-supplied config path and checks that it exists.
fn resolve_config_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let expanded = shellexpand::tilde(path);
    let canonical = fs::canonicalize(expanded.as_ref())
        .map_err(|e| format!("Cannot access config file '{}': {}", path, e))?;
    Ok(canonical)
}

/// Builds the effective settings: config file(s) first, then CLI flags.
pub fn load_settings(global: &GlobalArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = match &global.config {
        Some(path) => {
            let path = resolve_config_path(path)?;
            Settings::load_from_file(&path)
                .map_err(|e| format!("Invalid config file {:?}: {}", path, e))?
        }
        None => Settings::load_with_overrides(global.quiet),
    };

    if let Some(engine) = global.engine {
        settings.engine = engine.into();
    }
    if let Some(max_size) = global.max_size {
        settings.max_size = max_size;
    }
    if global.line_ending {
        settings.line_ending = true;
    }

    Ok(settings)
}
