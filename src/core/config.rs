use serde::Deserialize;
use std::path::Path;

/// Base-conversion engine used to re-base the digits.
///
/// Both engines produce bit-for-bit identical output; they differ only in
/// speed.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    /// Schoolbook long division over `u32` digits, one output digit per pass.
    #[default]
    LongDivision,
    /// Repeated `div_rem` on a `num_bigint::BigUint`.
    #[serde(rename = "bigint", alias = "big_int")]
    BigInt,
}

/// Default input size limit (100 MiB).
pub const DEFAULT_MAX_SIZE: usize = 104_857_600;

/// Settings for the command-line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Engine used for `enc` and `dec`
    pub engine: Engine,
    /// Maximum input size in bytes (0 = unlimited)
    pub max_size: usize,
    /// Append a newline after encoded text and strip one before decoding
    pub line_ending: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: Engine::default(),
            max_size: DEFAULT_MAX_SIZE,
            line_ending: false,
        }
    }
}

/// One settings file as written on disk. Absent keys leave the current
/// value alone when merged.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    engine: Option<Engine>,
    #[serde(default)]
    max_size: Option<usize>,
    #[serde(default)]
    line_ending: Option<bool>,
}

impl Settings {
    /// Parses settings from TOML content, starting from the defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut settings = Self::default();
        settings.merge_toml(content)?;
        Ok(settings)
    }

    /// Applies the keys present in `content` on top of `self`.
    pub fn merge_toml(&mut self, content: &str) -> Result<(), toml::de::Error> {
        let file: SettingsFile = toml::from_str(content)?;
        if let Some(engine) = file.engine {
            self.engine = engine;
        }
        if let Some(max_size) = file.max_size {
            self.max_size = max_size;
        }
        if let Some(line_ending) = file.line_ending {
            self.line_ending = line_ending;
        }
        Ok(())
    }

    /// Loads settings from a single file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads settings with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults
    /// 2. `~/.config/base985161/config.toml` (user overrides)
    /// 3. `./base985161.toml` (project-local overrides)
    ///
    /// Files that fail to parse are skipped with a warning on stderr unless
    /// `quiet` is set.
    pub fn load_with_overrides(quiet: bool) -> Self {
        let mut settings = Self::default();

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base985161").join("config.toml");
            settings.merge_file_if_present(&user_config_path, "user", quiet);
        }

        settings.merge_file_if_present(Path::new("base985161.toml"), "local", quiet);

        settings
    }

    fn merge_file_if_present(&mut self, path: &Path, label: &str, quiet: bool) {
        if !path.exists() {
            return;
        }
        let result = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                // Merge into a copy so a bad file leaves no partial changes
                let mut merged = self.clone();
                merged.merge_toml(&content).map_err(|e| e.to_string())?;
                Ok(merged)
            });
        match result {
            Ok(merged) => *self = merged,
            Err(e) => {
                if !quiet {
                    eprintln!(
                        "Warning: Failed to load {} config from {:?}: {}",
                        label, path, e
                    );
                }
            }
        }
    }
}
