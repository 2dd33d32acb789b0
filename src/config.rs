/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.

use serde::Deserialize;
use std::path::PathBuf;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Fixed tick interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Number of blinking stars in the field.
    pub particles: u32,
    /// RNG seed for the star population. 0 = seed from the clock.
    pub seed: u32,
    /// Start cell for the sprite and projectile. (0, 0) = grid center.
    pub start_row: u32,
    pub start_col: u32,
    /// Projectile velocity per tick.
    pub shot_row_speed: f64,
    pub shot_col_speed: f64,
    /// Directory with rocket frame files; embedded frames if absent.
    pub frames_dir: PathBuf,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    scene: TomlScene,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
}

#[derive(Deserialize, Debug)]
struct TomlScene {
    #[serde(default = "default_particles")]
    particles: u32,
    #[serde(default)]
    seed: u32,
    #[serde(default)]
    start_row: u32,
    #[serde(default)]
    start_col: u32,
    #[serde(default = "default_shot_row_speed")]
    shot_row_speed: f64,
    #[serde(default)]
    shot_col_speed: f64,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_frames_dir")]
    frames_dir: String,
}

// ── Defaults ──

fn default_tick_rate() -> u64 { 100 }
fn default_particles() -> u32 { 100 }
fn default_shot_row_speed() -> f64 { -0.3 }
fn default_frames_dir() -> String { "frames".into() }

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming { tick_rate_ms: default_tick_rate() }
    }
}

impl Default for TomlScene {
    fn default() -> Self {
        TomlScene {
            particles: default_particles(),
            seed: 0,
            start_row: 0,
            start_col: 0,
            shot_row_speed: default_shot_row_speed(),
            shot_col_speed: 0.0,
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral { frames_dir: default_frames_dir() }
    }
}

// ── Loading ──

impl AppConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let search_dirs = candidate_dirs();
        let toml_cfg = load_toml(&search_dirs);
        AppConfig::from_toml(toml_cfg, &search_dirs)
    }

    fn from_toml(toml_cfg: TomlConfig, search_dirs: &[PathBuf]) -> Self {
        // Resolve the frames directory against the search dirs
        let frames_dir_str = &toml_cfg.general.frames_dir;
        let frames_dir = if PathBuf::from(frames_dir_str).is_absolute() {
            PathBuf::from(frames_dir_str)
        } else {
            search_dirs.iter()
                .map(|d| d.join(frames_dir_str))
                .find(|p| p.is_dir())
                .unwrap_or_else(|| PathBuf::from(frames_dir_str))
        };

        AppConfig {
            tick_rate_ms: toml_cfg.timing.tick_rate_ms,
            particles: toml_cfg.scene.particles,
            seed: toml_cfg.scene.seed,
            start_row: toml_cfg.scene.start_row,
            start_col: toml_cfg.scene.start_col,
            shot_row_speed: toml_cfg.scene.shot_row_speed,
            shot_col_speed: toml_cfg.scene.shot_col_speed,
            frames_dir,
        }
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn from_str(text: &str) -> AppConfig {
        let toml_cfg: TomlConfig = toml::from_str(text).unwrap();
        AppConfig::from_toml(toml_cfg, &[PathBuf::from(".")])
    }

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = from_str("");
        assert_eq!(cfg.tick_rate_ms, 100);
        assert_eq!(cfg.particles, 100);
        assert_eq!(cfg.seed, 0);
        assert_eq!((cfg.start_row, cfg.start_col), (0, 0));
        assert_eq!(cfg.shot_row_speed, -0.3);
        assert_eq!(cfg.shot_col_speed, 0.0);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let cfg = from_str("[scene]\nparticles = 25\n");
        assert_eq!(cfg.particles, 25);
        assert_eq!(cfg.tick_rate_ms, 100);
        assert_eq!(cfg.shot_row_speed, -0.3);
    }

    #[test]
    fn all_keys_are_honored() {
        let cfg = from_str(
            "[timing]\ntick_rate_ms = 50\n\
             [scene]\nparticles = 10\nseed = 7\nstart_row = 4\nstart_col = 6\n\
             shot_row_speed = -1.0\nshot_col_speed = 0.5\n",
        );
        assert_eq!(cfg.tick_rate_ms, 50);
        assert_eq!(cfg.particles, 10);
        assert_eq!(cfg.seed, 7);
        assert_eq!((cfg.start_row, cfg.start_col), (4, 6));
        assert_eq!(cfg.shot_row_speed, -1.0);
        assert_eq!(cfg.shot_col_speed, 0.5);
    }
}
