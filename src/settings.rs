//! Game settings and preferences
//!
//! Loaded from a JSON file; a missing or unreadable file falls back to
//! defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "GHOST_BUSTERS_SETTINGS";
/// Settings file looked up in the working directory otherwise
pub const DEFAULT_SETTINGS_FILE: &str = "ghost_busters.json";

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 96,
            QualityPreset::Medium => 384,
            QualityPreset::High => 1024,
        }
    }

    /// Whether to run the parallax starfield
    pub fn starfield_enabled(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }
}

/// Why a settings file could not be used
#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {}", path.display(), source),
            Self::Parse { path, source } => write!(f, "invalid settings in {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Screen shake on kills and breaches
    pub screen_shake: bool,
    /// Explosion particles
    pub particles: bool,
    /// Parallax starfield
    pub starfield: bool,

    // === Accessibility ===
    /// Reduced motion (no shake)
    pub reduced_motion: bool,

    // === Simulation ===
    /// Fixed RNG seed; wall clock when absent
    pub seed: Option<u64>,
    /// Longest frame the driver will simulate in one step (0 = unclamped)
    pub max_frame_dt: f32,

    // === Headless demo ===
    /// How long the demo runs (seconds of simulated time)
    pub demo_seconds: f32,
    /// Frame pacing for the demo loop
    pub demo_frame_dt: f32,
    /// Autopilot restarts after game over instead of ending the demo
    pub demo_auto_restart: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            screen_shake: true,
            particles: true,
            starfield: true,

            reduced_motion: false,

            seed: None,
            max_frame_dt: 0.1,

            demo_seconds: 30.0,
            demo_frame_dt: 1.0 / 60.0,
            demo_auto_restart: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    pub fn effective_starfield(&self) -> bool {
        self.starfield && self.quality.starfield_enabled()
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Clamp a measured frame delta per `max_frame_dt`
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        let dt = dt.max(0.0);
        if self.max_frame_dt > 0.0 {
            dt.min(self.max_frame_dt)
        } else {
            dt
        }
    }

    pub fn from_json(path: &Path, json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read settings from `path`
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Where settings are looked up: `$GHOST_BUSTERS_SETTINGS` or the default file
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load from the default location, falling back to defaults
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(Path::new("test.json"), r#"{ "quality": "high", "seed": 7 }"#)
                .unwrap();
        assert_eq!(settings.quality, QualityPreset::High);
        assert_eq!(settings.seed, Some(7));
        assert!(settings.particles);
        assert_eq!(settings.max_frame_dt, 0.1);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json(Path::new("bad.json"), "{ quality: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load(Path::new("/nonexistent/ghost_busters.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_reduced_motion_disables_shake() {
        let mut settings = Settings::default();
        assert!(settings.effective_screen_shake());
        settings.reduced_motion = true;
        assert!(!settings.effective_screen_shake());
    }

    #[test]
    fn test_low_preset() {
        let settings =
            Settings::from_json(Path::new("low.json"), r#"{ "quality": "low" }"#).unwrap();
        assert!(settings.starfield);
        assert!(!settings.effective_starfield());
        assert_eq!(settings.max_particles(), 96);
    }

    #[test]
    fn test_clamp_dt() {
        let mut settings = Settings::default();
        assert_eq!(settings.clamp_dt(0.5), 0.1);
        assert_eq!(settings.clamp_dt(-1.0), 0.0);
        settings.max_frame_dt = 0.0;
        assert_eq!(settings.clamp_dt(0.5), 0.5);
    }
}
