//! Scene tuning
//!
//! Loaded from a JSON file on native and from LocalStorage in the browser.
//! Every field is optional in the JSON; missing ones take the defaults from
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable scene parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Light ===
    /// Degrees between rays of the fan
    pub ray_step_degrees: f32,

    // === Walls ===
    /// Random interior walls (the border is always added)
    pub wall_count: usize,
    pub wall_step: f32,
    pub wall_phase_max: f32,
    pub wall_speed_min: f32,
    pub wall_speed_max: f32,

    // === Hidden ball ===
    pub target_radius: f32,
    pub target_lerp: f32,
    pub target_arrival_distance: f32,
    pub target_spawn_margin: f32,
    pub visibility_threshold: usize,
    /// Opened when the ball is clicked
    pub reveal_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ray_step_degrees: RAY_STEP_DEGREES,

            wall_count: WALL_COUNT,
            wall_step: WALL_STEP,
            wall_phase_max: WALL_PHASE_MAX,
            wall_speed_min: WALL_SPEED_MIN,
            wall_speed_max: WALL_SPEED_MAX,

            target_radius: TARGET_RADIUS,
            target_lerp: TARGET_LERP,
            target_arrival_distance: TARGET_ARRIVAL_DISTANCE,
            target_spawn_margin: TARGET_SPAWN_MARGIN,
            visibility_threshold: VISIBILITY_THRESHOLD,
            reveal_url: REVEAL_URL.to_string(),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), SettingsError> {
            Err(SettingsError::Invalid { field, reason })
        }

        let numbers = [
            ("ray_step_degrees", self.ray_step_degrees),
            ("wall_step", self.wall_step),
            ("wall_phase_max", self.wall_phase_max),
            ("wall_speed_min", self.wall_speed_min),
            ("wall_speed_max", self.wall_speed_max),
            ("target_radius", self.target_radius),
            ("target_lerp", self.target_lerp),
            ("target_arrival_distance", self.target_arrival_distance),
            ("target_spawn_margin", self.target_spawn_margin),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return invalid(field, "must be a finite number");
            }
        }

        // Each ray is cast every frame; cap the fan size
        if !(self.ray_step_degrees >= MIN_RAY_STEP_DEGREES && self.ray_step_degrees <= 360.0) {
            return invalid("ray_step_degrees", "must be in [0.05, 360]");
        }
        if self.wall_step < 0.0 {
            return invalid("wall_step", "must not be negative");
        }
        if self.wall_phase_max < 0.0 {
            return invalid("wall_phase_max", "must not be negative");
        }
        if self.wall_speed_min > self.wall_speed_max {
            return invalid("wall_speed_min", "must not exceed wall_speed_max");
        }
        if !(self.wall_speed_max - self.wall_speed_min).is_finite() {
            return invalid("wall_speed_max", "range is too wide");
        }
        if self.target_radius <= 0.0 {
            return invalid("target_radius", "must be positive");
        }
        if !(self.target_lerp > 0.0 && self.target_lerp <= 1.0) {
            return invalid("target_lerp", "must be in (0, 1]");
        }
        if self.target_arrival_distance <= 0.0 {
            return invalid("target_arrival_distance", "must be positive");
        }
        if self.target_spawn_margin < 0.0 {
            return invalid("target_spawn_margin", "must not be negative");
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flashlight_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native: settings file named by `FLASHLIGHT_SETTINGS`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os("FLASHLIGHT_SETTINGS") else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Path::new(&path).display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }
}
