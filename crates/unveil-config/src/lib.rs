//! Unveil configuration system
//!
//! This crate provides centralized configuration management for Unveil,
//! loading settings from `unveil.toml` as an alternative to environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Unveil
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UnveilConfig {
    /// Reveal animation settings
    pub motion: MotionConfig,
    /// Transient feedback settings
    pub feedback: FeedbackConfig,
    /// Scripted tour settings
    pub tour: TourConfig,
}

/// Reveal animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Duration for section heading reveals in milliseconds
    pub heading_duration_ms: f32,
    /// Duration for card and column reveals in milliseconds
    pub card_duration_ms: f32,
    /// Per-element stagger increment in milliseconds
    pub stagger_increment_ms: f32,
    /// Delay for bottom call-to-action blocks in milliseconds
    pub cta_delay_ms: f32,
    /// Fraction of a section that must be visible before it triggers
    pub threshold: f32,
    /// Reveal once and never re-hide (the page default)
    pub once: bool,
}

/// Transient feedback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Window before a copy confirmation auto-reverts, in milliseconds
    pub reset_delay_ms: f32,
}

/// Scripted tour configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Tick interval for the simulation loop in milliseconds
    pub tick_ms: f32,
    /// Scroll speed in pixels per tick
    pub scroll_step: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            heading_duration_ms: 800.0,
            card_duration_ms: 600.0,
            stagger_increment_ms: 100.0,
            cta_delay_ms: 300.0,
            threshold: 0.1,
            once: true,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: 2000.0,
        }
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16.0,
            scroll_step: 24.0,
        }
    }
}

impl UnveilConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the unveil.toml configuration file
    ///
    /// # Returns
    /// * `Ok(UnveilConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (unveil.toml in the
    /// current directory) or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("unveil.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        // Motion settings
        if let Ok(val) = std::env::var("UNVEIL_HEADING_DURATION_MS") {
            if let Ok(duration) = val.parse::<f32>() {
                self.motion.heading_duration_ms = duration;
            }
        }
        if let Ok(val) = std::env::var("UNVEIL_CARD_DURATION_MS") {
            if let Ok(duration) = val.parse::<f32>() {
                self.motion.card_duration_ms = duration;
            }
        }
        if let Ok(val) = std::env::var("UNVEIL_STAGGER_MS") {
            if let Ok(increment) = val.parse::<f32>() {
                self.motion.stagger_increment_ms = increment;
            }
        }
        if let Ok(val) = std::env::var("UNVEIL_THRESHOLD") {
            if let Ok(threshold) = val.parse::<f32>() {
                self.motion.threshold = threshold;
            }
        }
        if let Ok(val) = std::env::var("UNVEIL_ONCE") {
            self.motion.once = val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Feedback settings
        if let Ok(val) = std::env::var("UNVEIL_RESET_DELAY_MS") {
            if let Ok(delay) = val.parse::<f32>() {
                self.feedback.reset_delay_ms = delay;
            }
        }

        // Tour settings
        if let Ok(val) = std::env::var("UNVEIL_TICK_MS") {
            if let Ok(tick) = val.parse::<f32>() {
                self.tour.tick_ms = tick;
            }
        }
        if let Ok(val) = std::env::var("UNVEIL_SCROLL_STEP") {
            if let Ok(step) = val.parse::<f32>() {
                self.tour.scroll_step = step;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from unveil.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
