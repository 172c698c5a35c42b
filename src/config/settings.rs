use crate::errors::{NavError, Result};
use crate::options::{AnimationOptions, AnimationsOptions, Options};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Longest transition the settings accept
pub const MAX_DURATION_MS: u64 = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub navigation: NavigationSettings,
    pub animations: AnimationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Identifier of the root stack controller
    pub stack_id: String,
    /// Whether pushes animate when a step does not say
    pub animate_push: bool,
    /// Whether pops animate when a step does not say
    pub animate_pop: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub enabled: bool,
    pub push_duration_ms: u64,
    pub pop_duration_ms: u64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            stack_id: "root-stack".to_string(),
            animate_push: true,
            animate_pop: true,
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            push_duration_ms: 300,
            pop_duration_ms: 250,
        }
    }
}

impl Settings {
    /// Every key accepted by `get_value` / `set_value`
    pub const KEYS: [&'static str; 6] = [
        "navigation.stack_id",
        "navigation.animate_push",
        "navigation.animate_pop",
        "animations.enabled",
        "animations.push_duration_ms",
        "animations.pop_duration_ms",
    ];

    /// Load settings from a file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| NavError::config(format!("Failed to read config file: {e}")))?;

        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| NavError::config(format!("Failed to parse config file: {e}")))?;

        Ok(settings)
    }

    /// Save settings to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    NavError::config(format!("Failed to create config directory: {e}"))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| NavError::config(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content)
            .map_err(|e| NavError::config(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Update a configuration value by key
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.len() != 2 {
            return Err(NavError::config(format!("Invalid config key format: {key}")));
        }

        match (parts[0], parts[1]) {
            ("navigation", "stack_id") => self.navigation.stack_id = value.to_string(),
            ("navigation", "animate_push") => {
                self.navigation.animate_push = parse_bool(value)?;
            }
            ("navigation", "animate_pop") => {
                self.navigation.animate_pop = parse_bool(value)?;
            }
            ("animations", "enabled") => {
                self.animations.enabled = parse_bool(value)?;
            }
            ("animations", "push_duration_ms") => {
                self.animations.push_duration_ms = parse_millis(value)?;
            }
            ("animations", "pop_duration_ms") => {
                self.animations.pop_duration_ms = parse_millis(value)?;
            }
            _ => return Err(NavError::config(format!("Unknown config key: {key}"))),
        }

        Ok(())
    }

    /// Get a configuration value by key
    pub fn get_value(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.len() != 2 {
            return Err(NavError::config(format!("Invalid config key format: {key}")));
        }

        let value = match (parts[0], parts[1]) {
            ("navigation", "stack_id") => self.navigation.stack_id.clone(),
            ("navigation", "animate_push") => self.navigation.animate_push.to_string(),
            ("navigation", "animate_pop") => self.navigation.animate_pop.to_string(),
            ("animations", "enabled") => self.animations.enabled.to_string(),
            ("animations", "push_duration_ms") => self.animations.push_duration_ms.to_string(),
            ("animations", "pop_duration_ms") => self.animations.pop_duration_ms.to_string(),
            _ => return Err(NavError::config(format!("Unknown config key: {key}"))),
        };

        Ok(value)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.navigation.stack_id.trim().is_empty() {
            return Err(NavError::config("Stack id must not be empty"));
        }

        for (name, duration) in [
            ("push", self.animations.push_duration_ms),
            ("pop", self.animations.pop_duration_ms),
        ] {
            if duration > MAX_DURATION_MS {
                return Err(NavError::config(format!(
                    "{name} duration {duration}ms exceeds {MAX_DURATION_MS}ms"
                )));
            }
        }

        Ok(())
    }

    /// Options the root stack starts with
    pub fn initial_options(&self) -> Options {
        let enabled = Some(self.animations.enabled);
        Options {
            animations: AnimationsOptions {
                push: AnimationOptions {
                    enabled,
                    duration_ms: Some(self.animations.push_duration_ms),
                },
                pop: AnimationOptions {
                    enabled,
                    duration_ms: Some(self.animations.pop_duration_ms),
                },
            },
            ..Options::default()
        }
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    value
        .parse()
        .map_err(|_| NavError::config(format!("Invalid boolean value: {value}")))
}

fn parse_millis(value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| NavError::config(format!("Invalid number: {value}")))
}
