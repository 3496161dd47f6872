//! Engine configuration with environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::page::Background;

pub const DEFAULT_PAGE_WIDTH: f64 = 800.0;
pub const DEFAULT_PAGE_HEIGHT: f64 = 600.0;
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const DEFAULT_STROKE_COLOR: &str = "#000000";
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    NotANumber { var: String, value: String },
    #[error("{var} must be positive, got {value}")]
    NotPositive { var: String, value: String },
    #[error("{var} must not be empty")]
    Empty { var: String },
}

/// Tunables for new pages and freehand strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Width of pages created by the engine.
    pub page_width: f64,
    /// Height of pages created by the engine.
    pub page_height: f64,
    /// Solid background of pages created by the engine.
    pub background_color: String,
    /// Stroke color for pointer-driven freehand capture.
    pub stroke_color: String,
    /// Stroke width for pointer-driven freehand capture.
    pub stroke_width: f64,
    /// Drop positions snap to this grid; 0 disables snapping.
    pub grid_size: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            background_color: DEFAULT_BACKGROUND_COLOR.to_owned(),
            stroke_color: DEFAULT_STROKE_COLOR.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            grid_size: 0.0,
        }
    }
}

impl EngineConfig {
    /// Build config from environment variables, falling back to defaults for
    /// anything unset.
    ///
    /// - `PHOTOBOOK_PAGE_WIDTH`, `PHOTOBOOK_PAGE_HEIGHT`: positive numbers
    /// - `PHOTOBOOK_BACKGROUND`: CSS color
    /// - `PHOTOBOOK_STROKE_COLOR`: CSS color
    /// - `PHOTOBOOK_STROKE_WIDTH`: positive number
    /// - `PHOTOBOOK_GRID_SIZE`: non-negative number, 0 disables snapping
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a variable that is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Same as [`EngineConfig::from_env`] with an injectable variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a variable that is set but unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            page_width: positive(&lookup, "PHOTOBOOK_PAGE_WIDTH", defaults.page_width)?,
            page_height: positive(&lookup, "PHOTOBOOK_PAGE_HEIGHT", defaults.page_height)?,
            background_color: non_empty(&lookup, "PHOTOBOOK_BACKGROUND", defaults.background_color)?,
            stroke_color: non_empty(&lookup, "PHOTOBOOK_STROKE_COLOR", defaults.stroke_color)?,
            stroke_width: positive(&lookup, "PHOTOBOOK_STROKE_WIDTH", defaults.stroke_width)?,
            grid_size: non_negative(&lookup, "PHOTOBOOK_GRID_SIZE", defaults.grid_size)?,
        })
    }

    /// Background given to pages the engine creates.
    #[must_use]
    pub fn page_background(&self) -> Background {
        Background::color(self.background_color.clone())
    }
}

fn number<F>(lookup: &F, var: &str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(ConfigError::NotANumber { var: var.to_owned(), value: raw }),
    }
}

fn positive<F>(lookup: &F, var: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match number(lookup, var)? {
        None => Ok(default),
        Some(v) if v > 0.0 => Ok(v),
        Some(v) => Err(ConfigError::NotPositive { var: var.to_owned(), value: v.to_string() }),
    }
}

fn non_negative<F>(lookup: &F, var: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match number(lookup, var)? {
        None => Ok(default),
        Some(v) if v >= 0.0 => Ok(v),
        Some(v) => Err(ConfigError::NotPositive { var: var.to_owned(), value: v.to_string() }),
    }
}

fn non_empty<F>(lookup: &F, var: &str, default: String) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(v) if v.trim().is_empty() => Err(ConfigError::Empty { var: var.to_owned() }),
        Some(v) => Ok(v.trim().to_owned()),
    }
}
