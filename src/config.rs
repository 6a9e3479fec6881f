//! Explorer settings: window size, home view and iteration budgets.
//!
//! Defaults reproduce the classic 1600×900 view of the whole set. A JSON file named by
//! the `EXPLORER_CONFIG` environment variable overrides any subset of the fields.

use crate::core::data::complex_bounds::{ComplexBounds, ComplexBoundsError};
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::viewport::{Viewport, ViewportError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::path::Path;

pub const CONFIG_ENV_VAR: &str = "EXPLORER_CONFIG";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Viewport(ViewportError),
    HomeBounds(ComplexBoundsError),
    ZeroIterations,
    ZoomDivisorTooSmall { divisor: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read config: {}", err),
            Self::Parse(err) => write!(f, "could not parse config: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::HomeBounds(err) => write!(f, "invalid home bounds: {}", err),
            Self::ZeroIterations => write!(f, "iteration budgets must be greater than zero"),
            Self::ZoomDivisorTooSmall { divisor } => {
                write!(f, "zoom divisor must be at least 2, got {}", divisor)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::HomeBounds(err) => Some(err),
            Self::ZeroIterations | Self::ZoomDivisorTooSmall { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub fps_limit: u32,
    /// Real-axis extent of the home view. The imaginary extent follows from the
    /// viewport's aspect ratio, centred on zero.
    pub home_xmin: f64,
    pub home_xmax: f64,
    pub initial_max_iterations: u32,
    pub reset_max_iterations: u32,
    /// The zoom region is `1/zoom_divisor` of the viewport on each axis.
    pub zoom_divisor: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            fps_limit: 30,
            home_xmin: -2.4,
            home_xmax: 1.0,
            initial_max_iterations: 64,
            reset_max_iterations: 128,
            zoom_divisor: 8,
        }
    }
}

impl ExplorerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;

        Ok(config)
    }

    /// Loads the file named by `EXPLORER_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport()?;
        self.home_bounds()?;

        if self.initial_max_iterations == 0 || self.reset_max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }

        if self.zoom_divisor < 2 {
            return Err(ConfigError::ZoomDivisorTooSmall {
                divisor: self.zoom_divisor,
            });
        }

        Ok(())
    }

    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        Viewport::new(self.width, self.height).map_err(ConfigError::Viewport)
    }

    pub fn home_bounds(&self) -> Result<ComplexBounds, ConfigError> {
        ComplexBounds::centred_with_aspect(self.home_xmin, self.home_xmax, self.width, self.height)
            .map_err(ConfigError::HomeBounds)
    }

    #[must_use]
    pub fn initial_budget(&self) -> IterationBudget {
        IterationBudget::new(self.initial_max_iterations)
    }

    #[must_use]
    pub fn reset_budget(&self) -> IterationBudget {
        IterationBudget::new(self.reset_max_iterations)
    }
}
