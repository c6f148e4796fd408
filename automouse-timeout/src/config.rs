//! Static configuration of the automouse timeout behaviors

use embassy_time::Duration;

// DEFAULT_AUTOMOUSE_TIMEOUT_MS, generated by build.rs from `AUTOMOUSE_TIMEOUT_MS`
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

/// Default lower bound of the timeout, in milliseconds
pub const MIN_TIMEOUT_MS: u32 = 100;
/// Default upper bound of the timeout, in milliseconds
pub const MAX_TIMEOUT_MS: u32 = 5000;
/// Default step used by step up/down commands, in milliseconds
pub const STEP_MS: u32 = 100;
/// Timeout restored by the reset command unless configured otherwise
pub const DEFAULT_TIMEOUT_MS: u32 = DEFAULT_AUTOMOUSE_TIMEOUT_MS;

/// Bounds and granularity for [`AutomouseTimeoutBehavior`](crate::behavior::AutomouseTimeoutBehavior).
///
/// Set once at construction and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AutomouseTimeoutConfig {
    /// Lower bound, inclusive
    pub min_timeout_ms: u32,
    /// Upper bound, inclusive
    pub max_timeout_ms: u32,
    /// Increment/decrement granularity, at least 1
    pub step_ms: u32,
    /// Value restored by the reset command, within `[min_timeout_ms, max_timeout_ms]`
    pub default_timeout_ms: u32,
}

impl Default for AutomouseTimeoutConfig {
    fn default() -> Self {
        Self {
            min_timeout_ms: MIN_TIMEOUT_MS,
            max_timeout_ms: MAX_TIMEOUT_MS,
            step_ms: STEP_MS,
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Invalid [`AutomouseTimeoutConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `max_timeout_ms` is smaller than `min_timeout_ms`
    InvertedBounds,
    /// `step_ms` is zero
    ZeroStep,
    /// `default_timeout_ms` is outside `[min_timeout_ms, max_timeout_ms]`
    DefaultOutOfBounds,
}

impl AutomouseTimeoutConfig {
    /// Create a validated config
    pub fn new(
        min_timeout_ms: u32,
        max_timeout_ms: u32,
        step_ms: u32,
        default_timeout_ms: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            min_timeout_ms,
            max_timeout_ms,
            step_ms,
            default_timeout_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants of a config built by hand.
    ///
    /// Interpretation stays total on an invalid config, but its results are only
    /// meaningful when this returns `Ok`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_timeout_ms < self.min_timeout_ms {
            return Err(ConfigError::InvertedBounds);
        }
        if self.step_ms == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if !(self.min_timeout_ms..=self.max_timeout_ms).contains(&self.default_timeout_ms) {
            return Err(ConfigError::DefaultOutOfBounds);
        }
        Ok(())
    }

    /// Snap `value` into `[min_timeout_ms, max_timeout_ms]`.
    ///
    /// The lower bound is applied first, so an inverted config yields `max_timeout_ms` instead of panicking.
    pub fn clamp(&self, value: u32) -> u32 {
        let mut value = value;
        if value < self.min_timeout_ms {
            value = self.min_timeout_ms;
        }
        if value > self.max_timeout_ms {
            value = self.max_timeout_ms;
        }
        value
    }
}

/// Config of [`PresetTimeoutBehavior`](crate::behavior::PresetTimeoutBehavior)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresetTimeoutConfig {
    /// Timeout written on every press
    pub timeout_ms: u32,
}

impl PresetTimeoutConfig {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms as u64)
    }
}
