//! Decoding of binding command codes and computation of the target timeout

use crate::config::AutomouseTimeoutConfig;

/// Code that lowers the timeout by one step
pub const CODE_STEP_DOWN: i32 = -1;
/// Code that raises the timeout by one step
pub const CODE_STEP_UP: i32 = -2;
/// Code that restores the configured default
pub const CODE_RESET: i32 = -3;
/// Code that leaves the timeout as it is
pub const CODE_QUERY: i32 = 0;

/// Command carried by a binding.
///
/// The binding parameter is a single signed integer: positive values set the timeout in
/// milliseconds, `-1`/`-2` step down/up, `-3` resets, anything else is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Set the timeout to the given value in milliseconds
    SetAbsolute(u32),
    /// Lower the timeout by `step_ms`, stopping at `min_timeout_ms`
    StepDown,
    /// Raise the timeout by `step_ms`, stopping at `max_timeout_ms`
    StepUp,
    /// Restore `default_timeout_ms`
    ResetToDefault,
    /// Keep the current timeout
    NoOp,
}

impl Command {
    pub fn from_code(code: i32) -> Self {
        match code {
            c if c > 0 => Command::SetAbsolute(c as u32),
            CODE_STEP_DOWN => Command::StepDown,
            CODE_STEP_UP => Command::StepUp,
            CODE_RESET => Command::ResetToDefault,
            _ => Command::NoOp,
        }
    }

    /// Compute the new timeout from `current`.
    ///
    /// The result is always within `[config.min_timeout_ms, config.max_timeout_ms]`.
    pub fn target(&self, config: &AutomouseTimeoutConfig, current: u32) -> u32 {
        let target = match *self {
            Command::SetAbsolute(value) => value,
            Command::StepDown => match current.checked_sub(config.step_ms) {
                Some(lowered) if current > config.step_ms && lowered >= config.min_timeout_ms => lowered,
                _ => config.min_timeout_ms,
            },
            Command::StepUp => match current.checked_add(config.step_ms) {
                Some(raised) if raised <= config.max_timeout_ms => raised,
                _ => config.max_timeout_ms,
            },
            Command::ResetToDefault => config.default_timeout_ms,
            Command::NoOp => current,
        };

        config.clamp(target)
    }
}

impl From<i32> for Command {
    fn from(code: i32) -> Self {
        Command::from_code(code)
    }
}

/// Decode `code` and compute the new timeout from `current`, see [`Command::target`]
pub fn interpret(config: &AutomouseTimeoutConfig, current: u32, code: i32) -> u32 {
    Command::from_code(code).target(config, current)
}
