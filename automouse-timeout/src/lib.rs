//! Runtime adjustment of a pointing sensor's automouse timeout from key bindings.
//!
//! A binding carries one integer command code. [`AutomouseTimeoutBehavior`] decodes it into a
//! [`Command`], computes the new timeout within the configured bounds, and writes it to the
//! injected [`TimeoutStore`] only when it differs from the current value.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod behavior;
pub mod command;
pub mod config;
pub mod error;
pub mod gate;
pub mod store;

pub use behavior::{AutomouseTimeoutBehavior, Behavior, BindingEvent, PresetTimeoutBehavior};
pub use command::{Command, interpret};
pub use config::{AutomouseTimeoutConfig, ConfigError, PresetTimeoutConfig};
pub use error::DeviceError;
pub use gate::Outcome;
pub use store::{SharedTimeoutStore, TimeoutStore};
