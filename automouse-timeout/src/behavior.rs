//! Key binding behaviors that drive the automouse timeout
//!
//! The binding framework delivers a press with the binding's integer parameter, and a release.
//! Releases never touch the store.

use crate::command::Command;
use crate::config::{AutomouseTimeoutConfig, PresetTimeoutConfig};
use crate::error::DeviceError;
use crate::gate::{self, Outcome};
use crate::store::TimeoutStore;

/// Event delivered to a [`Behavior`] by the binding framework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BindingEvent {
    /// Binding pressed, carrying the binding's command code
    Pressed(i32),
    /// Binding released
    Released,
}

/// The trait for behaviors bound to a key.
///
/// Every event runs to completion before the next one is delivered.
pub trait Behavior {
    /// Handle a press carrying `code`
    fn on_press(&mut self, code: i32) -> Result<Outcome, DeviceError>;

    /// Handle a release, which is a no-op by default
    fn on_release(&mut self) -> Outcome {
        Outcome::Unchanged
    }

    /// Handle an event and acknowledge it.
    ///
    /// The framework doesn't distinguish an applied change from an unchanged value, so both are
    /// reported as `Ok(())`.
    fn handle(&mut self, event: BindingEvent) -> Result<(), DeviceError> {
        match event {
            BindingEvent::Pressed(code) => self.on_press(code).map(|_| ()),
            BindingEvent::Released => {
                self.on_release();
                Ok(())
            }
        }
    }
}

/// Behavior that adjusts the timeout within configured bounds.
///
/// The binding parameter selects the command, see [`Command`].
pub struct AutomouseTimeoutBehavior<S: TimeoutStore> {
    config: AutomouseTimeoutConfig,
    store: S,
}

impl<S: TimeoutStore> AutomouseTimeoutBehavior<S> {
    pub fn new(config: AutomouseTimeoutConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &AutomouseTimeoutConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: TimeoutStore> Behavior for AutomouseTimeoutBehavior<S> {
    fn on_press(&mut self, code: i32) -> Result<Outcome, DeviceError> {
        gate::ensure_ready(&self.store)?;

        let command = Command::from_code(code);
        let current = self.store.get_timeout_ms();
        let target = command.target(&self.config, current);
        debug!("Automouse timeout command {:?}: {} ms -> {} ms", command, current, target);

        gate::apply(&mut self.store, current, target)
    }
}

/// Behavior that writes one fixed timeout on every press.
///
/// The binding parameter is ignored, and the value is written as configured, without bounds or
/// comparison with the current value.
pub struct PresetTimeoutBehavior<S: TimeoutStore> {
    config: PresetTimeoutConfig,
    store: S,
}

impl<S: TimeoutStore> PresetTimeoutBehavior<S> {
    pub fn new(config: PresetTimeoutConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &PresetTimeoutConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: TimeoutStore> Behavior for PresetTimeoutBehavior<S> {
    fn on_press(&mut self, _code: i32) -> Result<Outcome, DeviceError> {
        gate::ensure_ready(&self.store)?;

        let old = self.store.get_timeout_ms();
        let new = self.config.timeout_ms;
        if let Err(e) = self.store.set_timeout_ms(new) {
            error!("Failed to set automouse timeout: {}", e.errno());
            return Err(e);
        }
        info!("Automouse timeout set to {} ms", new);
        Ok(Outcome::Applied { old, new })
    }
}
