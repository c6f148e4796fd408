//! The collaborator that owns the automouse timeout

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::Duration;

use crate::error::DeviceError;

/// Storage of the automouse timeout, normally the pointing sensor's driver.
///
/// The value may be changed behind the behavior's back, so callers read it fresh before every
/// computation. Any locking around a get/set pair is the implementor's job.
pub trait TimeoutStore {
    /// Whether the device can be read or written
    fn is_ready(&self) -> bool;

    /// Current timeout in milliseconds
    fn get_timeout_ms(&self) -> u32;

    /// Set a new timeout in milliseconds
    fn set_timeout_ms(&mut self, timeout_ms: u32) -> Result<(), DeviceError>;
}

impl<T: TimeoutStore + ?Sized> TimeoutStore for &mut T {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn get_timeout_ms(&self) -> u32 {
        (**self).get_timeout_ms()
    }

    fn set_timeout_ms(&mut self, timeout_ms: u32) -> Result<(), DeviceError> {
        (**self).set_timeout_ms(timeout_ms)
    }
}

#[derive(Debug, Clone, Copy)]
struct StoreState {
    ready: bool,
    timeout_ms: u32,
}

/// A [`TimeoutStore`] that can live in a `static` and be shared between the sensor driver and
/// the behaviors.
///
/// It starts not ready, the driver calls [`SharedTimeoutStore::mark_ready`] once the sensor is initialized.
///
/// ```rust,ignore
/// static AUTOMOUSE_TIMEOUT: SharedTimeoutStore<CriticalSectionRawMutex> = SharedTimeoutStore::new(600);
///
/// let mut behavior = AutomouseTimeoutBehavior::new(AutomouseTimeoutConfig::default(), &AUTOMOUSE_TIMEOUT);
/// ```
pub struct SharedTimeoutStore<M: RawMutex> {
    state: Mutex<M, Cell<StoreState>>,
}

impl<M: RawMutex> SharedTimeoutStore<M> {
    pub const fn new(timeout_ms: u32) -> Self {
        Self {
            state: Mutex::new(Cell::new(StoreState {
                ready: false,
                timeout_ms,
            })),
        }
    }

    pub fn mark_ready(&self) {
        self.update(|s| s.ready = true);
    }

    pub fn mark_not_ready(&self) {
        self.update(|s| s.ready = false);
    }

    /// Current timeout as a [`Duration`], for the driver's idle timer
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.load().timeout_ms as u64)
    }

    /// Overwrite the timeout regardless of readiness, e.g. when the driver re-arms it
    pub fn store_timeout_ms(&self, timeout_ms: u32) {
        self.update(|s| s.timeout_ms = timeout_ms);
    }

    fn load(&self) -> StoreState {
        self.state.lock(|s| s.get())
    }

    fn update(&self, f: impl FnOnce(&mut StoreState)) {
        self.state.lock(|s| {
            let mut state = s.get();
            f(&mut state);
            s.set(state);
        });
    }
}

impl<M: RawMutex> TimeoutStore for &SharedTimeoutStore<M> {
    fn is_ready(&self) -> bool {
        self.load().ready
    }

    fn get_timeout_ms(&self) -> u32 {
        self.load().timeout_ms
    }

    fn set_timeout_ms(&mut self, timeout_ms: u32) -> Result<(), DeviceError> {
        self.state.lock(|s| {
            let mut state = s.get();
            if !state.ready {
                return Err(DeviceError::NotReady);
            }
            state.timeout_ms = timeout_ms;
            s.set(state);
            Ok(())
        })
    }
}
