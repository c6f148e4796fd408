//! Conditional write of a computed timeout to the store

use crate::error::DeviceError;
use crate::store::TimeoutStore;

/// Result of a handled binding event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// The store was written
    Applied { old: u32, new: u32 },
    /// Nothing was written
    Unchanged,
}

/// Fail fast with [`DeviceError::NotReady`] when the store can't be reached
pub fn ensure_ready<S: TimeoutStore>(store: &S) -> Result<(), DeviceError> {
    if store.is_ready() {
        Ok(())
    } else {
        error!("Automouse timeout store not ready");
        Err(DeviceError::NotReady)
    }
}

/// Write `target` to the store if it differs from `current`.
///
/// At most one write is issued and a failed write is returned as is, without retrying.
pub fn apply<S: TimeoutStore>(store: &mut S, current: u32, target: u32) -> Result<Outcome, DeviceError> {
    if target == current {
        info!("Automouse timeout unchanged: {} ms", current);
        return Ok(Outcome::Unchanged);
    }

    if let Err(e) = store.set_timeout_ms(target) {
        error!("Failed to set automouse timeout: {}", e.errno());
        return Err(e);
    }
    info!("Automouse timeout changed: {} ms -> {} ms", current, target);
    Ok(Outcome::Applied {
        old: current,
        new: target,
    })
}
