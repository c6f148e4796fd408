//! Errors reported by a [`TimeoutStore`](crate::store::TimeoutStore) and surfaced by behaviors

/// errno value used by the host framework when a device can't be found or isn't ready
pub const ENODEV: i32 = 19;

/// Failure of a single dispatch.
///
/// Nothing is retried: a press either completes its single write or fails as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// The timeout store is not reachable, neither read nor write was attempted
    NotReady,
    /// The store rejected or failed the write, carrying the lower layer's code
    WriteFailed(i32),
}

impl DeviceError {
    /// Negative errno-style code, as returned to the binding framework
    pub fn errno(&self) -> i32 {
        match self {
            DeviceError::NotReady => -ENODEV,
            DeviceError::WriteFailed(code) => *code,
        }
    }
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeviceError::NotReady => write!(f, "timeout store not ready"),
            DeviceError::WriteFailed(code) => write!(f, "timeout write failed: {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_mapping() {
        assert_eq!(DeviceError::NotReady.errno(), -19);
        assert_eq!(DeviceError::WriteFailed(-5).errno(), -5);
    }

    #[test]
    fn test_display() {
        assert_eq!(std::format!("{}", DeviceError::NotReady), "timeout store not ready");
        assert_eq!(
            std::format!("{}", DeviceError::WriteFailed(-22)),
            "timeout write failed: -22"
        );
    }
}
