#![allow(dead_code)]

use automouse_timeout::{DeviceError, TimeoutStore};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Mock of the pointing sensor's timeout storage which records every write
#[derive(Debug, Clone)]
pub struct MockSensor {
    pub ready: bool,
    pub timeout_ms: u32,
    pub fail_code: Option<i32>,
    pub writes: Vec<u32>,
}

impl MockSensor {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            ready: true,
            timeout_ms,
            fail_code: None,
            writes: Vec::new(),
        }
    }

    pub fn not_ready(timeout_ms: u32) -> Self {
        Self {
            ready: false,
            ..Self::new(timeout_ms)
        }
    }
}

impl TimeoutStore for MockSensor {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn get_timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    fn set_timeout_ms(&mut self, timeout_ms: u32) -> Result<(), DeviceError> {
        self.writes.push(timeout_ms);
        match self.fail_code {
            Some(code) => Err(DeviceError::WriteFailed(code)),
            None => {
                self.timeout_ms = timeout_ms;
                Ok(())
            }
        }
    }
}
