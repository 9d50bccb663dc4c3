use std::{
    any::Any,
    time::{SystemTime, UNIX_EPOCH},
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("System clock is set {0}s before the Unix epoch")]
    BeforeEpoch(u64),
    #[error("System time does not fit in a 64-bit timestamp")]
    OutOfRange,
}

/// Source of the current time, in seconds since the Unix epoch.
pub trait Clock: std::fmt::Debug + Send + Sync {
    fn now(&self) -> Result<i64, ClockError>;

    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Result<i64, ClockError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ClockError::BeforeEpoch(e.duration().as_secs()))?;

        i64::try_from(elapsed.as_secs()).map_err(|_| ClockError::OutOfRange)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
