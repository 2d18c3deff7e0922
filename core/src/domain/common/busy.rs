use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::debug;

use crate::domain::common::entities::app_errors::CoreError;

/// In-flight marker for a user-triggered operation.
///
/// Only one holder may run at a time; a second caller gets [`CoreError::Busy`]
/// instead of queueing behind the first. The flag clears when the returned
/// [`BusyGuard`] is dropped, whatever path the holder leaves by.
#[derive(Debug, Clone)]
pub struct BusyFlag {
    name: &'static str,
    in_flight: Arc<AtomicBool>,
}

impl BusyFlag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn try_acquire(&self) -> Result<BusyGuard, CoreError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| CoreError::Busy(format!("{} is busy", self.name)))?;

        debug!(operation = self.name, "busy flag acquired");

        Ok(BusyGuard {
            name: self.name,
            in_flight: self.in_flight.clone(),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct BusyGuard {
    name: &'static str,
    in_flight: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
        debug!(operation = self.name, "busy flag released");
    }
}
