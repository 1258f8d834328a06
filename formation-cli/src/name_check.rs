//! Simulated company-name availability check.
//!
//! There is no registry behind this: after a fixed delay the name is
//! reported available with a configurable probability.

use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_AVAILABILITY: f64 = 0.7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameCheckError {
    #[error("company name is empty")]
    EmptyName,

    #[error("a name check is already in progress")]
    AlreadyPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameAvailability {
    Available,
    Taken,
}

impl NameAvailability {
    pub fn message(&self) -> &'static str {
        match self {
            NameAvailability::Available => "恭喜！该公司名称可用",
            NameAvailability::Taken => "该公司名称已被注册，请尝试其他名称",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameCheckSettings {
    pub delay: Duration,
    /// Probability in `[0, 1]` that a name comes back available.
    pub availability: f64,
}

impl Default for NameCheckSettings {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            availability: DEFAULT_AVAILABILITY,
        }
    }
}

/// Runs one check at a time. A check issued while another is still waiting
/// is rejected with [`NameCheckError::AlreadyPending`], not queued.
pub struct NameChecker<R = StdRng> {
    settings: NameCheckSettings,
    rng: Mutex<R>,
    pending: AtomicBool,
}

impl NameChecker<StdRng> {
    pub fn new(settings: NameCheckSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }
}

impl<R: Rng> NameChecker<R> {
    pub fn with_rng(
        settings: NameCheckSettings,
        rng: R,
    ) -> Self {
        let availability = if settings.availability.is_nan() {
            DEFAULT_AVAILABILITY
        } else {
            settings.availability.clamp(0.0, 1.0)
        };

        Self {
            settings: NameCheckSettings {
                availability,
                ..settings
            },
            rng: Mutex::new(rng),
            pending: AtomicBool::new(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    pub async fn check(
        &self,
        name: &str,
    ) -> Result<NameAvailability, NameCheckError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NameCheckError::EmptyName);
        }

        if self.pending.swap(true, Ordering::AcqRel) {
            debug!(name, "name check ignored, another is pending");
            return Err(NameCheckError::AlreadyPending);
        }
        let _pending = PendingGuard(&self.pending);

        tokio::time::sleep(self.settings.delay).await;

        let available = self.rng.lock().await.gen_bool(self.settings.availability);
        let result = if available {
            NameAvailability::Available
        } else {
            NameAvailability::Taken
        };

        info!(name, ?result, "name check finished");
        Ok(result)
    }
}

/// Clears the pending flag when the check completes or is dropped mid-wait.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
