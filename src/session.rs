//! Tracks metadata for a drawing session.

use crate::log;

/// Metadata for a drawing session.
///
/// A drawing context is created with a `Session`, and everything that draws into that
/// context logs through it.
#[derive(Clone, Debug)]
pub struct Session {
    log_enabled: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            log_enabled: log::log_enabled(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_for_test_suite() -> Self {
        Self { log_enabled: false }
    }

    pub fn log_enabled(&self) -> bool {
        self.log_enabled
    }
}
