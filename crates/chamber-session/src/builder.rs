//! Builder for constructing a [`Session`].

use chamber_core::{ChamberConfig, Millis};
use chamber_state::ChamberStore;

use crate::error::SessionResult;
use crate::session::Session;

/// Builder for [`Session`].
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(ChamberConfig::default())
///     .start(Millis::ZERO)
///     .build()?;
/// session.step(60_000, &mut NoopObserver);
/// ```
pub struct SessionBuilder {
    config: ChamberConfig,
    start:  Millis,
}

impl SessionBuilder {
    pub fn new(config: ChamberConfig) -> Self {
        Self {
            config,
            start: Millis::ZERO,
        }
    }

    /// Start the session clock at `start` instead of zero.  Useful when a
    /// host embeds several sessions on one timeline.
    pub fn start(mut self, start: Millis) -> Self {
        self.start = start;
        self
    }

    /// Validate the configuration and return a ready-to-drive [`Session`].
    pub fn build(self) -> SessionResult<Session> {
        self.config.validate()?;
        let store = ChamberStore::new(self.config, self.start);
        Ok(Session::new(store, self.start))
    }
}
