//! Trampoline that runs a grammar's state functions to completion.
//!
//! A state function scans with the buffer's primitives and returns the state
//! to run next. The driver calls it, replaces the current state with the
//! result, and repeats until a state returns `Ok(None)`. It keeps nothing
//! between runs.
//!
//! Termination is the grammar's obligation: every state must eventually
//! return `Ok(None)` once the input is exhausted. [`ScanConfig::step_limit`]
//! can bound a run while a grammar is being developed.

use std::fmt;

use tracing::{debug, trace};

use crate::{ScanBuffer, ScanError};

/// What a state function returns: the next state, `None` to finish, or an
/// invariant violation that aborts the run.
pub type Transition<K> = Result<Option<StateFn<K>>, ScanError>;

/// A scanning state: a function from the buffer to the next state.
pub struct StateFn<K>(fn(&mut ScanBuffer<K>) -> Transition<K>);

impl<K> StateFn<K> {
    /// Wrap a state function.
    #[inline]
    pub const fn new(f: fn(&mut ScanBuffer<K>) -> Transition<K>) -> Self {
        StateFn(f)
    }

    /// Run this state once against `buffer`.
    #[inline]
    pub fn call(self, buffer: &mut ScanBuffer<K>) -> Transition<K> {
        (self.0)(buffer)
    }
}

// Manual impls: a function pointer is `Copy` whatever `K` is.
impl<K> Clone for StateFn<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for StateFn<K> {}

impl<K> fmt::Debug for StateFn<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateFn({:p})", self.0 as *const ())
    }
}

/// Driver configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    /// Maximum number of state-function calls per run (0 = unlimited).
    pub step_limit: u64,
}

impl ScanConfig {
    /// No step limit. Same as `ScanConfig::default()`.
    pub const fn unlimited() -> Self {
        ScanConfig { step_limit: 0 }
    }

    /// Stop with [`ScanError::StepLimitExceeded`] after `limit` calls.
    pub const fn with_step_limit(limit: u64) -> Self {
        ScanConfig { step_limit: limit }
    }
}

/// Runs state functions against a scan buffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Driver {
    config: ScanConfig,
}

impl Driver {
    pub fn new(config: ScanConfig) -> Self {
        Driver { config }
    }

    pub fn config(&self) -> ScanConfig {
        self.config
    }

    /// Runs from `initial` until a state returns `Ok(None)`.
    ///
    /// An error from a state function ends the run immediately and is
    /// returned as-is; tokens emitted before it stay in the buffer.
    pub fn run<K>(&self, buffer: &mut ScanBuffer<K>, initial: StateFn<K>) -> Result<(), ScanError> {
        let limit = self.config.step_limit;
        let mut state = Some(initial);
        let mut steps: u64 = 0;

        while let Some(current) = state {
            if limit != 0 && steps >= limit {
                debug!(steps, pos = buffer.pos(), "step limit reached");
                return Err(ScanError::StepLimitExceeded {
                    limit,
                    pos: buffer.pos(),
                });
            }
            steps += 1;
            trace!(step = steps, start = buffer.start(), pos = buffer.pos(), "enter state");
            state = match current.call(buffer) {
                Ok(next) => next,
                Err(err) => {
                    debug!(steps, %err, "scan aborted");
                    return Err(err);
                }
            };
        }

        debug!(steps, tokens = buffer.tokens().len(), "scan finished");
        Ok(())
    }
}

/// Runs `initial` against `buffer` with the default (unlimited) driver.
pub fn run<K>(buffer: &mut ScanBuffer<K>, initial: StateFn<K>) -> Result<(), ScanError> {
    Driver::default().run(buffer, initial)
}
