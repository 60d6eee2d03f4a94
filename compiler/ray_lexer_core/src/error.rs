//! Engine-level errors.
//!
//! These report defects in a grammar's state functions, not problems with the
//! input. Malformed input is the grammar's business: it emits an error kind
//! of its own and either stops or resynchronizes.

use thiserror::Error;

/// Invariant violation raised by the scan buffer or the driver.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanError {
    /// `backup()` was called without a matching `next()`: twice in a row, or
    /// after the window was sealed, reverted, advanced or reset.
    #[error("backup at offset {pos} has no preceding `next` to undo")]
    UnpairedBackup { pos: u32 },

    /// The driver ran `limit` state functions without reaching a terminal state.
    #[error("scan did not terminate within {limit} steps (stopped at offset {pos})")]
    StepLimitExceeded { limit: u64, pos: u32 },
}
