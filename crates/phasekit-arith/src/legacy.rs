//! Old entry-point names, kept for existing callers.
//!
//! Both forward to the current operations and log one warning per returned
//! operation the first time it is applied.

use phasekit_ops::Deprecated;

use crate::increment::{IncrementByInteger, PhaseIncrement, increment_by_integer};

/// Former name of [`increment_phase_by_integer`](crate::increment_phase_by_integer).
#[deprecated(since = "0.3.0", note = "Use increment_phase_by_integer")]
pub fn integer_increment_phase_le(amount: u64) -> Deprecated<PhaseIncrement> {
    Deprecated::new(
        PhaseIncrement::new(amount),
        "integer_increment_phase_le",
        "increment_phase_by_integer",
    )
}

/// Former name of [`increment_by_integer`](crate::increment_by_integer).
#[deprecated(since = "0.3.0", note = "Use increment_by_integer")]
pub fn integer_increment_le(amount: u64) -> Deprecated<IncrementByInteger> {
    Deprecated::new(
        increment_by_integer(amount),
        "integer_increment_le",
        "increment_by_integer",
    )
}
