//! Workload model.
//!
//! A workload is one independent job together with its estimated cost,
//! expressed as a fraction of the total work across all jobs in a planning
//! run. Fraction estimation is an upstream concern; this crate consumes the
//! already-normalized values.

use serde::{Deserialize, Serialize};

/// A job to be placed on a machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    /// Unique job identifier (opaque to the balancer).
    pub id: String,
    /// This job's share of the total estimated work, in (0, 1].
    pub fraction: f64,
}

impl Workload {
    /// Creates a new workload.
    pub fn new(id: impl Into<String>, fraction: f64) -> Self {
        Self {
            id: id.into(),
            fraction,
        }
    }
}
