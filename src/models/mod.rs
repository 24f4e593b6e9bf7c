//! Workload-partitioning domain models.
//!
//! Provides the three data types a planning run moves between: the jobs to
//! place (`Workload`), the machine pool and its remaining headroom
//! (`CapacityTable`), and the resulting job-to-machine mapping
//! (`AssignmentPlan`). All three are ephemeral — built fresh from input data
//! at the start of a run and discarded once the plan is serialized.

mod capacity;
mod plan;
mod workload;

pub use capacity::CapacityTable;
pub use plan::AssignmentPlan;
pub use workload::Workload;
