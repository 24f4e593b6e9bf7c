//! Fractional workload partitioning for heterogeneous machine pools.
//!
//! Given a set of independent jobs, each carrying its share of the total
//! estimated work, and a pool of machines with fixed, unequal bandwidths,
//! this crate assigns every job to exactly one machine. The heuristic is a
//! deterministic greedy sweep: smallest jobs first, rotated round-robin over
//! the machine pool, with an explicit overflow escape when nothing fits.
//! Cost estimation and job execution live upstream and downstream of this
//! crate; it only plans.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Workload`, `CapacityTable`, `AssignmentPlan`
//! - **`validation`**: Input integrity checks (duplicate IDs, fraction and
//!   bandwidth ranges)
//! - **`balancer`**: The assignment engine and its error types
//!
//! # References
//!
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin
//!   Packing: A Survey"
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

pub mod balancer;
pub mod models;
pub mod validation;
