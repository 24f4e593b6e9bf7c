//! Assignment plan (solution) model.
//!
//! The output artifact of a planning run: for every machine, the ordered
//! list of workload IDs assigned to it. Per-machine order is assignment
//! order (cheapest jobs first), which downstream script generation relies
//! on so that the quickest jobs run — and can be sanity-checked — first.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A complete job-to-machine assignment.
///
/// Every machine in the planning run appears as a key, including machines
/// that received no workloads, and serialization preserves both the machine
/// key order and the per-machine job order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentPlan {
    assignments: IndexMap<String, Vec<String>>,
}

impl AssignmentPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plan with an empty job list for every given machine.
    pub fn for_machines<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assignments: ids.into_iter().map(|id| (id.into(), Vec::new())).collect(),
        }
    }

    /// Appends a workload to a machine's list.
    pub fn record(&mut self, machine_id: &str, workload_id: &str) {
        self.assignments
            .entry(machine_id.to_string())
            .or_default()
            .push(workload_id.to_string());
    }

    /// Workloads assigned to a machine, in assignment order.
    pub fn jobs_for(&self, machine_id: &str) -> &[String] {
        self.assignments
            .get(machine_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The machine a workload was assigned to, if any.
    pub fn machine_for(&self, workload_id: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(_, jobs)| jobs.iter().any(|j| j == workload_id))
            .map(|(id, _)| id.as_str())
    }

    /// Total number of assigned workloads across all machines.
    pub fn assigned_count(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }

    /// Machine IDs in insertion order.
    pub fn machines(&self) -> impl Iterator<Item = &str> {
        self.assignments.keys().map(String::as_str)
    }

    /// (machine ID, assigned workloads) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.assignments
            .iter()
            .map(|(id, jobs)| (id.as_str(), jobs.as_slice()))
    }

    /// Number of machines in the plan.
    pub fn machine_count(&self) -> usize {
        self.assignments.len()
    }
}
