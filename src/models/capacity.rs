//! Machine capacity table.
//!
//! Maps each machine to its remaining assignable bandwidth, in the same
//! normalized units as workload fractions (the sum of all bandwidths covers
//! the sum of all fractions). The table is mutated in place by the balancer
//! and doubles as the post-run diagnostic record: a negative entry marks a
//! machine the overflow escape oversubscribed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Remaining bandwidth per machine, in deterministic insertion order.
///
/// Iteration order is the order machines were inserted, which fixes the
/// rotation order of the balancer's machine queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapacityTable {
    machines: IndexMap<String, f64>,
}

impl CapacityTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a machine with its initial bandwidth.
    pub fn with_machine(mut self, id: impl Into<String>, bandwidth: f64) -> Self {
        self.machines.insert(id.into(), bandwidth);
        self
    }

    /// Inserts or replaces a machine's bandwidth.
    pub fn insert(&mut self, id: impl Into<String>, bandwidth: f64) {
        self.machines.insert(id.into(), bandwidth);
    }

    /// Remaining bandwidth for a machine, if it exists.
    pub fn remaining(&self, id: &str) -> Option<f64> {
        self.machines.get(id).copied()
    }

    /// Sum of remaining bandwidth over all machines.
    pub fn total_bandwidth(&self) -> f64 {
        self.machines.values().sum()
    }

    /// Subtracts an assigned cost from a machine's bandwidth.
    ///
    /// Unknown machine IDs are ignored.
    pub fn charge(&mut self, id: &str, cost: f64) {
        if let Some(bandwidth) = self.machines.get_mut(id) {
            *bandwidth -= cost;
        }
    }

    /// Machine IDs in insertion order.
    pub fn machine_ids(&self) -> impl Iterator<Item = &str> {
        self.machines.keys().map(String::as_str)
    }

    /// (machine ID, remaining bandwidth) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.machines.iter().map(|(id, &b)| (id.as_str(), b))
    }

    /// Machines whose bandwidth has gone negative.
    pub fn oversubscribed(&self) -> Vec<&str> {
        self.machines
            .iter()
            .filter(|(_, &b)| b < 0.0)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Number of machines.
    pub fn len(&self) -> usize {
        self.machines.len()
    }

    /// Whether the table has no machines.
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}

impl FromIterator<(String, f64)> for CapacityTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            machines: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> CapacityTable {
        CapacityTable::new()
            .with_machine("m1", 0.32)
            .with_machine("m2", 0.44)
            .with_machine("m3", 0.24)
    }

    #[test]
    fn test_builder_and_totals() {
        let t = sample_table();
        assert_eq!(t.len(), 3);
        assert!((t.total_bandwidth() - 1.0).abs() < 1e-12);
        assert!((t.remaining("m2").unwrap() - 0.44).abs() < 1e-12);
        assert!(t.remaining("m9").is_none());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let t = sample_table();
        let ids: Vec<&str> = t.machine_ids().collect();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn test_charge_and_oversubscription() {
        let mut t = sample_table();
        t.charge("m1", 0.1);
        assert!((t.remaining("m1").unwrap() - 0.22).abs() < 1e-12);
        assert!(t.oversubscribed().is_empty());

        t.charge("m3", 0.5);
        assert_eq!(t.oversubscribed(), vec!["m3"]);

        // Unknown IDs are a no-op
        t.charge("m9", 1.0);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_serde_preserves_key_order() {
        let t = sample_table();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"m1":0.32,"m2":0.44,"m3":0.24}"#);
        let back: CapacityTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
