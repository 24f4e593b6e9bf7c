//! Greedy fractional-workload balancer.
//!
//! # Algorithm
//!
//! 1. Sort workloads ascending by fraction (ties by ID). Small jobs spread
//!    across all machines before capacity gets tight, and the cheapest
//!    simulations run first downstream, where their results can be
//!    sanity-checked early.
//! 2. Rotate a circular queue of machines. A workload lands on the first
//!    machine that keeps strictly positive bandwidth after being charged;
//!    the machine then rejoins the back of the try order, so consecutive
//!    jobs rotate round-robin over under-loaded machines.
//! 3. If one full rotation finds no fit, the workload is forced onto the
//!    machine with the most remaining bandwidth, even when that drives the
//!    bandwidth negative. Oversubscription is a reported degraded state,
//!    not an error.
//!
//! # Complexity
//! O(J log J + J·M) for J workloads and M machines.
//!
//! # Reference
//! Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin
//! Packing: A Survey"

use std::collections::VecDeque;

use crate::models::{AssignmentPlan, CapacityTable, Workload};

/// Errors from a balancing run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssignmentError {
    /// Total requested work exceeds total declared capacity. Raised before
    /// any machine state is touched; an input error, not retried.
    #[error("total demand {demand} exceeds total capacity {capacity}")]
    PreconditionViolation { demand: f64, capacity: f64 },
    /// Not every workload ended up assigned. A defect in the heuristic
    /// itself; unreachable as long as the overflow escape holds.
    #[error("only {assigned} of {expected} workloads were assigned")]
    CompletenessViolation { assigned: usize, expected: usize },
}

/// Assigns every workload to exactly one machine.
///
/// `capacities` is charged in place as jobs land; after the call it records
/// each machine's remaining headroom (negative where the overflow escape
/// oversubscribed a machine). The returned plan lists every machine, each
/// with its workloads in assignment order.
///
/// # Errors
/// [`AssignmentError::PreconditionViolation`] when the summed fractions
/// exceed the summed bandwidths, [`AssignmentError::CompletenessViolation`]
/// if the sweep somehow leaves a workload unplaced.
///
/// # Example
/// ```
/// use workload_balance::balancer::assign_workloads;
/// use workload_balance::models::{CapacityTable, Workload};
///
/// let workloads = vec![
///     Workload::new("sim-a", 0.05),
///     Workload::new("sim-b", 0.30),
/// ];
/// let mut capacities = CapacityTable::new()
///     .with_machine("m1", 0.5)
///     .with_machine("m2", 0.5);
///
/// let plan = assign_workloads(&workloads, &mut capacities).unwrap();
/// assert_eq!(plan.assigned_count(), 2);
/// assert!(capacities.oversubscribed().is_empty());
/// ```
pub fn assign_workloads(
    workloads: &[Workload],
    capacities: &mut CapacityTable,
) -> Result<AssignmentPlan, AssignmentError> {
    let demand: f64 = workloads.iter().map(|w| w.fraction).sum();
    let capacity = capacities.total_bandwidth();
    if demand > capacity {
        return Err(AssignmentError::PreconditionViolation { demand, capacity });
    }

    let mut order: Vec<&Workload> = workloads.iter().collect();
    order.sort_by(|a, b| {
        a.fraction
            .partial_cmp(&b.fraction)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut plan = AssignmentPlan::for_machines(capacities.machine_ids());
    let mut queue: VecDeque<String> = capacities.machine_ids().map(String::from).collect();

    for workload in order {
        let mut first_attempt: Option<String> = None;
        while let Some(machine) = queue.pop_front() {
            match &first_attempt {
                None => first_attempt = Some(machine.clone()),
                Some(marker) if *marker == machine => {
                    // Full rotation without a fit. Overflow onto the machine
                    // with the most remaining bandwidth, queue order breaking
                    // ties; the just-popped marker is only eligible when it
                    // is the sole machine.
                    let target =
                        most_available(&queue, capacities).unwrap_or_else(|| machine.clone());
                    log::debug!(
                        "no machine fits workload {} ({}); forcing onto {} (remaining {})",
                        workload.id,
                        workload.fraction,
                        target,
                        capacities.remaining(&target).unwrap_or(0.0),
                    );
                    plan.record(&target, &workload.id);
                    capacities.charge(&target, workload.fraction);
                    queue.push_back(machine);
                    break;
                }
                Some(_) => {}
            }

            let remaining = capacities.remaining(&machine).unwrap_or(0.0);
            // Strictly positive remainder required: exact saturation is
            // rotated past in favor of leaving slack.
            if remaining - workload.fraction > 0.0 {
                plan.record(&machine, &workload.id);
                capacities.charge(&machine, workload.fraction);
                queue.push_back(machine);
                break;
            }
            queue.push_back(machine);
        }
    }

    if plan.assigned_count() != workloads.len() {
        return Err(AssignmentError::CompletenessViolation {
            assigned: plan.assigned_count(),
            expected: workloads.len(),
        });
    }

    log::debug!(
        "assigned {} workloads across {} machines ({} oversubscribed)",
        workloads.len(),
        capacities.len(),
        capacities.oversubscribed().len(),
    );
    Ok(plan)
}

/// Machine with the largest remaining bandwidth, queue order breaking ties.
fn most_available(queue: &VecDeque<String>, capacities: &CapacityTable) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;
    for id in queue {
        let remaining = capacities.remaining(id).unwrap_or(0.0);
        match best {
            Some((_, top)) if remaining <= top => {}
            _ => best = Some((id, remaining)),
        }
    }
    best.map(|(id, _)| id.to_string())
}
