//! The staged seat assignment algorithm.
//!
//! Three strict stages run over one mutable [`SeatPool`]: groups with
//! minors first, then partially seated groups, then everyone left over.
//! A pass seated by an earlier stage is never revisited. Running out of
//! seats is a normal outcome, not an error; no stage can fail.
//!
//! The allocator never mutates the boarding passes it reads. It returns an
//! [`AssignmentPlan`] of per-pass decisions which the caller applies, so
//! the algorithm stays decoupled from any persistence mechanism and can be
//! exercised with plain in-memory fixtures.

use std::collections::BTreeMap;

use crate::geometry::{find_adjacent_pair, seat_distance};
use crate::grouping::{group_by_purchase, PurchaseGroup};
use crate::layout::CabinLayout;
use crate::models::{BoardingPass, Seat};
use crate::pool::{SeatMap, SeatPool};

/// Seat decisions for one run, parallel to the input boarding-pass slice.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPlan {
    planned: Vec<Option<i64>>,
}

impl AssignmentPlan {
    /// Seat decided for the pass at `index`, if any. Pre-existing
    /// assignments are not part of the plan.
    pub fn seat_for(&self, index: usize) -> Option<i64> {
        self.planned.get(index).copied().flatten()
    }

    /// Number of passes this run decided a seat for.
    pub fn decided(&self) -> usize {
        self.planned.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.decided() == 0
    }

    /// Write the decisions into the boarding passes. Passes that already
    /// carried a seat are left untouched.
    pub fn apply(&self, passes: &mut [BoardingPass]) {
        for (bp, planned) in passes.iter_mut().zip(&self.planned) {
            if bp.seat_id.is_none() {
                bp.seat_id = *planned;
            }
        }
    }
}

/// Run the full three-stage assignment for one flight.
///
/// `passes` is the flight's complete boarding-pass set in loader order,
/// `pool` the per-class available seats, `seats` the aircraft's full seat
/// catalog (for distance lookups against already-assigned seats) and
/// `layout` the aircraft's cabin layout.
pub fn assign_seats(
    passes: &[BoardingPass],
    pool: &mut SeatPool,
    seats: &SeatMap,
    layout: &CabinLayout,
) -> AssignmentPlan {
    let groups = group_by_purchase(passes);
    let mut run = Run {
        passes,
        planned: vec![None; passes.len()],
    };

    tracing::debug!("assigning seats for groups with minors");
    assign_groups_with_minors(&mut run, &groups, pool, layout);

    tracing::debug!("assigning seats for partially seated groups");
    assign_groups_with_preassigned(&mut run, &groups, pool, seats);

    tracing::debug!("assigning seats for remaining passengers");
    assign_individuals(&mut run, &groups, pool);

    AssignmentPlan {
        planned: run.planned,
    }
}

/// Working state for one run: the immutable input plus the decisions made
/// so far. `seat_of` merges both views so later stages skip anyone seated
/// by an earlier stage or before the run started.
struct Run<'a> {
    passes: &'a [BoardingPass],
    planned: Vec<Option<i64>>,
}

impl Run<'_> {
    fn seat_of(&self, index: usize) -> Option<i64> {
        self.passes[index].seat_id.or(self.planned[index])
    }

    fn plan(&mut self, index: usize, seat_id: i64) {
        self.planned[index] = Some(seat_id);
    }
}

/// Stage A: every group containing at least one minor, largest group
/// first (ties: lowest purchase id). Within a group, unseated members are
/// split into minors and adults and bucketed by requested seat class;
/// each bucket pairs minors with adults on adjacent seats for as long as
/// both sides and adjacent pairs last, then falls back to sequential pool
/// order for the leftovers.
fn assign_groups_with_minors(
    run: &mut Run<'_>,
    groups: &[PurchaseGroup],
    pool: &mut SeatPool,
    layout: &CabinLayout,
) {
    let mut with_minors: Vec<&PurchaseGroup> = groups
        .iter()
        .filter(|g| g.members.iter().any(|&i| run.passes[i].is_minor()))
        .collect();
    with_minors.sort_by(|a, b| {
        b.members
            .len()
            .cmp(&a.members.len())
            .then(a.purchase_id.cmp(&b.purchase_id))
    });

    for group in with_minors {
        let unseated: Vec<usize> = group
            .members
            .iter()
            .copied()
            .filter(|&i| run.seat_of(i).is_none())
            .collect();
        if unseated.is_empty() {
            continue;
        }

        // (minors, adults) per requested seat class
        let mut by_class: BTreeMap<i64, (Vec<usize>, Vec<usize>)> = BTreeMap::new();
        for &i in &unseated {
            let bucket = by_class.entry(run.passes[i].seat_type_id).or_default();
            if run.passes[i].is_minor() {
                bucket.0.push(i);
            } else {
                bucket.1.push(i);
            }
        }

        for (seat_type_id, (minors, adults)) in by_class {
            pair_minors_with_adults(run, &minors, &adults, seat_type_id, pool, layout);
        }
    }
}

fn pair_minors_with_adults(
    run: &mut Run<'_>,
    minors: &[usize],
    adults: &[usize],
    seat_type_id: i64,
    pool: &mut SeatPool,
    layout: &CabinLayout,
) {
    let pairs = minors.len().min(adults.len());
    for k in 0..pairs {
        let Some((adult_seat, minor_seat)) = find_adjacent_pair(pool.class(seat_type_id), layout)
            .map(|(first, second)| (first.seat_id, second.seat_id))
        else {
            break;
        };
        run.plan(adults[k], adult_seat);
        run.plan(minors[k], minor_seat);
        pool.remove(seat_type_id, adult_seat);
        pool.remove(seat_type_id, minor_seat);
    }

    // Leftovers (unequal counts or adjacency exhausted) take the next
    // seat in pool order, minors first, with no adjacency guarantee.
    for &i in minors.iter().chain(adults) {
        if run.seat_of(i).is_none() {
            if let Some(seat) = pool.take_next(seat_type_id) {
                run.plan(i, seat.seat_id);
            }
        }
    }
}

/// Stage B: groups of two or more with no minors, at least one member
/// already seated and at least one not. Groups closest to completion go
/// first (ties: lowest purchase id) so they get first access to nearby
/// seats. Each unseated member takes the available seat of its class
/// closest to any already-seated group member. The anchor set is fixed
/// when the group's pass starts; members seated during the pass do not
/// become anchors.
fn assign_groups_with_preassigned(
    run: &mut Run<'_>,
    groups: &[PurchaseGroup],
    pool: &mut SeatPool,
    seats: &SeatMap,
) {
    let mut candidates: Vec<(i64, Vec<usize>, Vec<usize>)> = Vec::new();
    for group in groups {
        if group.members.len() < 2 {
            continue;
        }
        if group.members.iter().any(|&i| run.passes[i].is_minor()) {
            continue;
        }
        let (seated, unseated): (Vec<usize>, Vec<usize>) = group
            .members
            .iter()
            .copied()
            .partition(|&i| run.seat_of(i).is_some());
        if !seated.is_empty() && !unseated.is_empty() {
            candidates.push((group.purchase_id, seated, unseated));
        }
    }
    candidates.sort_by(|a, b| a.2.len().cmp(&b.2.len()).then(a.0.cmp(&b.0)));

    for (_, seated, unseated) in candidates {
        let anchors: Vec<Seat> = seated
            .iter()
            .filter_map(|&i| run.seat_of(i))
            .filter_map(|seat_id| seats.get(seat_id).cloned())
            .collect();
        if anchors.is_empty() {
            continue;
        }

        for i in unseated {
            let seat_type_id = run.passes[i].seat_type_id;
            let mut best: Option<(i64, f64)> = None;
            for candidate in pool.class(seat_type_id) {
                let to_group = anchors
                    .iter()
                    .map(|anchor| seat_distance(candidate, anchor))
                    .fold(f64::INFINITY, f64::min);
                // strict less-than keeps the earliest seat on ties
                if best.map_or(true, |(_, d)| to_group < d) {
                    best = Some((candidate.seat_id, to_group));
                }
            }
            if let Some((seat_id, _)) = best {
                run.plan(i, seat_id);
                pool.remove(seat_type_id, seat_id);
            }
        }
    }
}

/// Stage C: anyone still unseated takes the next pool seat of their
/// class, in group order then member order. An exhausted class leaves the
/// pass unseated.
fn assign_individuals(run: &mut Run<'_>, groups: &[PurchaseGroup], pool: &mut SeatPool) {
    for group in groups {
        for &i in &group.members {
            if run.seat_of(i).is_none() {
                if let Some(seat) = pool.take_next(run.passes[i].seat_type_id) {
                    run.plan(i, seat.seat_id);
                }
            }
        }
    }
}
