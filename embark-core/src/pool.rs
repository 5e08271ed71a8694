use std::collections::{BTreeMap, HashMap};

use crate::models::Seat;

/// Available seats for one run, keyed by seat class. Within a class the
/// order is whatever the loader produced (row ascending, column ascending)
/// and assignments consume from the front.
///
/// The pool is owned by a single run; there is no interior locking. The
/// caller is responsible for not running two check-ins for the same flight
/// concurrently.
#[derive(Debug, Clone, Default)]
pub struct SeatPool {
    by_class: BTreeMap<i64, Vec<Seat>>,
}

impl SeatPool {
    pub fn from_seats<I>(seats: I) -> Self
    where
        I: IntoIterator<Item = Seat>,
    {
        let mut by_class: BTreeMap<i64, Vec<Seat>> = BTreeMap::new();
        for seat in seats {
            by_class.entry(seat.seat_type_id).or_default().push(seat);
        }
        Self { by_class }
    }

    /// Seats still available in a class, in pool order.
    pub fn class(&self, seat_type_id: i64) -> &[Seat] {
        self.by_class
            .get(&seat_type_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pop the first available seat of a class.
    pub fn take_next(&mut self, seat_type_id: i64) -> Option<Seat> {
        let seats = self.by_class.get_mut(&seat_type_id)?;
        if seats.is_empty() {
            return None;
        }
        Some(seats.remove(0))
    }

    /// Remove a specific seat from its class pool.
    pub fn remove(&mut self, seat_type_id: i64, seat_id: i64) -> Option<Seat> {
        let seats = self.by_class.get_mut(&seat_type_id)?;
        let pos = seats.iter().position(|s| s.seat_id == seat_id)?;
        Some(seats.remove(pos))
    }

    pub fn remaining(&self, seat_type_id: i64) -> usize {
        self.class(seat_type_id).len()
    }

    pub fn total(&self) -> usize {
        self.by_class.values().map(Vec::len).sum()
    }
}

/// Full seat catalog for an aircraft, indexed by seat id. Populated once
/// per run and used for adjacency/distance lookups on seats that are
/// already assigned, which are by definition absent from the pool.
#[derive(Debug, Clone, Default)]
pub struct SeatMap {
    by_id: HashMap<i64, Seat>,
}

impl SeatMap {
    pub fn from_seats<I>(seats: I) -> Self
    where
        I: IntoIterator<Item = Seat>,
    {
        Self {
            by_id: seats.into_iter().map(|s| (s.seat_id, s)).collect(),
        }
    }

    pub fn get(&self, seat_id: i64) -> Option<&Seat> {
        self.by_id.get(&seat_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
