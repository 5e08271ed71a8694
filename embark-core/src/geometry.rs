//! Pure seat-geometry helpers: column indexing, pairwise distance and the
//! adjacent-pair search used when seating minors next to adults.

use std::collections::BTreeMap;

use crate::layout::CabinLayout;
use crate::models::Seat;

/// First letter of a seat column, if any. Columns are single letters in
/// the data model but arrive as strings from storage.
pub fn column_letter(column: &str) -> Option<char> {
    column.chars().next()
}

/// Zero-based alphabetic position of a column ('A' -> 0, 'B' -> 1, ...).
pub fn column_index(column: &str) -> i32 {
    column_letter(column).map_or(0, |c| c as i32 - 'A' as i32)
}

/// Distance between two seats. Row difference counts double the column
/// difference so that same-row neighbours always beat a seat one row away.
pub fn seat_distance(a: &Seat, b: &Seat) -> f64 {
    let row_diff = (a.seat_row - b.seat_row).abs() as f64;
    let col_diff = (column_index(&a.seat_column) - column_index(&b.seat_column)).abs() as f64;
    row_diff + col_diff * 0.5
}

/// Find one pair of physically adjacent seats in a class pool.
///
/// Seats are grouped by row (ascending) and each row is scanned in pool
/// order; the first pair whose columns appear in the layout's adjacency
/// relation wins. First match, not best match.
pub fn find_adjacent_pair<'a>(seats: &'a [Seat], layout: &CabinLayout) -> Option<(&'a Seat, &'a Seat)> {
    let mut by_row: BTreeMap<i32, Vec<&Seat>> = BTreeMap::new();
    for seat in seats {
        by_row.entry(seat.seat_row).or_default().push(seat);
    }

    for row_seats in by_row.values() {
        if row_seats.len() < 2 {
            continue;
        }
        for (i, first) in row_seats.iter().enumerate() {
            for second in &row_seats[i + 1..] {
                let (Some(a), Some(b)) = (
                    column_letter(&first.seat_column),
                    column_letter(&second.seat_column),
                ) else {
                    continue;
                };
                if layout.are_adjacent(a, b) {
                    return Some((first, second));
                }
            }
        }
    }
    None
}
