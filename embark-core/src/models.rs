use serde::{Deserialize, Serialize};

/// Age below which a passenger counts as a minor for seating purposes.
pub const ADULT_AGE: i32 = 18;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Passenger {
    pub passenger_id: i64,
    pub dni: i64,
    pub name: String,
    pub age: i32,
    pub country: String,
}

/// A physical seat on an aircraft. Read-only reference data for the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seat {
    pub seat_id: i64,
    pub seat_row: i32,
    pub seat_column: String,
    pub seat_type_id: i64,
    pub airplane_id: i64,
}

/// A passenger's ticket for one flight. `seat_id` is the only field the
/// engine ever writes; it stays `None` when the requested class runs out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardingPass {
    pub boarding_pass_id: i64,
    pub purchase_id: i64,
    pub passenger: Passenger,
    pub seat_type_id: i64,
    pub seat_id: Option<i64>,
    pub flight_id: i64,
}

impl BoardingPass {
    pub fn is_minor(&self) -> bool {
        self.passenger.age < ADULT_AGE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    pub flight_id: i64,
    pub takeoff_date_time: i64,
    pub takeoff_airport: String,
    pub landing_date_time: i64,
    pub landing_airport: String,
    pub airplane_id: i64,
}
