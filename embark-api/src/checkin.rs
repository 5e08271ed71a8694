use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use embark_core::allocator::assign_seats;
use embark_core::models::{BoardingPass, Flight};
use embark_core::pool::{SeatMap, SeatPool};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerEntry {
    pub passenger_id: i64,
    pub dni: i64,
    pub name: String,
    pub age: i32,
    pub country: String,
    pub boarding_pass_id: i64,
    pub purchase_id: i64,
    pub seat_type_id: i64,
    pub seat_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightData {
    pub flight_id: i64,
    pub takeoff_date_time: i64,
    pub takeoff_airport: String,
    pub landing_date_time: i64,
    pub landing_airport: String,
    pub airplane_id: i64,
    pub passengers: Vec<PassengerEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckinResponse {
    pub code: u16,
    pub data: FlightData,
}

impl PassengerEntry {
    fn from_pass(bp: &BoardingPass) -> Self {
        Self {
            passenger_id: bp.passenger.passenger_id,
            dni: bp.passenger.dni,
            name: bp.passenger.name.clone(),
            age: bp.passenger.age,
            country: bp.passenger.country.clone(),
            boarding_pass_id: bp.boarding_pass_id,
            purchase_id: bp.purchase_id,
            seat_type_id: bp.seat_type_id,
            seat_id: bp.seat_id,
        }
    }
}

fn success_response(flight: Flight, passes: &[BoardingPass]) -> CheckinResponse {
    CheckinResponse {
        code: 200,
        data: FlightData {
            flight_id: flight.flight_id,
            takeoff_date_time: flight.takeoff_date_time,
            takeoff_airport: flight.takeoff_airport,
            landing_date_time: flight.landing_date_time,
            landing_airport: flight.landing_airport,
            airplane_id: flight.airplane_id,
            passengers: passes.iter().map(PassengerEntry::from_pass).collect(),
        },
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new().route("/flights/{flight_id}/passengers", get(flight_passengers))
}

/// GET /flights/{flight_id}/passengers
/// Simulate check-in for a flight: assign seats to every boarding pass
/// that lacks one and return the full passenger list.
async fn flight_passengers(
    State(state): State<AppState>,
    Path(flight_id): Path<i64>,
) -> Result<Json<CheckinResponse>, AppError> {
    // Serialize runs per flight across the whole load-through-respond
    // span; two concurrent runs would see the same availability snapshot
    // and could pick the same seat.
    let lock = state.flight_lock(flight_id).await;
    let _guard = lock.lock().await;

    let flight = state
        .repo
        .find_flight(flight_id)
        .await
        .map_err(|e| AppError::DataAccess(e.to_string()))?
        .ok_or(AppError::FlightNotFound)?;

    let mut passes = state
        .repo
        .boarding_passes_for_flight(flight_id)
        .await
        .map_err(|e| AppError::DataAccess(e.to_string()))?;

    // A flight with no boarding passes is a valid, empty check-in.
    if passes.is_empty() {
        return Ok(Json(success_response(flight, &passes)));
    }

    let available = state
        .repo
        .available_seats(flight.airplane_id, flight_id)
        .await
        .map_err(|e| AppError::DataAccess(e.to_string()))?;
    let catalog = state
        .repo
        .seats_for_airplane(flight.airplane_id)
        .await
        .map_err(|e| AppError::DataAccess(e.to_string()))?;

    let mut pool = SeatPool::from_seats(available);
    let seats = SeatMap::from_seats(catalog);
    let layout = state.layouts.layout_for(flight.airplane_id);

    let plan = assign_seats(&passes, &mut pool, &seats, layout);
    tracing::info!(
        flight_id,
        decided = plan.decided(),
        passengers = passes.len(),
        "check-in run complete"
    );
    plan.apply(&mut passes);

    Ok(Json(success_response(flight, &passes)))
}
