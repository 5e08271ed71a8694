use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use embark_api::{app, AppState};
use embark_core::layout::LayoutRegistry;
use embark_core::models::{BoardingPass, Flight, Passenger, Seat};
use embark_core::repository::CheckinRepository;

const ECONOMY: i64 = 3;

/// Plain in-memory fixture behind the loader seam, so the full HTTP flow
/// runs without a database.
struct InMemoryRepository {
    flights: Vec<Flight>,
    passes: Vec<BoardingPass>,
    seats: Vec<Seat>,
}

#[async_trait]
impl CheckinRepository for InMemoryRepository {
    async fn find_flight(
        &self,
        flight_id: i64,
    ) -> Result<Option<Flight>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.flights.iter().find(|f| f.flight_id == flight_id).cloned())
    }

    async fn boarding_passes_for_flight(
        &self,
        flight_id: i64,
    ) -> Result<Vec<BoardingPass>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .passes
            .iter()
            .filter(|bp| bp.flight_id == flight_id)
            .cloned()
            .collect())
    }

    async fn available_seats(
        &self,
        airplane_id: i64,
        flight_id: i64,
    ) -> Result<Vec<Seat>, Box<dyn std::error::Error + Send + Sync>> {
        let taken: Vec<i64> = self
            .passes
            .iter()
            .filter(|bp| bp.flight_id == flight_id)
            .filter_map(|bp| bp.seat_id)
            .collect();
        let mut seats: Vec<Seat> = self
            .seats
            .iter()
            .filter(|s| s.airplane_id == airplane_id && !taken.contains(&s.seat_id))
            .cloned()
            .collect();
        seats.sort_by(|a, b| {
            a.seat_row
                .cmp(&b.seat_row)
                .then(a.seat_column.cmp(&b.seat_column))
        });
        Ok(seats)
    }

    async fn seats_for_airplane(
        &self,
        airplane_id: i64,
    ) -> Result<Vec<Seat>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .seats
            .iter()
            .filter(|s| s.airplane_id == airplane_id)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}

/// Every operation fails, as if the database were unreachable.
struct UnreachableRepository;

#[async_trait]
impl CheckinRepository for UnreachableRepository {
    async fn find_flight(
        &self,
        _flight_id: i64,
    ) -> Result<Option<Flight>, Box<dyn std::error::Error + Send + Sync>> {
        Err("connection refused".into())
    }

    async fn boarding_passes_for_flight(
        &self,
        _flight_id: i64,
    ) -> Result<Vec<BoardingPass>, Box<dyn std::error::Error + Send + Sync>> {
        Err("connection refused".into())
    }

    async fn available_seats(
        &self,
        _airplane_id: i64,
        _flight_id: i64,
    ) -> Result<Vec<Seat>, Box<dyn std::error::Error + Send + Sync>> {
        Err("connection refused".into())
    }

    async fn seats_for_airplane(
        &self,
        _airplane_id: i64,
    ) -> Result<Vec<Seat>, Box<dyn std::error::Error + Send + Sync>> {
        Err("connection refused".into())
    }

    async fn ping(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err("connection refused".into())
    }
}

fn flight(id: i64, airplane_id: i64) -> Flight {
    Flight {
        flight_id: id,
        takeoff_date_time: 1688207580,
        takeoff_airport: "SCL".to_string(),
        landing_date_time: 1688221980,
        landing_airport: "LIM".to_string(),
        airplane_id,
    }
}

fn pass(id: i64, purchase_id: i64, age: i32, flight_id: i64) -> BoardingPass {
    BoardingPass {
        boarding_pass_id: id,
        purchase_id,
        passenger: Passenger {
            passenger_id: id,
            dni: 10_000_000 + id,
            name: format!("Passenger {}", id),
            age,
            country: "Chile".to_string(),
        },
        seat_type_id: ECONOMY,
        seat_id: None,
        flight_id,
    }
}

fn seat(id: i64, row: i32, column: char) -> Seat {
    Seat {
        seat_id: id,
        seat_row: row,
        seat_column: column.to_string(),
        seat_type_id: ECONOMY,
        airplane_id: 1,
    }
}

fn fixture_state() -> AppState {
    let repo = InMemoryRepository {
        flights: vec![flight(1, 1), flight(3, 1)],
        passes: vec![pass(1, 1, 30, 1), pass(2, 1, 10, 1)],
        seats: vec![
            seat(101, 8, 'A'),
            seat(102, 8, 'B'),
            seat(103, 8, 'C'),
            seat(104, 9, 'E'),
        ],
    };
    AppState::new(Arc::new(repo), LayoutRegistry::default())
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_checkin_assigns_adjacent_seats_for_minor_and_adult() {
    let (status, body) = get_json(fixture_state(), "/flights/1/passengers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"]["flightId"], 1);
    assert_eq!(body["data"]["takeoffAirport"], "SCL");

    let passengers = body["data"]["passengers"].as_array().unwrap();
    assert_eq!(passengers.len(), 2);

    // Adult took the first seat of the adjacent pair (8A), the minor the
    // second (8B).
    assert_eq!(passengers[0]["seatId"], 101);
    assert_eq!(passengers[1]["seatId"], 102);
    assert_eq!(passengers[1]["age"], 10);
}

#[tokio::test]
async fn test_flight_without_passengers_returns_empty_list() {
    let (status, body) = get_json(fixture_state(), "/flights/3/passengers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"]["flightId"], 3);
    assert!(body["data"]["passengers"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_flight_returns_not_found() {
    let (status, body) = get_json(fixture_state(), "/flights/999/passengers").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["errors"], "flight not found");
}

#[tokio::test]
async fn test_data_access_failure_returns_client_error() {
    let state = AppState::new(Arc::new(UnreachableRepository), LayoutRegistry::default());
    let (status, body) = get_json(state, "/flights/1/passengers").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    let errors = body["errors"].as_str().unwrap();
    assert!(errors.starts_with("could not connect to db"));
}

#[tokio::test]
async fn test_health_reports_database_state() {
    let (status, body) = get_json(fixture_state(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let state = AppState::new(Arc::new(UnreachableRepository), LayoutRegistry::default());
    let (_, body) = get_json(state, "/health").await;
    assert_eq!(body["status"], "unhealthy");
}
