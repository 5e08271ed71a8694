use async_trait::async_trait;

use crate::models::{BoardingPass, Flight, Seat};

/// Data-access seam for a check-in run. The engine consumes plain
/// in-memory records; everything behind this trait is the store's
/// concern. Infrastructure failures surface as errors, business outcomes
/// (no passengers, no free seats) are values.
#[async_trait]
pub trait CheckinRepository: Send + Sync {
    /// Static flight data, or `None` when the flight does not exist.
    async fn find_flight(
        &self,
        flight_id: i64,
    ) -> Result<Option<Flight>, Box<dyn std::error::Error + Send + Sync>>;

    /// Every boarding pass for the flight with its passenger resolved,
    /// in stable query order.
    async fn boarding_passes_for_flight(
        &self,
        flight_id: i64,
    ) -> Result<Vec<BoardingPass>, Box<dyn std::error::Error + Send + Sync>>;

    /// Seats of the aircraft with no boarding pass bound for this
    /// flight, ordered by row then column.
    async fn available_seats(
        &self,
        airplane_id: i64,
        flight_id: i64,
    ) -> Result<Vec<Seat>, Box<dyn std::error::Error + Send + Sync>>;

    /// The aircraft's full seat catalog, for by-id lookups against seats
    /// that are already assigned.
    async fn seats_for_airplane(
        &self,
        airplane_id: i64,
    ) -> Result<Vec<Seat>, Box<dyn std::error::Error + Send + Sync>>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
