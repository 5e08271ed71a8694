use async_trait::async_trait;
use sqlx::PgPool;

use embark_core::models::{BoardingPass, Flight, Passenger, Seat};
use embark_core::repository::CheckinRepository;

/// Postgres-backed loader for check-in runs.
pub struct PostgresCheckinRepository {
    pub pool: PgPool,
}

impl PostgresCheckinRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FlightRow {
    flight_id: i64,
    takeoff_date_time: i64,
    takeoff_airport: String,
    landing_date_time: i64,
    landing_airport: String,
    airplane_id: i64,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Flight {
            flight_id: row.flight_id,
            takeoff_date_time: row.takeoff_date_time,
            takeoff_airport: row.takeoff_airport,
            landing_date_time: row.landing_date_time,
            landing_airport: row.landing_airport,
            airplane_id: row.airplane_id,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BoardingPassRow {
    boarding_pass_id: i64,
    purchase_id: i64,
    seat_type_id: i64,
    seat_id: Option<i64>,
    flight_id: i64,
    passenger_id: i64,
    dni: i64,
    name: String,
    age: i32,
    country: String,
}

impl From<BoardingPassRow> for BoardingPass {
    fn from(row: BoardingPassRow) -> Self {
        BoardingPass {
            boarding_pass_id: row.boarding_pass_id,
            purchase_id: row.purchase_id,
            passenger: Passenger {
                passenger_id: row.passenger_id,
                dni: row.dni,
                name: row.name,
                age: row.age,
                country: row.country,
            },
            seat_type_id: row.seat_type_id,
            seat_id: row.seat_id,
            flight_id: row.flight_id,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SeatRow {
    seat_id: i64,
    seat_column: String,
    seat_row: i32,
    seat_type_id: i64,
    airplane_id: i64,
}

impl From<SeatRow> for Seat {
    fn from(row: SeatRow) -> Self {
        Seat {
            seat_id: row.seat_id,
            seat_row: row.seat_row,
            seat_column: row.seat_column,
            seat_type_id: row.seat_type_id,
            airplane_id: row.airplane_id,
        }
    }
}

#[async_trait]
impl CheckinRepository for PostgresCheckinRepository {
    async fn find_flight(
        &self,
        flight_id: i64,
    ) -> Result<Option<Flight>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, FlightRow>(
            r#"
            SELECT flight_id, takeoff_date_time, takeoff_airport,
                   landing_date_time, landing_airport, airplane_id
            FROM flight
            WHERE flight_id = $1
            "#,
        )
        .bind(flight_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Flight::from))
    }

    async fn boarding_passes_for_flight(
        &self,
        flight_id: i64,
    ) -> Result<Vec<BoardingPass>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, BoardingPassRow>(
            r#"
            SELECT bp.boarding_pass_id, bp.purchase_id, bp.seat_type_id,
                   bp.seat_id, bp.flight_id,
                   p.passenger_id, p.dni, p.name, p.age, p.country
            FROM boarding_pass bp
            JOIN passenger p ON p.passenger_id = bp.passenger_id
            WHERE bp.flight_id = $1
            ORDER BY bp.boarding_pass_id
            "#,
        )
        .bind(flight_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BoardingPass::from).collect())
    }

    async fn available_seats(
        &self,
        airplane_id: i64,
        flight_id: i64,
    ) -> Result<Vec<Seat>, Box<dyn std::error::Error + Send + Sync>> {
        // Single LEFT JOIN pass: a seat is available when no boarding
        // pass for this flight is bound to it.
        let rows = sqlx::query_as::<_, SeatRow>(
            r#"
            SELECT s.seat_id, s.seat_column, s.seat_row, s.seat_type_id, s.airplane_id
            FROM seat s
            LEFT JOIN boarding_pass bp
                   ON bp.seat_id = s.seat_id AND bp.flight_id = $1
            WHERE s.airplane_id = $2
              AND bp.seat_id IS NULL
            ORDER BY s.seat_row, s.seat_column
            "#,
        )
        .bind(flight_id)
        .bind(airplane_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Seat::from).collect())
    }

    async fn seats_for_airplane(
        &self,
        airplane_id: i64,
    ) -> Result<Vec<Seat>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, SeatRow>(
            r#"
            SELECT seat_id, seat_column, seat_row, seat_type_id, airplane_id
            FROM seat
            WHERE airplane_id = $1
            "#,
        )
        .bind(airplane_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Seat::from).collect())
    }

    async fn ping(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
