pub mod allocator;
pub mod geometry;
pub mod grouping;
pub mod layout;
pub mod models;
pub mod pool;
pub mod repository;

pub use allocator::{assign_seats, AssignmentPlan};
pub use grouping::{group_by_purchase, PurchaseGroup};
pub use layout::{CabinLayout, LayoutRegistry};
pub use models::{BoardingPass, Flight, Passenger, Seat};
pub use pool::{SeatMap, SeatPool};
pub use repository::CheckinRepository;
