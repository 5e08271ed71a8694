use std::collections::HashMap;
use std::sync::Arc;

use embark_core::layout::LayoutRegistry;
use embark_core::repository::CheckinRepository;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CheckinRepository>,
    pub layouts: Arc<LayoutRegistry>,
    /// One mutex per flight so concurrent check-in requests for the same
    /// flight serialize instead of racing each other for seats. The
    /// engine itself takes no locks; this is the caller-side guarantee
    /// it requires.
    pub flight_locks: Arc<Mutex<HashMap<i64, Arc<Mutex<()>>>>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CheckinRepository>, layouts: LayoutRegistry) -> Self {
        Self {
            repo,
            layouts: Arc::new(layouts),
            flight_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn flight_lock(&self, flight_id: i64) -> Arc<Mutex<()>> {
        let mut locks = self.flight_locks.lock().await;
        locks
            .entry(flight_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
