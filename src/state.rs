use std::time::Duration;

use crate::db::Db;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub response_delay: Duration,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        Self {
            db,
            response_delay: Duration::ZERO,
        }
    }

    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }
}
