use std::time::{Duration, Instant};

use crate::users::service::UserService;

/// The application state
#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    #[from_ref(skip)]
    started_at: Instant,
    users: UserService,
}

impl AppState {
    /// Create a state with no user
    pub(crate) fn new() -> Self {
        Self {
            started_at: Instant::now(),
            users: UserService::default(),
        }
    }

    pub(crate) fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
