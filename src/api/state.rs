//! API server state

use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::store::TodoStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// The process-wide todo collection
    pub store: Arc<TodoStore>,

    started_at: Instant,
    environment: String,
    port: u16,
}

impl AppState {
    pub fn new(store: Arc<TodoStore>, config: &AppConfig) -> Self {
        Self {
            store,
            started_at: Instant::now(),
            environment: config.environment.to_string(),
            port: config.server.port,
        }
    }

    /// Seconds since the service started
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    /// Deployment environment label
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Configured listen port
    pub fn port(&self) -> u16 {
        self.port
    }
}
