use std::sync::Arc;

use crate::config::Config;
use crate::translate::router::RouteTable;

/// Shared application state. The route table is immutable after startup, so
/// it is shared read-only; the reqwest client pools connections across
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub routes: Arc<RouteTable>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            routes: Arc::new(RouteTable::with_defaults()),
            http: reqwest::Client::new(),
        }
    }
}
