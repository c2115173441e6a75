use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::ApplicationWriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text generator. Default: `LlmApplicationWriter`; tests swap in a stub.
    pub writer: Arc<dyn ApplicationWriter>,
}
