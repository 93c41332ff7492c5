use crate::config::Config;
use crate::sizing::engine::SizeCharter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless engine over static charts; the configured profile is its default.
    pub engine: SizeCharter,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engine = SizeCharter::new(config.sizing_profile);
        Self { config, engine }
    }
}
