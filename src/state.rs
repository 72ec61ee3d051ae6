use std::sync::Arc;

use crate::config::Config;
use crate::source::LeaderboardSource;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn LeaderboardSource>,
    pub config: Config,
}

impl FromRef<AppState> for Arc<dyn LeaderboardSource> {
    fn from_ref(state: &AppState) -> Self {
        state.source.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
