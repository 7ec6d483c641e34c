//! Application state for the timeclock engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::EngineSettings;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently just the loaded engine settings.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine settings.
    settings: Arc<EngineSettings>,
}

impl AppState {
    /// Creates a new application state with the given settings.
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Returns a reference to the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}
