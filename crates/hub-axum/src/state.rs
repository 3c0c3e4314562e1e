//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped `AxumContext` holding the core facade, the sync job and
/// the startup trigger.
pub type AppState = Arc<AxumContext>;
