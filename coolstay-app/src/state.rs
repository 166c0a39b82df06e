//! Top-level application state.

use std::sync::Arc;

use crate::app::AppConfig;
use crate::domains::DomainRegistry;

/// Root state handed to iced; everything lives in the domain registry,
/// the config is kept only for diagnostics.
#[derive(Debug)]
pub struct State {
    pub domains: DomainRegistry,
    pub config: Arc<AppConfig>,
}
