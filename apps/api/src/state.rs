use std::sync::Arc;

use crate::config::Config;
use crate::enhance::enhancer::SectionEnhancer;
use crate::storage::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable section enhancer. Default: TemplateEnhancer.
    pub enhancer: Arc<dyn SectionEnhancer>,
    pub store: ResumeStore,
}
