use async_trait::async_trait;

use crate::enhance::sections::enhance_text;
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Turns a section's raw text into an enhanced version.
///
/// Carried in `AppState` as `Arc<dyn SectionEnhancer>` so a model-backed
/// implementation can replace the template one without touching the handler.
#[async_trait]
pub trait SectionEnhancer: Send + Sync {
    async fn enhance(&self, section: &str, content: &str) -> Result<String, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateEnhancer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Appends fixed boilerplate per section. Deterministic, offline, never fails.
pub struct TemplateEnhancer;

#[async_trait]
impl SectionEnhancer for TemplateEnhancer {
    async fn enhance(&self, section: &str, content: &str) -> Result<String, AppError> {
        Ok(enhance_text(section, content))
    }
}
