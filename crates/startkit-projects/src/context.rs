//! Render context passed to every template
//!
//! Maps each axis name to its flag record, plus the literal project name:
//!
//! ```text
//! name: demo
//! template_engine: { is_none: false, is_jinja2: true }
//! session: { is_none: false, is_secure: true, is_vanilla: false, is_redis: false }
//! ...
//! ```

use crate::options::{DatabaseFlags, ExampleFlags, SessionFlags, StartOptions, TemplateEngineFlags};
use serde::Serialize;
use tera::Context;

/// Context for rendering template files
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    /// Project name
    pub name: String,
    pub template_engine: TemplateEngineFlags,
    pub session: SessionFlags,
    pub database: DatabaseFlags,
    pub example: ExampleFlags,
}

impl RenderContext {
    /// Build the context from start options
    pub fn new(options: &StartOptions) -> Self {
        Self {
            name: options.name.clone(),
            template_engine: options.template_engine.flags(),
            session: options.session.flags(),
            database: options.database.flags(),
            example: options.example.flags(),
        }
    }

    /// Convert to Tera context for template rendering
    pub fn to_tera_context(&self) -> tera::Result<Context> {
        Context::from_serialize(self)
    }
}
