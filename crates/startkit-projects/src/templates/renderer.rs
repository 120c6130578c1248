//! Template rendering with Tera.
//!
//! Handles:
//! - File contents, rendered against the full render context
//! - Relative paths, so `app/{{ name }}.py` lands at `app/demo.py`

use crate::context::RenderContext;
use crate::error::{Error, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use tera::{Context, Tera};

/// Template renderer holding the Tera instance and the shared context
#[derive(Debug)]
pub struct TemplateRenderer {
    tera: Tera,
    context: Context,
}

impl TemplateRenderer {
    /// Create a renderer for the given render context
    pub fn new(ctx: &RenderContext) -> Result<Self> {
        let context = ctx
            .to_tera_context()
            .map_err(|e| Error::template_render("render context", e))?;

        let mut tera = Tera::default();
        // Generated files are source code, never HTML to be escaped
        tera.autoescape_on(vec![]);

        Ok(Self { tera, context })
    }

    /// Render the contents of a template file
    ///
    /// `name` registers the template with Tera; `display_path` identifies the
    /// file in errors.
    pub fn render(&mut self, name: &str, display_path: &str, source: &str) -> Result<String> {
        self.tera
            .add_raw_template(name, source)
            .map_err(|e| Error::template_render(display_path, e))?;

        self.tera
            .render(name, &self.context)
            .map_err(|e| Error::template_render(display_path, e))
    }

    /// Render a template file's relative path
    ///
    /// The result must stay relative to the project root: absolute paths,
    /// `..` components and empty renders are rejected.
    pub fn render_path(&self, relative: &Utf8Path, display_path: &str) -> Result<Utf8PathBuf> {
        let rendered = if relative.as_str().contains('{') {
            let rendered = Tera::one_off(relative.as_str(), &self.context, false)
                .map_err(|e| Error::template_render(display_path, e))?;
            Utf8PathBuf::from(rendered)
        } else {
            relative.to_path_buf()
        };

        let inside_root = rendered
            .components()
            .all(|c| matches!(c, Utf8Component::Normal(_) | Utf8Component::CurDir));
        if rendered.as_str().is_empty() || !inside_root {
            return Err(Error::output_outside_project(display_path, rendered.as_str()));
        }
        Ok(rendered)
    }
}
