//! Template tree sources for project scaffolding.
//!
//! A template tree is either the bundled aiohttp application (compiled into
//! the binary) or a directory on disk. Either way it is read-only and is
//! enumerated before anything is rendered.
//!
//! # Architecture
//!
//! - `loader`: enumerate template files and read their contents
//! - `renderer`: render file contents and relative paths with Tera
//!
//! # Template files
//!
//! Only files whose name has a non-empty extension are templates. Files such
//! as `Makefile`, `LICENSE` or `.gitignore` are never rendered, copied or
//! counted.
//!
//! ```no_run
//! use startkit_projects::templates::TemplateTree;
//!
//! let tree = TemplateTree::bundled();
//! for file in tree.files().unwrap() {
//!     println!("{}", file.relative);
//! }
//! ```

pub mod loader;
pub mod renderer;

pub use loader::{TemplateFile, TemplateTree};
pub use renderer::TemplateRenderer;

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeSet;

/// Whether a file in a template tree is rendered at all
pub fn is_template_file(path: &Utf8Path) -> bool {
    path.extension().is_some_and(|ext| !ext.is_empty())
}

/// Names of the immediate children of a directory
pub(crate) fn child_names(dir: &Utf8Path) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|raw| Error::invalid_path(format!("{}/{}", dir, raw.to_string_lossy())))?;
        names.insert(name);
    }
    Ok(names)
}

/// Convert a std path into a UTF-8 path
pub(crate) fn utf8_path(path: &std::path::Path) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .map_err(|p| Error::invalid_path(p.to_string_lossy()))
}
