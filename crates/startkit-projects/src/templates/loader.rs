//! Template tree loading from the embedded bundle or a directory.
//!
//! Enumeration only lists template files and their paths relative to the tree
//! root. Nothing is rendered or written here.

use super::{child_names, is_template_file, utf8_path};
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use std::collections::BTreeSet;
use walkdir::WalkDir;

/// Embedded aiohttp application template
#[derive(RustEmbed)]
#[folder = "template/"]
struct BundledTemplate;

/// A template file, addressed relative to its tree root
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateFile {
    pub relative: Utf8PathBuf,
}

/// Read-only source of template files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateTree {
    /// Template compiled into the binary
    Bundled,
    /// Template directory on disk
    Directory(Utf8PathBuf),
}

impl TemplateTree {
    /// The template bundled with startkit
    pub fn bundled() -> Self {
        Self::Bundled
    }

    /// Load templates from a directory (for testing/custom templates)
    pub fn from_dir(path: impl Into<Utf8PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_dir() {
            return Err(Error::template_dir_not_found(path.as_str()));
        }
        Ok(Self::Directory(path))
    }

    /// Human-readable location of a file in this tree, used in errors
    pub fn display_path(&self, file: &TemplateFile) -> String {
        match self {
            Self::Bundled => format!("bundled:{}", file.relative),
            Self::Directory(root) => root.join(&file.relative).to_string(),
        }
    }

    /// Names of the entries directly under the tree root
    pub fn top_level_names(&self) -> Result<BTreeSet<String>> {
        match self {
            Self::Bundled => Ok(BundledTemplate::iter()
                .filter_map(|path| path.split('/').next().map(str::to_string))
                .collect()),
            Self::Directory(root) => child_names(root),
        }
    }

    /// Every template file in the tree, sorted by relative path
    pub fn files(&self) -> Result<Vec<TemplateFile>> {
        let mut files: Vec<TemplateFile> = match self {
            Self::Bundled => BundledTemplate::iter()
                .map(|path| Utf8PathBuf::from(path.into_owned()))
                .filter(|relative| is_template_file(relative))
                .map(|relative| TemplateFile { relative })
                .collect(),
            Self::Directory(root) => Self::walk(root)?,
        };
        files.sort();
        Ok(files)
    }

    fn walk(root: &Utf8Path) -> Result<Vec<TemplateFile>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).min_depth(1).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = utf8_path(entry.path())?;
            if !is_template_file(&path) {
                continue;
            }

            let relative = path
                .strip_prefix(root)
                .map_err(|_| Error::invalid_path(path.as_str()))?
                .to_path_buf();
            files.push(TemplateFile { relative });
        }

        Ok(files)
    }

    /// Read the full text of a template file
    pub fn read(&self, file: &TemplateFile) -> Result<String> {
        match self {
            Self::Bundled => {
                let embedded = BundledTemplate::get(file.relative.as_str()).ok_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("bundled template missing: {}", file.relative),
                    )
                })?;
                String::from_utf8(embedded.data.into_owned())
                    .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
            }
            Self::Directory(root) => Ok(std::fs::read_to_string(root.join(&file.relative))?),
        }
    }
}

impl Default for TemplateTree {
    fn default() -> Self {
        Self::bundled()
    }
}
