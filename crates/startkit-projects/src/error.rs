//! Error types for startkit-projects

use thiserror::Error;

/// Result type alias using startkit-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project generation error types
#[derive(Error, Debug)]
pub enum Error {
    /// Destination already holds entries that the template tree would create
    #[error(
        "The path you supplied already has files/directories which would conflict with the new project: {}",
        .conflicts.join(", ")
    )]
    Conflict { conflicts: Vec<String> },

    /// Template failed to parse or render
    #[error("error in {path}")]
    TemplateRender {
        path: String,
        #[source]
        source: tera::Error,
    },

    /// Template directory override does not exist
    #[error("Template directory not found: {path}")]
    TemplateDirNotFound { path: String },

    /// Path is not valid UTF-8
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// Rendered template path would land outside the project directory
    #[error("{template} renders to '{path}', which is outside the project directory")]
    OutputOutsideProject { template: String, path: String },

    /// File about to be written already exists
    #[error("Refusing to overwrite existing file: {path}")]
    FileExists { path: String },

    /// YAML serialization error
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Directory traversal error
    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a conflict error, sorting the conflicting names
    pub fn conflict<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut conflicts: Vec<String> = names.into_iter().map(Into::into).collect();
        conflicts.sort();
        conflicts.dedup();
        Self::Conflict { conflicts }
    }

    /// Create an error for a rendered path that leaves the project directory
    pub fn output_outside_project(template: impl Into<String>, path: impl Into<String>) -> Self {
        Self::OutputOutsideProject {
            template: template.into(),
            path: path.into(),
        }
    }

    /// Create a template render error for the given template path
    pub fn template_render(path: impl Into<String>, source: tera::Error) -> Self {
        Self::TemplateRender {
            path: path.into(),
            source,
        }
    }

    /// Create a template directory not found error
    pub fn template_dir_not_found(path: impl Into<String>) -> Self {
        Self::TemplateDirNotFound { path: path.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create a file exists error
    pub fn file_exists(path: impl Into<String>) -> Self {
        Self::FileExists { path: path.into() }
    }
}

/// A choice string that is not a member of its axis
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {axis} '{value}', expected one of: {}", .allowed.join(", "))]
pub struct ParseChoiceError {
    pub axis: &'static str,
    pub value: String,
    pub allowed: Vec<&'static str>,
}
