//! # startkit-projects
//!
//! Project scaffolding library for the startkit CLI providing:
//! - Choice axes (template engine, session, database, example) as closed enums
//! - Template tree enumeration (bundled or from a directory)
//! - Tera rendering with per-file-type cleanup
//! - Collision-checked, never-overwriting project writes
//! - Generated `settings.yml`
//!
//! # Examples
//!
//! ## Start a project with the default choices
//!
//! ```no_run
//! use startkit_projects::{start_project, StartOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let report = start_project(StartOptions::new("/tmp/my-app", "my-app"))?;
//! println!("{} files generated", report.files_created());
//! # Ok(())
//! # }
//! ```
//!
//! ## Render into memory
//!
//! ```no_run
//! use startkit_projects::{Database, MemoryWriter, ProjectGenerator, StartOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = StartOptions::new("/tmp/my-app", "my-app").with_database(Database::PostgresRaw);
//! let mut writer = MemoryWriter::new();
//! ProjectGenerator::new(options)?.generate(&mut writer)?;
//! for path in writer.files().keys() {
//!     println!("{path}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cleanup;
pub mod context;
pub mod error;
pub mod generator;
pub mod options;
pub mod settings;
pub mod templates;
pub mod writer;

pub use error::{Error, ParseChoiceError, Result};
pub use generator::{start_project, GenerationReport, ProjectGenerator};
pub use options::{Choice, Database, Example, Session, StartOptions, TemplateEngine};
pub use writer::{FsWriter, MemoryWriter, ProjectWriter};
