//! Project generation from a template tree
//!
//! A single synchronous pass: check for collisions, render every template
//! file, drop the ones that render empty, clean up and write the rest, then
//! write `settings.yml`. Nothing is rolled back if a later file fails.

use crate::cleanup::{postprocess, strip_rendered, FileKind};
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::options::StartOptions;
use crate::settings::{Settings, SETTINGS_FILE};
use crate::templates::{child_names, utf8_path, TemplateFile, TemplateRenderer, TemplateTree};
use crate::writer::{FsWriter, ProjectWriter};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Outcome of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Absolute destination directory
    pub project_root: Utf8PathBuf,
    /// Files written, settings file included, in write order
    pub created: Vec<Utf8PathBuf>,
}

impl GenerationReport {
    pub fn files_created(&self) -> usize {
        self.created.len()
    }
}

/// Generate a project on disk
///
/// Equivalent to `ProjectGenerator::new(options)?.generate(&mut FsWriter::new())`.
pub fn start_project(options: StartOptions) -> Result<GenerationReport> {
    ProjectGenerator::new(options)?.generate(&mut FsWriter::new())
}

/// Renders a template tree into a new project directory
#[derive(Debug)]
pub struct ProjectGenerator {
    options: StartOptions,
    project_root: Utf8PathBuf,
    tree: TemplateTree,
    renderer: TemplateRenderer,
    created: Vec<Utf8PathBuf>,
}

impl ProjectGenerator {
    /// Prepare a generator; nothing is read from or written to the destination yet
    pub fn new(options: StartOptions) -> Result<Self> {
        let project_root = resolve_destination(&options.path)?;
        let tree = match &options.template_dir {
            Some(dir) => TemplateTree::from_dir(dir.clone())?,
            None => TemplateTree::bundled(),
        };
        let renderer = TemplateRenderer::new(&RenderContext::new(&options))?;

        Ok(Self {
            options,
            project_root,
            tree,
            renderer,
            created: Vec::new(),
        })
    }

    pub fn project_root(&self) -> &Utf8Path {
        &self.project_root
    }

    pub fn tree(&self) -> &TemplateTree {
        &self.tree
    }

    /// Run the whole generation against `writer`
    pub fn generate<W: ProjectWriter>(mut self, writer: &mut W) -> Result<GenerationReport> {
        self.check_conflicts()?;
        self.log_start();

        for file in self.tree.files()? {
            self.generate_file(&file, writer)?;
        }
        self.generate_settings(writer)?;

        info!("project created, {} files generated", self.created.len());
        Ok(GenerationReport {
            project_root: self.project_root,
            created: self.created,
        })
    }

    /// Fail if the destination already holds a top-level template entry
    ///
    /// Names are compared as they will be written, after path rendering.
    fn check_conflicts(&self) -> Result<()> {
        let incoming = self.rendered_top_level_names()?;
        if !self.project_root.exists() {
            return Ok(());
        }

        let existing = child_names(&self.project_root)?;
        let conflicts: Vec<&String> = existing.intersection(&incoming).collect();
        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(Error::conflict(conflicts.into_iter().cloned()))
        }
    }

    fn rendered_top_level_names(&self) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for name in self.tree.top_level_names()? {
            let entry = TemplateFile {
                relative: Utf8PathBuf::from(name),
            };
            let rendered = self
                .renderer
                .render_path(&entry.relative, &self.tree.display_path(&entry))?;
            if let Some(first) = rendered.components().next() {
                names.insert(first.as_str().to_string());
            }
        }
        Ok(names)
    }

    fn log_start(&self) {
        let display_path = std::env::current_dir()
            .ok()
            .and_then(|cwd| Utf8PathBuf::from_path_buf(cwd).ok())
            .and_then(|cwd| {
                self.project_root
                    .strip_prefix(&cwd)
                    .ok()
                    .map(Utf8Path::to_path_buf)
            })
            .unwrap_or_else(|| self.project_root.clone());
        info!(
            "Starting new aiohttp project \"{}\" at {}",
            self.options.name, display_path
        );

        let table: Vec<String> = self
            .options
            .choices()
            .iter()
            .map(|(axis, value)| format!("    {axis}: {value}"))
            .collect();
        info!("config:\n{}", table.join("\n"));
    }

    fn generate_file<W: ProjectWriter>(&mut self, file: &TemplateFile, writer: &mut W) -> Result<()> {
        let display_path = self.tree.display_path(file);
        let source = self.tree.read(file)?;
        let rendered = self
            .renderer
            .render(file.relative.as_str(), &display_path, &source)?;
        let text = strip_rendered(&rendered);

        let relative = self.renderer.render_path(&file.relative, &display_path)?;
        let new_path = self.project_root.join(&relative);
        if text.is_empty() {
            debug!("not creating {}, as it would be empty", new_path);
            return Ok(());
        }
        debug!("creating {}...", new_path);

        let text = postprocess(FileKind::of(&relative), text);
        writer.write_file(&new_path, &text)?;
        self.created.push(new_path);
        Ok(())
    }

    fn generate_settings<W: ProjectWriter>(&mut self, writer: &mut W) -> Result<()> {
        debug!("creating {}...", SETTINGS_FILE);
        let settings = Settings::for_choices(self.options.database, self.options.example);
        let path = self.project_root.join(SETTINGS_FILE);
        writer.write_file(&path, &settings.to_yaml()?)?;
        self.created.push(path);
        Ok(())
    }
}

/// Absolute destination path; the directory need not exist
fn resolve_destination(path: &Utf8Path) -> Result<Utf8PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = utf8_path(&std::env::current_dir()?)?;
    Ok(cwd.join(path))
}
