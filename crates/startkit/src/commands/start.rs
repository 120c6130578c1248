//! Start command

use crate::cli::StartArgs;
use crate::output;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use startkit_projects::{
    FsWriter, GenerationReport, MemoryWriter, ProjectGenerator, ProjectWriter, StartOptions,
};
use tracing::debug;

pub fn run(args: StartArgs) -> Result<()> {
    let dry_run = args.dry_run;
    let options = start_options(args)?;
    let name = options.name.clone();

    let generator = ProjectGenerator::new(options).context("Failed to prepare project")?;
    let root = generator.project_root().to_path_buf();

    if dry_run {
        let mut writer = MemoryWriter::new();
        let report = generate(generator, &mut writer)?;
        output::header(&format!("Dry run: {} would be created at {}", name, root));
        for path in writer.files().keys() {
            output::item(relative_to(path, &root).as_str());
        }
        output::info(&format!("{} files would be generated", report.files_created()));
    } else {
        let report = generate(generator, &mut FsWriter::new())?;
        output::success(&format!(
            "Created project {} at {} ({} files)",
            name,
            root,
            report.files_created()
        ));
        output::kv("Next", &format!("cd {} && pip install -r requirements.txt", root));
    }

    Ok(())
}

fn generate<W: ProjectWriter>(
    generator: ProjectGenerator,
    writer: &mut W,
) -> Result<GenerationReport> {
    generator
        .generate(writer)
        .context("Failed to generate project")
}

/// Build library options from parsed arguments
fn start_options(args: StartArgs) -> Result<StartOptions> {
    let name = match args.name {
        Some(name) => name,
        None => default_name(&args.path)?,
    };

    let mut options = StartOptions::new(args.path, name)
        .with_template_engine(args.template_engine)
        .with_session(args.session)
        .with_database(args.database)
        .with_example(args.example);
    if let Some(dir) = args.template_dir {
        options = options.with_template_dir(dir);
    }
    debug!("Start options: {:?}", options);
    Ok(options)
}

/// Final component of the destination, resolving `.` and `..` against the cwd
fn default_name(path: &Utf8Path) -> Result<String> {
    if let Some(name) = path.file_name() {
        return Ok(name.to_string());
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let absolute = Utf8PathBuf::from_path_buf(cwd.join(path))
        .map_err(|p| anyhow::anyhow!("Path is not valid UTF-8: {}", p.display()))?;
    let normalized = absolute
        .canonicalize_utf8()
        .with_context(|| format!("Cannot infer a project name from {path}, pass NAME"))?;
    normalized
        .file_name()
        .map(str::to_string)
        .with_context(|| format!("Cannot infer a project name from {path}, pass NAME"))
}

fn relative_to<'a>(path: &'a Utf8Path, root: &Utf8Path) -> &'a Utf8Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::cli::{Cli, Commands};
    use startkit_projects::{Session, TemplateEngine};

    fn start_args(args: &[&str]) -> StartArgs {
        let cli = Cli::try_parse_from(std::iter::once("startkit").chain(args.iter().copied()))
            .unwrap();
        match cli.command {
            Commands::Start(args) => args,
        }
    }

    #[test]
    fn test_default_name_is_last_component() {
        assert_eq!(default_name(Utf8Path::new("projects/demo")).unwrap(), "demo");
        assert_eq!(default_name(Utf8Path::new("/tmp/my-app/")).unwrap(), "my-app");
    }

    #[test]
    fn test_default_name_resolves_dot() {
        let cwd = std::env::current_dir().unwrap();
        let expected = cwd.file_name().unwrap().to_str().unwrap();
        assert_eq!(default_name(Utf8Path::new(".")).unwrap(), expected);
    }

    #[test]
    fn test_start_options_from_args() {
        let options = start_options(start_args(&[
            "start",
            "out/demo",
            "--template-engine",
            "none",
            "--session",
            "vanilla",
            "--template-dir",
            "/srv/templates",
        ]))
        .unwrap();

        assert_eq!(options.name, "demo");
        assert_eq!(options.path, Utf8PathBuf::from("out/demo"));
        assert_eq!(options.template_engine, TemplateEngine::None);
        assert_eq!(options.session, Session::Vanilla);
        assert_eq!(
            options.template_dir,
            Some(Utf8PathBuf::from("/srv/templates"))
        );
    }

    #[test]
    fn test_explicit_name_wins() {
        let options = start_options(start_args(&["start", "out/demo", "web"])).unwrap();
        assert_eq!(options.name, "web");
    }

    #[test]
    fn test_relative_to() {
        let root = Utf8Path::new("/p/demo");
        assert_eq!(
            relative_to(Utf8Path::new("/p/demo/app/main.py"), root),
            Utf8Path::new("app/main.py")
        );
        assert_eq!(
            relative_to(Utf8Path::new("/elsewhere"), root),
            Utf8Path::new("/elsewhere")
        );
    }
}
