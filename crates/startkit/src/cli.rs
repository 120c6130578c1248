//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use startkit_projects::{Database, Example, Session, TemplateEngine};

/// startkit - Create new aiohttp projects from a template
#[derive(Parser, Debug)]
#[command(name = "startkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new aiohttp project
    Start(StartArgs),
}

#[derive(Args, Debug)]
pub struct StartArgs {
    /// Directory to create the project in, created if missing
    pub path: Utf8PathBuf,

    /// Project name (default: last component of PATH)
    pub name: Option<String>,

    /// Template engine: none, jinja2
    #[arg(long, default_value_t = TemplateEngine::default())]
    pub template_engine: TemplateEngine,

    /// Session backend: none, secure, vanilla, redis
    #[arg(long, default_value_t = Session::default())]
    pub session: Session,

    /// Database: none, postgres-sqlalchemy, postgres-raw
    #[arg(long, default_value_t = Database::default())]
    pub database: Database,

    /// Example app: none, message-board
    #[arg(long, default_value_t = Example::default())]
    pub example: Example,

    /// Render from this template directory instead of the bundled one
    #[arg(long, env = "STARTKIT_TEMPLATE_DIR")]
    pub template_dir: Option<Utf8PathBuf>,

    /// List the files that would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
