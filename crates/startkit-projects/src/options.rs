//! Choice axes and start options for project generation
//!
//! Each axis is a closed enum with a `None` member. Strings are only accepted
//! through [`FromStr`], which rejects anything outside the axis.

use crate::error::ParseChoiceError;
use camino::Utf8PathBuf;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Behaviour shared by every choice axis
pub trait Choice: Copy + Sized + 'static {
    /// Axis name as used in the render context and in log output
    const AXIS: &'static str;

    /// All members of the axis, in display order
    fn all() -> &'static [Self];

    /// Get the string representation
    fn as_str(&self) -> &'static str;

    /// Allowed string values for this axis
    fn allowed() -> Vec<&'static str> {
        Self::all().iter().map(Choice::as_str).collect()
    }

    /// Parse a member from its string representation
    fn parse_choice(s: &str) -> Result<Self, ParseChoiceError> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseChoiceError {
                axis: Self::AXIS,
                value: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}

macro_rules! impl_choice_traits {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as Choice>::parse_choice(s)
            }
        }
    };
}

/// Template engine used by the generated application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateEngine {
    None,
    #[default]
    Jinja2,
}

/// Flags for the template engine axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateEngineFlags {
    pub is_none: bool,
    pub is_jinja2: bool,
}

impl TemplateEngine {
    pub fn flags(&self) -> TemplateEngineFlags {
        match self {
            Self::None => TemplateEngineFlags {
                is_none: true,
                is_jinja2: false,
            },
            Self::Jinja2 => TemplateEngineFlags {
                is_none: false,
                is_jinja2: true,
            },
        }
    }
}

impl Choice for TemplateEngine {
    const AXIS: &'static str = "template_engine";

    fn all() -> &'static [Self] {
        &[Self::None, Self::Jinja2]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Jinja2 => "jinja2",
        }
    }
}

impl_choice_traits!(TemplateEngine);

/// Session backend of the generated application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Session {
    None,
    /// Encrypted cookie sessions
    #[default]
    Secure,
    /// Plain cookie sessions
    Vanilla,
    /// Redis-backed sessions
    Redis,
}

/// Flags for the session axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionFlags {
    pub is_none: bool,
    pub is_secure: bool,
    pub is_vanilla: bool,
    pub is_redis: bool,
}

impl Session {
    pub fn flags(&self) -> SessionFlags {
        let mut flags = SessionFlags {
            is_none: false,
            is_secure: false,
            is_vanilla: false,
            is_redis: false,
        };
        match self {
            Self::None => flags.is_none = true,
            Self::Secure => flags.is_secure = true,
            Self::Vanilla => flags.is_vanilla = true,
            Self::Redis => flags.is_redis = true,
        }
        flags
    }
}

impl Choice for Session {
    const AXIS: &'static str = "session";

    fn all() -> &'static [Self] {
        &[Self::None, Self::Secure, Self::Vanilla, Self::Redis]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Secure => "secure",
            Self::Vanilla => "vanilla",
            Self::Redis => "redis",
        }
    }
}

impl_choice_traits!(Session);

/// Database layer of the generated application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Database {
    #[default]
    None,
    /// PostgreSQL through SQLAlchemy
    PostgresSqlalchemy,
    /// PostgreSQL through raw asyncpg queries
    PostgresRaw,
}

/// Flags for the database axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatabaseFlags {
    pub is_none: bool,
    pub is_postgres_sqlalchemy: bool,
    pub is_postgres_raw: bool,
}

impl Database {
    pub fn flags(&self) -> DatabaseFlags {
        let (is_none, is_postgres_sqlalchemy, is_postgres_raw) = match self {
            Self::None => (true, false, false),
            Self::PostgresSqlalchemy => (false, true, false),
            Self::PostgresRaw => (false, false, true),
        };
        DatabaseFlags {
            is_none,
            is_postgres_sqlalchemy,
            is_postgres_raw,
        }
    }
}

impl Choice for Database {
    const AXIS: &'static str = "database";

    fn all() -> &'static [Self] {
        &[Self::None, Self::PostgresSqlalchemy, Self::PostgresRaw]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PostgresSqlalchemy => "postgres-sqlalchemy",
            Self::PostgresRaw => "postgres-raw",
        }
    }
}

impl_choice_traits!(Database);

/// Example application bundled into the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Example {
    None,
    #[default]
    MessageBoard,
}

/// Flags for the example axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleFlags {
    pub is_none: bool,
    pub is_message_board: bool,
}

impl Example {
    pub fn flags(&self) -> ExampleFlags {
        match self {
            Self::None => ExampleFlags {
                is_none: true,
                is_message_board: false,
            },
            Self::MessageBoard => ExampleFlags {
                is_none: false,
                is_message_board: true,
            },
        }
    }
}

impl Choice for Example {
    const AXIS: &'static str = "example";

    fn all() -> &'static [Self] {
        &[Self::None, Self::MessageBoard]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::MessageBoard => "message-board",
        }
    }
}

impl_choice_traits!(Example);

/// Everything needed to start a new project
#[derive(Debug, Clone)]
pub struct StartOptions {
    /// Destination directory; created if missing
    pub path: Utf8PathBuf,
    /// Project name, substituted as `name` in templates
    pub name: String,
    pub template_engine: TemplateEngine,
    pub session: Session,
    pub database: Database,
    pub example: Example,
    /// Render from this directory instead of the bundled template tree
    pub template_dir: Option<Utf8PathBuf>,
}

impl StartOptions {
    /// Create options with the default choice on every axis
    pub fn new(path: impl Into<Utf8PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            template_engine: TemplateEngine::default(),
            session: Session::default(),
            database: Database::default(),
            example: Example::default(),
            template_dir: None,
        }
    }

    pub fn with_template_engine(mut self, template_engine: TemplateEngine) -> Self {
        self.template_engine = template_engine;
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    pub fn with_example(mut self, example: Example) -> Self {
        self.example = example;
        self
    }

    /// Use a template tree on disk instead of the bundled one
    pub fn with_template_dir(mut self, template_dir: impl Into<Utf8PathBuf>) -> Self {
        self.template_dir = Some(template_dir.into());
        self
    }

    /// Axis name and selected value pairs, in display order
    pub fn choices(&self) -> [(&'static str, &'static str); 4] {
        [
            (TemplateEngine::AXIS, self.template_engine.as_str()),
            (Session::AXIS, self.session.as_str()),
            (Database::AXIS, self.database.as_str()),
            (Example::AXIS, self.example.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flag name derived from a choice value
    fn flag_name(value: &str) -> String {
        format!("is_{}", value.replace('-', "_"))
    }

    fn flag_keys<T: Serialize>(flags: &T) -> Vec<(String, bool)> {
        let value = serde_yaml_ng::to_value(flags).unwrap();
        value
            .as_mapping()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.as_str().unwrap().to_string(), v.as_bool().unwrap()))
            .collect()
    }

    fn assert_only_selected<C: Choice, T: Serialize>(selected: C, flags: &T) {
        let keys = flag_keys(flags);
        let expected: Vec<String> = C::all().iter().map(|c| flag_name(c.as_str())).collect();
        let names: Vec<String> = keys.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(names, expected, "flag names for {}", C::AXIS);

        for (name, value) in keys {
            assert_eq!(value, name == flag_name(selected.as_str()), "{}.{}", C::AXIS, name);
        }
    }

    #[test]
    fn test_defaults() {
        let options = StartOptions::new("/tmp/demo", "demo");
        assert_eq!(options.template_engine, TemplateEngine::Jinja2);
        assert_eq!(options.session, Session::Secure);
        assert_eq!(options.database, Database::None);
        assert_eq!(options.example, Example::MessageBoard);
        assert!(options.template_dir.is_none());
    }

    #[test]
    fn test_round_trip_strings() {
        for engine in TemplateEngine::all() {
            assert_eq!(engine.to_string().parse::<TemplateEngine>().unwrap(), *engine);
        }
        for session in Session::all() {
            assert_eq!(session.to_string().parse::<Session>().unwrap(), *session);
        }
        for database in Database::all() {
            assert_eq!(database.to_string().parse::<Database>().unwrap(), *database);
        }
        for example in Example::all() {
            assert_eq!(example.to_string().parse::<Example>().unwrap(), *example);
        }
    }

    #[test]
    fn test_invalid_choice_is_rejected() {
        let err = "mysql".parse::<Database>().unwrap_err();
        assert_eq!(err.axis, "database");
        assert_eq!(err.value, "mysql");
        assert_eq!(err.allowed, vec!["none", "postgres-sqlalchemy", "postgres-raw"]);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Jinja2".parse::<TemplateEngine>().is_err());
        assert!("message_board".parse::<Example>().is_err());
    }

    #[test]
    fn test_flags_select_exactly_one_member() {
        for engine in TemplateEngine::all() {
            assert_only_selected(*engine, &engine.flags());
        }
        for session in Session::all() {
            assert_only_selected(*session, &session.flags());
        }
        for database in Database::all() {
            assert_only_selected(*database, &database.flags());
        }
        for example in Example::all() {
            assert_only_selected(*example, &example.flags());
        }
    }

    #[test]
    fn test_choices_table_order() {
        let options = StartOptions::new("/tmp/demo", "demo")
            .with_database(Database::PostgresRaw)
            .with_example(Example::None);
        assert_eq!(
            options.choices(),
            [
                ("template_engine", "jinja2"),
                ("session", "secure"),
                ("database", "postgres-raw"),
                ("example", "none"),
            ]
        );
    }
}
