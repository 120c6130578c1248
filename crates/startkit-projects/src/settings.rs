//! Generated `settings.yml` for the new project

use crate::error::Result;
use crate::options::{Database, Example};
use serde::Serialize;

/// File name of the generated settings, at the project root
pub const SETTINGS_FILE: &str = "settings.yml";

/// Comment line written above the settings mapping
pub const SETTINGS_HEADER: &str =
    "# App settings go here, they're validated in app.main.load_settings\n";

/// Message store used by the message board example without a database
pub const MESSAGE_FILE: &str = "messages.txt";

/// Application settings derived from the chosen database and example
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_file: Option<String>,
}

impl Settings {
    /// Settings for a database/example combination
    pub fn for_choices(database: Database, example: Example) -> Self {
        let mut settings = Self::default();
        match (database, example) {
            (Database::None, Example::MessageBoard) => {
                settings.message_file = Some(MESSAGE_FILE.to_string());
            }
            (Database::None, Example::None) => {}
            // TODO: emit connection settings for the postgres backends
            (Database::PostgresSqlalchemy | Database::PostgresRaw, _) => {}
        }
        settings
    }

    pub fn is_empty(&self) -> bool {
        self.message_file.is_none()
    }

    /// Header comment followed by block-style YAML
    pub fn to_yaml(&self) -> Result<String> {
        let body = serde_yaml_ng::to_string(self)?;
        Ok(format!("{SETTINGS_HEADER}{body}"))
    }
}
