#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::user_store::user_store_url;
use crate::domain::enml::EnmlDocument;
use crate::domain::model::AuthToken;
use crate::domain::selection::NotebookPolicy;
use crate::utils::error::{QuickstartError, Result};
use crate::utils::validation::{validate_note_title, validate_url, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "sandbox.evernote.com";
pub const DEFAULT_CONFIG_PATH: &str = "config/auth.toml";
pub const DEFAULT_CLIENT_NAME: &str = "EDAM Quickstart (Rust)";
pub const DEFAULT_NOTE_TITLE: &str = "Test note from edam-quickstart";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub auth_token: Option<String>,
    pub host: Option<String>,
    pub user_store_url: Option<String>,
    pub notebook: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub output: OutputFormat,
}

/// Everything one run needs, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth_token: AuthToken,
    pub user_store_url: String,
    pub client_name: String,
    pub notebook_policy: NotebookPolicy,
    pub note_title: String,
    pub note_body: EnmlDocument,
    pub output: OutputFormat,
}

impl AppConfig {
    pub fn resolve(overrides: ConfigOverrides, file: Option<TomlConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let auth_token = overrides
            .auth_token
            .as_deref()
            .or_else(|| file.auth_token())
            .and_then(|token| AuthToken::new(token))
            .ok_or(QuickstartError::MissingCredential)?;

        let user_store_url = match overrides.user_store_url.or(file.user_store_url.clone()) {
            Some(url) => url,
            None => {
                let host = overrides
                    .host
                    .as_deref()
                    .or(file.host.as_deref())
                    .unwrap_or(DEFAULT_HOST);
                user_store_url(host)
            }
        };

        let notebook_policy = match overrides.notebook.as_deref().or_else(|| file.notebook()) {
            Some(name) => NotebookPolicy::Named(name.to_string()),
            None => NotebookPolicy::ServiceDefault,
        };

        let note_title = overrides
            .title
            .as_deref()
            .or_else(|| file.note_title())
            .unwrap_or(DEFAULT_NOTE_TITLE)
            .to_string();

        let note_body = overrides
            .body
            .as_deref()
            .or_else(|| file.note_body())
            .map(EnmlDocument::from_text)
            .unwrap_or_default();

        let config = Self {
            auth_token,
            user_store_url,
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            notebook_policy,
            note_title,
            note_body,
            output: overrides.output,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("user_store_url", &self.user_store_url)?;
        validate_note_title("note.title", &self.note_title)?;
        Ok(())
    }
}
