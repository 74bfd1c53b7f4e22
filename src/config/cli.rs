use crate::config::{ConfigOverrides, OutputFormat, DEFAULT_CONFIG_PATH};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "edam-quickstart")]
#[command(about = "List your notebooks and create a test note through the EDAM API")]
pub struct CliConfig {
    /// Path to the TOML auth file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Developer token (overrides auth_token in the config file)
    #[arg(long)]
    pub auth_token: Option<String>,

    /// Service host, e.g. sandbox.evernote.com or www.evernote.com
    #[arg(long)]
    pub host: Option<String>,

    /// Full UserStore URL; takes precedence over --host
    #[arg(long)]
    pub user_store_url: Option<String>,

    /// Create the note in the notebook with this name
    #[arg(long)]
    pub notebook: Option<String>,

    /// Title of the created note
    #[arg(long)]
    pub title: Option<String>,

    /// Plain-text body of the created note
    #[arg(long)]
    pub body: Option<String>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            auth_token: self.auth_token.clone(),
            host: self.host.clone(),
            user_store_url: self.user_store_url.clone(),
            notebook: self.notebook.clone(),
            title: self.title.clone(),
            body: self.body.clone(),
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}
