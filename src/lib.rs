pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{HttpNoteStoreConnector, NoteStoreClient, UserStoreClient};
pub use config::{AppConfig, ConfigOverrides, OutputFormat};
pub use core::session::QuickstartSession;
pub use utils::error::{QuickstartError, Result};
