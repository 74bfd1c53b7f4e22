use crate::config::{AppConfig, OutputFormat};
use crate::core::report;
use crate::domain::model::{Note, NoteDraft, Notebook, RunReport};
use crate::domain::ports::{NoteStore, NoteStoreConnector, UserStore};
use crate::utils::error::{QuickstartError, Result};
use std::io::Write;

/// One quickstart run: version check, NoteStore lookup, notebook listing and
/// note creation, strictly in that order.
pub struct QuickstartSession<'a, U: UserStore, C: NoteStoreConnector> {
    config: &'a AppConfig,
    user_store: U,
    connector: C,
}

impl<'a, U: UserStore, C: NoteStoreConnector> QuickstartSession<'a, U, C> {
    pub fn new(config: &'a AppConfig, user_store: U, connector: C) -> Self {
        Self {
            config,
            user_store,
            connector,
        }
    }

    /// Consumes the session; both transports are closed before returning,
    /// whether or not the run succeeded.
    pub async fn run<W: Write>(self, out: &mut W) -> Result<RunReport> {
        let Self {
            config,
            user_store,
            connector,
        } = self;

        let resolved = resolve_note_store_url(config, &user_store, out).await;
        user_store.close();
        let note_store_url = resolved?;

        let note_store = connector.connect(&note_store_url)?;
        let outcome = create_note(config, &note_store, out).await;
        note_store.close();
        let (notebooks, selected_notebook, created_note) = outcome?;

        let report = RunReport {
            version_ok: true,
            note_store_url,
            notebooks,
            selected_notebook,
            created_note,
        };

        match config.output {
            OutputFormat::Text => report::write_created(out, &report.created_note)?,
            OutputFormat::Json => report::write_json(out, &report)?,
        }
        Ok(report)
    }
}

async fn resolve_note_store_url<U: UserStore, W: Write>(
    config: &AppConfig,
    user_store: &U,
    out: &mut W,
) -> Result<String> {
    let (major, minor) = (
        crate::adapters::EDAM_VERSION_MAJOR,
        crate::adapters::EDAM_VERSION_MINOR,
    );
    tracing::info!(
        "Checking EDAM version {}.{} at {}",
        major,
        minor,
        config.user_store_url
    );
    let version_ok = user_store
        .check_version(&config.client_name, major, minor)
        .await?;
    if config.output == OutputFormat::Text {
        report::write_version_check(out, version_ok)?;
    }
    if !version_ok {
        tracing::error!("❌ Service rejected EDAM version {}.{}", major, minor);
        return Err(QuickstartError::VersionMismatch {
            client_name: config.client_name.clone(),
            major,
            minor,
        });
    }

    let url = user_store.get_note_store_url(&config.auth_token).await?;
    tracing::info!("NoteStore URL: {}", url);
    Ok(url)
}

async fn create_note<N: NoteStore, W: Write>(
    config: &AppConfig,
    note_store: &N,
    out: &mut W,
) -> Result<(Vec<Notebook>, Option<Notebook>, Note)> {
    let notebooks = note_store.list_notebooks(&config.auth_token).await?;
    tracing::info!("Listed {} notebooks", notebooks.len());

    let selected = config.notebook_policy.select(&notebooks)?.cloned();
    if selected.is_none() {
        tracing::warn!("Account has no notebooks, leaving notebook choice to the service");
    }
    if config.output == OutputFormat::Text {
        report::write_notebooks(out, &notebooks)?;
        report::write_selection(out, selected.as_ref())?;
    }

    let draft = NoteDraft {
        title: config.note_title.clone(),
        content: config.note_body.render(),
        notebook_guid: selected.as_ref().and_then(|notebook| notebook.guid.clone()),
    };
    tracing::debug!("Creating note '{}'", draft.title);
    let created = note_store.create_note(&config.auth_token, &draft).await?;
    tracing::info!(
        "✅ Created note {}",
        created.guid.as_deref().unwrap_or("(no guid)")
    );

    Ok((notebooks, selected, created))
}
