use crate::domain::model::{AuthToken, Note, NoteDraft, Notebook};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The two UserStore calls the quickstart needs.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn check_version(&self, client_name: &str, major: i16, minor: i16) -> Result<bool>;
    async fn get_note_store_url(&self, token: &AuthToken) -> Result<String>;

    /// Releases the underlying transport.
    fn close(self)
    where
        Self: Sized;
}

/// The two NoteStore calls the quickstart needs.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn list_notebooks(&self, token: &AuthToken) -> Result<Vec<Notebook>>;
    async fn create_note(&self, token: &AuthToken, note: &NoteDraft) -> Result<Note>;

    fn close(self)
    where
        Self: Sized;
}

/// Opens a NoteStore once its per-account URL is known.
pub trait NoteStoreConnector: Send + Sync {
    type Store: NoteStore;

    fn connect(&self, note_store_url: &str) -> Result<Self::Store>;
}
