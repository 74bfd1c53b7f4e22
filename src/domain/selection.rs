use crate::domain::model::Notebook;
use crate::utils::error::{QuickstartError, Result};

/// Which notebook receives the new note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NotebookPolicy {
    /// The notebook flagged `defaultNotebook`, else the first one listed.
    #[default]
    ServiceDefault,
    /// First notebook with exactly this name.
    Named(String),
}

impl NotebookPolicy {
    /// `Ok(None)` means the listing was empty and the service picks the notebook.
    pub fn select<'a>(&self, notebooks: &'a [Notebook]) -> Result<Option<&'a Notebook>> {
        match self {
            Self::ServiceDefault => Ok(notebooks
                .iter()
                .find(|notebook| notebook.default_notebook)
                .or_else(|| notebooks.first())),
            Self::Named(name) => notebooks
                .iter()
                .find(|notebook| notebook.name == *name)
                .map(Some)
                .ok_or_else(|| QuickstartError::NotebookNotFound { name: name.clone() }),
        }
    }
}
