pub mod report;
pub mod session;

pub use crate::domain::model::{Note, NoteDraft, Notebook, RunReport};
pub use crate::domain::ports::{NoteStore, NoteStoreConnector, UserStore};
pub use crate::utils::error::Result;
pub use session::QuickstartSession;
