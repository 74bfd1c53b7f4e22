// Adapters layer: EDAM store clients over Thrift/HTTP.

pub(crate) mod codec;
pub mod http;
pub mod note_store;
pub mod user_store;

pub use note_store::{HttpNoteStoreConnector, NoteStoreClient};
pub use user_store::{UserStoreClient, EDAM_VERSION_MAJOR, EDAM_VERSION_MINOR};
