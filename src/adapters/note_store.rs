use crate::adapters::codec::{
    decode_reply, encode_call, read_note, read_notebook_list, read_result, write_note_draft,
    write_string_field,
};
use crate::adapters::http::THttpTransport;
use crate::domain::model::{AuthToken, Note, NoteDraft, Notebook};
use crate::domain::ports::{NoteStore, NoteStoreConnector};
use crate::utils::error::Result;
use async_trait::async_trait;
use thrift::protocol::{TFieldIdentifier, TType};

pub struct NoteStoreClient {
    transport: THttpTransport,
}

impl NoteStoreClient {
    pub fn new(transport: THttpTransport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl NoteStore for NoteStoreClient {
    async fn list_notebooks(&self, token: &AuthToken) -> Result<Vec<Notebook>> {
        const METHOD: &str = "listNotebooks";
        let sequence = self.transport.next_sequence();
        let request = encode_call(METHOD, sequence, |o| {
            write_string_field(o, "authenticationToken", 1, token.as_str())
        })?;

        let reply = self.transport.round_trip(request).await?;
        decode_reply(&reply, METHOD, sequence, |i| {
            read_result(i, METHOD, TType::List, read_notebook_list)
        })
    }

    async fn create_note(&self, token: &AuthToken, note: &NoteDraft) -> Result<Note> {
        const METHOD: &str = "createNote";
        let sequence = self.transport.next_sequence();
        let request = encode_call(METHOD, sequence, |o| {
            write_string_field(o, "authenticationToken", 1, token.as_str())?;
            o.write_field_begin(&TFieldIdentifier::new("note", TType::Struct, 2))?;
            write_note_draft(o, note)?;
            o.write_field_end()
        })?;

        let reply = self.transport.round_trip(request).await?;
        decode_reply(&reply, METHOD, sequence, |i| {
            read_result(i, METHOD, TType::Struct, read_note)
        })
    }

    fn close(self) {
        self.transport.close();
    }
}

/// Opens NoteStore clients over HTTP.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpNoteStoreConnector;

impl NoteStoreConnector for HttpNoteStoreConnector {
    type Store = NoteStoreClient;

    fn connect(&self, note_store_url: &str) -> Result<NoteStoreClient> {
        Ok(NoteStoreClient::new(THttpTransport::open(note_store_url)?))
    }
}
