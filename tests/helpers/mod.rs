#![allow(dead_code)]

use async_trait::async_trait;
use edam_quickstart::config::{AppConfig, ConfigOverrides};
use edam_quickstart::core::{Note, NoteDraft, NoteStore, NoteStoreConnector, Notebook, UserStore};
use edam_quickstart::domain::model::AuthToken;
use edam_quickstart::Result;
use std::sync::{Arc, Mutex};
use thrift::protocol::{
    TBinaryOutputProtocol, TFieldIdentifier, TListIdentifier, TMapIdentifier, TMessageIdentifier, TMessageType,
    TOutputProtocol, TStructIdentifier, TType,
};

pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

pub fn test_config() -> AppConfig {
    let overrides = ConfigOverrides {
        auth_token: Some("S=s1:U=test".to_string()),
        ..Default::default()
    };
    AppConfig::resolve(overrides, None).unwrap()
}

pub fn notebook(guid: &str, name: &str) -> Notebook {
    Notebook {
        guid: Some(guid.to_string()),
        name: name.to_string(),
        default_notebook: false,
        stack: None,
    }
}

pub struct MockUserStore {
    pub version_ok: bool,
    pub note_store_url: String,
    pub log: CallLog,
}

impl MockUserStore {
    pub fn new(version_ok: bool, log: CallLog) -> Self {
        Self {
            version_ok,
            note_store_url: "https://example.com/shard/s1/notestore".to_string(),
            log,
        }
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn check_version(&self, client_name: &str, major: i16, minor: i16) -> Result<bool> {
        self.log
            .lock()
            .unwrap()
            .push(format!("checkVersion({}, {}, {})", client_name, major, minor));
        Ok(self.version_ok)
    }

    async fn get_note_store_url(&self, _token: &AuthToken) -> Result<String> {
        self.log.lock().unwrap().push("getNoteStoreUrl".to_string());
        Ok(self.note_store_url.clone())
    }

    fn close(self) {
        self.log.lock().unwrap().push("closeUserStore".to_string());
    }
}

pub struct MockNoteStore {
    notebooks: Vec<Notebook>,
    created_guid: String,
    drafts: Arc<Mutex<Vec<NoteDraft>>>,
    log: CallLog,
}

#[async_trait]
impl NoteStore for MockNoteStore {
    async fn list_notebooks(&self, _token: &AuthToken) -> Result<Vec<Notebook>> {
        self.log.lock().unwrap().push("listNotebooks".to_string());
        Ok(self.notebooks.clone())
    }

    async fn create_note(&self, _token: &AuthToken, note: &NoteDraft) -> Result<Note> {
        self.log.lock().unwrap().push("createNote".to_string());
        self.drafts.lock().unwrap().push(note.clone());
        Ok(Note {
            guid: Some(self.created_guid.clone()),
            title: Some(note.title.clone()),
            notebook_guid: note.notebook_guid.clone(),
            ..Default::default()
        })
    }

    fn close(self) {
        self.log.lock().unwrap().push("closeNoteStore".to_string());
    }
}

/// Hands out `MockNoteStore`s sharing one call log and draft list.
pub struct MockConnector {
    pub notebooks: Vec<Notebook>,
    pub created_guid: String,
    pub drafts: Arc<Mutex<Vec<NoteDraft>>>,
    pub log: CallLog,
}

impl MockConnector {
    pub fn new(notebooks: Vec<Notebook>, created_guid: &str, log: CallLog) -> Self {
        Self {
            notebooks,
            created_guid: created_guid.to_string(),
            drafts: Arc::new(Mutex::new(Vec::new())),
            log,
        }
    }

    pub fn drafts(&self) -> Vec<NoteDraft> {
        self.drafts.lock().unwrap().clone()
    }
}

impl NoteStoreConnector for &MockConnector {
    type Store = MockNoteStore;

    fn connect(&self, note_store_url: &str) -> Result<MockNoteStore> {
        self.log
            .lock()
            .unwrap()
            .push(format!("connect({})", note_store_url));
        Ok(MockNoteStore {
            notebooks: self.notebooks.clone(),
            created_guid: self.created_guid.clone(),
            drafts: Arc::clone(&self.drafts),
            log: Arc::clone(&self.log),
        })
    }
}

// Thrift replies served by httpmock.

pub fn reply<F>(method: &str, sequence: i32, write_fields: F) -> Vec<u8>
where
    F: FnOnce(&mut dyn TOutputProtocol) -> thrift::Result<()>,
{
    let mut buffer = Vec::new();
    {
        let mut o = TBinaryOutputProtocol::new(&mut buffer, true);
        o.write_message_begin(&TMessageIdentifier::new(
            method,
            TMessageType::Reply,
            sequence,
        ))
        .unwrap();
        o.write_struct_begin(&TStructIdentifier::new(format!("{}_result", method)))
            .unwrap();
        write_fields(&mut o).unwrap();
        o.write_field_stop().unwrap();
        o.write_struct_end().unwrap();
        o.write_message_end().unwrap();
    }
    buffer
}

pub fn bool_reply(method: &str, sequence: i32, value: bool) -> Vec<u8> {
    reply(method, sequence, |o| {
        o.write_field_begin(&TFieldIdentifier::new("success", TType::Bool, 0))?;
        o.write_bool(value)?;
        o.write_field_end()
    })
}

pub fn string_reply(method: &str, sequence: i32, value: &str) -> Vec<u8> {
    reply(method, sequence, |o| {
        o.write_field_begin(&TFieldIdentifier::new("success", TType::String, 0))?;
        o.write_string(value)?;
        o.write_field_end()
    })
}

/// MD5 digest carried in `Note.contentHash`; not valid UTF-8.
pub const CONTENT_HASH: [u8; 16] = [
    0x8e, 0x2f, 0x01, 0xc4, 0x9a, 0xd3, 0x6b, 0xf0, 0x17, 0xa5, 0xe2, 0x4c, 0xff, 0x00, 0x91, 0x3d,
];

/// `(guid, name, defaultNotebook)` triples, written with the other fields a
/// live service sends.
pub fn notebooks_reply(sequence: i32, notebooks: &[(&str, &str, bool)]) -> Vec<u8> {
    reply("listNotebooks", sequence, |o| {
        o.write_field_begin(&TFieldIdentifier::new("success", TType::List, 0))?;
        o.write_list_begin(&TListIdentifier::new(TType::Struct, notebooks.len() as i32))?;
        for (usn, (guid, name, default_notebook)) in notebooks.iter().enumerate() {
            o.write_struct_begin(&TStructIdentifier::new("Notebook"))?;
            o.write_field_begin(&TFieldIdentifier::new("guid", TType::String, 1))?;
            o.write_string(guid)?;
            o.write_field_end()?;
            o.write_field_begin(&TFieldIdentifier::new("name", TType::String, 2))?;
            o.write_string(name)?;
            o.write_field_end()?;
            o.write_field_begin(&TFieldIdentifier::new("updateSequenceNum", TType::I32, 5))?;
            o.write_i32(usn as i32 + 100)?;
            o.write_field_end()?;
            o.write_field_begin(&TFieldIdentifier::new("defaultNotebook", TType::Bool, 6))?;
            o.write_bool(*default_notebook)?;
            o.write_field_end()?;
            o.write_field_begin(&TFieldIdentifier::new("serviceCreated", TType::I64, 7))?;
            o.write_i64(1_600_000_000_000)?;
            o.write_field_end()?;
            o.write_field_begin(&TFieldIdentifier::new("serviceUpdated", TType::I64, 8))?;
            o.write_i64(1_650_000_000_000)?;
            o.write_field_end()?;
            o.write_field_begin(&TFieldIdentifier::new("sharedNotebookIds", TType::List, 13))?;
            o.write_list_begin(&TListIdentifier::new(TType::I64, 0))?;
            o.write_list_end()?;
            o.write_field_end()?;
            o.write_field_stop()?;
            o.write_struct_end()?;
        }
        o.write_list_end()?;
        o.write_field_end()
    })
}

/// A created `Note` as the service echoes it: binary `contentHash`, sync
/// metadata and a nested `NoteAttributes` with a map-valued `applicationData`.
pub fn note_reply(sequence: i32, guid: &str, title: &str, created_millis: i64) -> Vec<u8> {
    reply("createNote", sequence, |o| {
        o.write_field_begin(&TFieldIdentifier::new("success", TType::Struct, 0))?;
        o.write_struct_begin(&TStructIdentifier::new("Note"))?;
        o.write_field_begin(&TFieldIdentifier::new("guid", TType::String, 1))?;
        o.write_string(guid)?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("title", TType::String, 2))?;
        o.write_string(title)?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("contentHash", TType::String, 4))?;
        o.write_bytes(&CONTENT_HASH)?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("contentLength", TType::I32, 5))?;
        o.write_i32(179)?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("created", TType::I64, 6))?;
        o.write_i64(created_millis)?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("updated", TType::I64, 7))?;
        o.write_i64(created_millis)?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("active", TType::Bool, 9))?;
        o.write_bool(true)?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("updateSequenceNum", TType::I32, 10))?;
        o.write_i32(4242)?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("notebookGuid", TType::String, 11))?;
        o.write_string("nb-1")?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("attributes", TType::Struct, 14))?;
        o.write_struct_begin(&TStructIdentifier::new("NoteAttributes"))?;
        o.write_field_begin(&TFieldIdentifier::new("author", TType::String, 13))?;
        o.write_string("quickstart")?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("applicationData", TType::Struct, 20))?;
        o.write_struct_begin(&TStructIdentifier::new("LazyMap"))?;
        o.write_field_begin(&TFieldIdentifier::new("fullMap", TType::Map, 2))?;
        o.write_map_begin(&TMapIdentifier::new(TType::String, TType::String, 1))?;
        o.write_string("source")?;
        o.write_string("cli")?;
        o.write_map_end()?;
        o.write_field_end()?;
        o.write_field_stop()?;
        o.write_struct_end()?;
        o.write_field_end()?;
        o.write_field_stop()?;
        o.write_struct_end()?;
        o.write_field_end()?;
        o.write_field_stop()?;
        o.write_struct_end()?;
        o.write_field_end()
    })
}

pub fn user_exception_reply(method: &str, sequence: i32, error_code: i32, parameter: &str) -> Vec<u8> {
    reply(method, sequence, |o| {
        o.write_field_begin(&TFieldIdentifier::new("userException", TType::Struct, 1))?;
        o.write_struct_begin(&TStructIdentifier::new("EDAMUserException"))?;
        o.write_field_begin(&TFieldIdentifier::new("errorCode", TType::I32, 1))?;
        o.write_i32(error_code)?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("parameter", TType::String, 2))?;
        o.write_string(parameter)?;
        o.write_field_end()?;
        o.write_field_stop()?;
        o.write_struct_end()?;
        o.write_field_end()
    })
}

pub fn system_exception_reply(method: &str, sequence: i32, error_code: i32, rate_limit: i32) -> Vec<u8> {
    reply(method, sequence, |o| {
        o.write_field_begin(&TFieldIdentifier::new("systemException", TType::Struct, 2))?;
        o.write_struct_begin(&TStructIdentifier::new("EDAMSystemException"))?;
        o.write_field_begin(&TFieldIdentifier::new("errorCode", TType::I32, 1))?;
        o.write_i32(error_code)?;
        o.write_field_end()?;
        o.write_field_begin(&TFieldIdentifier::new("rateLimitDuration", TType::I32, 3))?;
        o.write_i32(rate_limit)?;
        o.write_field_end()?;
        o.write_field_stop()?;
        o.write_struct_end()?;
        o.write_field_end()
    })
}
