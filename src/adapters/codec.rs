//! Hand-written argument and result structs for the four EDAM calls.
//!
//! Framing and the binary encoding itself come from the `thrift` crate; this
//! module only knows which field ids carry which values.

use crate::domain::model::{timestamp_from_millis, EdamErrorCode, Note, NoteDraft, Notebook};
use crate::utils::error::{QuickstartError, Result};
use thrift::protocol::{
    TBinaryInputProtocol, TBinaryOutputProtocol, TFieldIdentifier, TInputProtocol,
    TMessageIdentifier, TMessageType, TOutputProtocol, TStructIdentifier, TType,
};

/// Nesting limit when skipping unknown fields.
const MAX_SKIP_DEPTH: usize = 64;

/// Upper bound on capacity reserved from a list header before any item is read.
const MAX_PREALLOCATED_ITEMS: usize = 256;

/// Serializes one strict binary `Call` message.
pub(crate) fn encode_call<F>(method: &str, sequence: i32, write_args: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut dyn TOutputProtocol) -> thrift::Result<()>,
{
    let mut buffer = Vec::new();
    {
        let mut o = TBinaryOutputProtocol::new(&mut buffer, true);
        o.write_message_begin(&TMessageIdentifier::new(
            method,
            TMessageType::Call,
            sequence,
        ))?;
        o.write_struct_begin(&TStructIdentifier::new(format!("{}_args", method)))?;
        write_args(&mut o)?;
        o.write_field_stop()?;
        o.write_struct_end()?;
        o.write_message_end()?;
        o.flush()?;
    }
    Ok(buffer)
}

/// Parses a reply message, checking name and sequence id before handing the
/// result struct to `read_body`.
pub(crate) fn decode_reply<T, F>(bytes: &[u8], method: &str, sequence: i32, read_body: F) -> Result<T>
where
    F: FnOnce(&mut dyn TInputProtocol) -> Result<T>,
{
    let mut i = TBinaryInputProtocol::new(bytes, true);
    let identifier = i.read_message_begin()?;

    if identifier.message_type == TMessageType::Exception {
        let (message, kind) = read_application_exception(&mut i)?;
        i.read_message_end()?;
        return Err(QuickstartError::RemoteApplication {
            method: method.to_string(),
            kind,
            message,
        });
    }
    if identifier.message_type != TMessageType::Reply {
        return Err(unexpected(
            method,
            format!("message type {:?}", identifier.message_type),
        ));
    }
    if identifier.name != method {
        return Err(unexpected(
            method,
            format!("reply names method '{}'", identifier.name),
        ));
    }
    if identifier.sequence_number != sequence {
        return Err(unexpected(
            method,
            format!(
                "sequence id {} (expected {})",
                identifier.sequence_number, sequence
            ),
        ));
    }

    let value = read_body(&mut i)?;
    i.read_message_end()?;
    Ok(value)
}

/// Reads a `<method>_result` struct: field 0 is the return value, fields 1-3
/// are the declared EDAM exceptions.
pub(crate) fn read_result<T, F>(
    i: &mut dyn TInputProtocol,
    method: &str,
    success_type: TType,
    read_success: F,
) -> Result<T>
where
    F: FnOnce(&mut dyn TInputProtocol) -> Result<T>,
{
    let mut read_success = Some(read_success);
    let mut success = None;
    let mut failure = None;

    i.read_struct_begin()?;
    loop {
        let field = i.read_field_begin()?;
        if field.field_type == TType::Stop {
            break;
        }
        match (field.id, field.field_type) {
            (Some(0), field_type) if field_type == success_type => match read_success.take() {
                Some(reader) => success = Some(reader(i)?),
                None => skip_field(i, field_type)?,
            },
            (Some(1), TType::Struct) => failure = Some(read_user_exception(i)?),
            (Some(2), TType::Struct) => failure = Some(read_system_exception(i)?),
            (Some(3), TType::Struct) => failure = Some(read_not_found_exception(i)?),
            (_, field_type) => skip_field(i, field_type)?,
        }
        i.read_field_end()?;
    }
    i.read_struct_end()?;

    if let Some(err) = failure {
        return Err(err);
    }
    success.ok_or_else(|| unexpected(method, "reply carried neither a result nor an exception"))
}

pub(crate) fn write_string_field(
    o: &mut dyn TOutputProtocol,
    name: &str,
    id: i16,
    value: &str,
) -> thrift::Result<()> {
    o.write_field_begin(&TFieldIdentifier::new(name, TType::String, id))?;
    o.write_string(value)?;
    o.write_field_end()
}

pub(crate) fn write_i16_field(
    o: &mut dyn TOutputProtocol,
    name: &str,
    id: i16,
    value: i16,
) -> thrift::Result<()> {
    o.write_field_begin(&TFieldIdentifier::new(name, TType::I16, id))?;
    o.write_i16(value)?;
    o.write_field_end()
}

/// `Types.Note` with only the fields a new note needs.
pub(crate) fn write_note_draft(o: &mut dyn TOutputProtocol, note: &NoteDraft) -> thrift::Result<()> {
    o.write_struct_begin(&TStructIdentifier::new("Note"))?;
    write_string_field(o, "title", 2, &note.title)?;
    write_string_field(o, "content", 3, &note.content)?;
    if let Some(guid) = &note.notebook_guid {
        write_string_field(o, "notebookGuid", 11, guid)?;
    }
    o.write_field_stop()?;
    o.write_struct_end()
}

pub(crate) fn read_notebook_list(i: &mut dyn TInputProtocol) -> Result<Vec<Notebook>> {
    let list = i.read_list_begin()?;
    let size = wire_size(list.size)?;
    let mut notebooks = Vec::with_capacity(size.min(MAX_PREALLOCATED_ITEMS));
    for _ in 0..size {
        notebooks.push(read_notebook(i)?);
    }
    i.read_list_end()?;
    Ok(notebooks)
}

pub(crate) fn read_notebook(i: &mut dyn TInputProtocol) -> Result<Notebook> {
    let mut notebook = Notebook::named("");
    let mut name = None;

    i.read_struct_begin()?;
    loop {
        let field = i.read_field_begin()?;
        if field.field_type == TType::Stop {
            break;
        }
        match (field.id, field.field_type) {
            (Some(1), TType::String) => notebook.guid = Some(i.read_string()?),
            (Some(2), TType::String) => name = Some(i.read_string()?),
            (Some(6), TType::Bool) => notebook.default_notebook = i.read_bool()?,
            (Some(12), TType::String) => notebook.stack = Some(i.read_string()?),
            (_, field_type) => skip_field(i, field_type)?,
        }
        i.read_field_end()?;
    }
    i.read_struct_end()?;

    notebook.name = name.unwrap_or_default();
    Ok(notebook)
}

pub(crate) fn read_note(i: &mut dyn TInputProtocol) -> Result<Note> {
    let mut note = Note::default();

    i.read_struct_begin()?;
    loop {
        let field = i.read_field_begin()?;
        if field.field_type == TType::Stop {
            break;
        }
        match (field.id, field.field_type) {
            (Some(1), TType::String) => note.guid = Some(i.read_string()?),
            (Some(2), TType::String) => note.title = Some(i.read_string()?),
            (Some(5), TType::I32) => note.content_length = Some(i.read_i32()?),
            (Some(6), TType::I64) => note.created = timestamp_from_millis(i.read_i64()?),
            (Some(7), TType::I64) => note.updated = timestamp_from_millis(i.read_i64()?),
            (Some(11), TType::String) => note.notebook_guid = Some(i.read_string()?),
            (_, field_type) => skip_field(i, field_type)?,
        }
        i.read_field_end()?;
    }
    i.read_struct_end()?;

    Ok(note)
}

fn read_user_exception(i: &mut dyn TInputProtocol) -> Result<QuickstartError> {
    let mut error_code = EdamErrorCode::Unknown;
    let mut parameter = None;

    i.read_struct_begin()?;
    loop {
        let field = i.read_field_begin()?;
        if field.field_type == TType::Stop {
            break;
        }
        match (field.id, field.field_type) {
            (Some(1), TType::I32) => error_code = EdamErrorCode::from_i32(i.read_i32()?),
            (Some(2), TType::String) => parameter = Some(i.read_string()?),
            (_, field_type) => skip_field(i, field_type)?,
        }
        i.read_field_end()?;
    }
    i.read_struct_end()?;

    Ok(QuickstartError::UserException {
        error_code,
        parameter,
    })
}

fn read_system_exception(i: &mut dyn TInputProtocol) -> Result<QuickstartError> {
    let mut error_code = EdamErrorCode::Unknown;
    let mut message = None;
    let mut rate_limit_duration = None;

    i.read_struct_begin()?;
    loop {
        let field = i.read_field_begin()?;
        if field.field_type == TType::Stop {
            break;
        }
        match (field.id, field.field_type) {
            (Some(1), TType::I32) => error_code = EdamErrorCode::from_i32(i.read_i32()?),
            (Some(2), TType::String) => message = Some(i.read_string()?),
            (Some(3), TType::I32) => rate_limit_duration = Some(i.read_i32()?),
            (_, field_type) => skip_field(i, field_type)?,
        }
        i.read_field_end()?;
    }
    i.read_struct_end()?;

    Ok(QuickstartError::SystemException {
        error_code,
        message,
        rate_limit_duration,
    })
}

fn read_not_found_exception(i: &mut dyn TInputProtocol) -> Result<QuickstartError> {
    let mut identifier = None;
    let mut key = None;

    i.read_struct_begin()?;
    loop {
        let field = i.read_field_begin()?;
        if field.field_type == TType::Stop {
            break;
        }
        match (field.id, field.field_type) {
            (Some(1), TType::String) => identifier = Some(i.read_string()?),
            (Some(2), TType::String) => key = Some(i.read_string()?),
            (_, field_type) => skip_field(i, field_type)?,
        }
        i.read_field_end()?;
    }
    i.read_struct_end()?;

    Ok(QuickstartError::NotFound { identifier, key })
}

/// `TApplicationException { 1: message, 2: type }`
fn read_application_exception(i: &mut dyn TInputProtocol) -> Result<(String, i32)> {
    let mut message = String::new();
    let mut kind = 0;

    i.read_struct_begin()?;
    loop {
        let field = i.read_field_begin()?;
        if field.field_type == TType::Stop {
            break;
        }
        match (field.id, field.field_type) {
            (Some(1), TType::String) => message = i.read_string()?,
            (Some(2), TType::I32) => kind = i.read_i32()?,
            (_, field_type) => skip_field(i, field_type)?,
        }
        i.read_field_end()?;
    }
    i.read_struct_end()?;

    Ok((message, kind))
}

/// Skips a value of any type. `TType::String` is read as raw bytes because
/// EDAM `binary` fields (e.g. `Note.contentHash`) share that wire type.
fn skip_field(i: &mut dyn TInputProtocol, field_type: TType) -> Result<()> {
    skip_nested(i, field_type, MAX_SKIP_DEPTH)
}

fn skip_nested(i: &mut dyn TInputProtocol, field_type: TType, depth: usize) -> Result<()> {
    if depth == 0 {
        return Err(malformed("values nested too deeply to skip"));
    }

    match field_type {
        TType::Bool => {
            i.read_bool()?;
        }
        TType::I08 => {
            i.read_i8()?;
        }
        TType::I16 => {
            i.read_i16()?;
        }
        TType::I32 => {
            i.read_i32()?;
        }
        TType::I64 => {
            i.read_i64()?;
        }
        TType::Double => {
            i.read_double()?;
        }
        TType::String => {
            i.read_bytes()?;
        }
        TType::Struct => {
            i.read_struct_begin()?;
            loop {
                let field = i.read_field_begin()?;
                if field.field_type == TType::Stop {
                    break;
                }
                skip_nested(i, field.field_type, depth - 1)?;
                i.read_field_end()?;
            }
            i.read_struct_end()?;
        }
        TType::List => {
            let list = i.read_list_begin()?;
            for _ in 0..wire_size(list.size)? {
                skip_nested(i, list.element_type, depth - 1)?;
            }
            i.read_list_end()?;
        }
        TType::Set => {
            let set = i.read_set_begin()?;
            for _ in 0..wire_size(set.size)? {
                skip_nested(i, set.element_type, depth - 1)?;
            }
            i.read_set_end()?;
        }
        TType::Map => {
            let map = i.read_map_begin()?;
            let size = wire_size(map.size)?;
            if size > 0 {
                let (key_type, value_type) = match (map.key_type, map.value_type) {
                    (Some(key_type), Some(value_type)) => (key_type, value_type),
                    _ => return Err(malformed("map header without element types")),
                };
                for _ in 0..size {
                    skip_nested(i, key_type, depth - 1)?;
                    skip_nested(i, value_type, depth - 1)?;
                }
            }
            i.read_map_end()?;
        }
        other => return Err(malformed(format!("cannot skip value of type {}", other))),
    }
    Ok(())
}

/// Container sizes are signed on the wire; a negative one is corrupt.
fn wire_size(size: i32) -> Result<usize> {
    usize::try_from(size).map_err(|_| malformed(format!("negative container size {}", size)))
}

fn malformed(message: impl Into<String>) -> QuickstartError {
    QuickstartError::MalformedReply {
        message: message.into(),
    }
}

fn unexpected(method: &str, message: impl Into<String>) -> QuickstartError {
    QuickstartError::UnexpectedReply {
        method: method.to_string(),
        message: message.into(),
    }
}
