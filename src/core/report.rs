use crate::domain::model::{Note, Notebook, RunReport};
use crate::utils::error::Result;
use std::io::{self, Write};

pub fn write_version_check<W: Write>(out: &mut W, version_ok: bool) -> io::Result<()> {
    writeln!(out, "Is my EDAM API version up to date?  {}", version_ok)?;
    writeln!(out)
}

pub fn write_notebooks<W: Write>(out: &mut W, notebooks: &[Notebook]) -> io::Result<()> {
    writeln!(out, "Found {} notebooks:", notebooks.len())?;
    for notebook in notebooks {
        writeln!(out, "  * {}", notebook.name)?;
    }
    writeln!(out)
}

pub fn write_selection<W: Write>(out: &mut W, selected: Option<&Notebook>) -> io::Result<()> {
    match selected {
        Some(notebook) => writeln!(out, "Creating a new note in notebook: {}", notebook.name)?,
        None => writeln!(
            out,
            "No notebooks found; creating the note in the account's default notebook"
        )?,
    }
    writeln!(out)
}

pub fn write_created<W: Write>(out: &mut W, note: &Note) -> io::Result<()> {
    writeln!(
        out,
        "Successfully created a new note with GUID: {}",
        note.guid.as_deref().unwrap_or("(none)")
    )
}

pub fn write_json<W: Write>(out: &mut W, report: &RunReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
