//! ENML (Evernote Markup Language) note bodies.

pub const ENML_XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const ENML_DOCTYPE: &str =
    r#"<!DOCTYPE en-note SYSTEM "http://xml.evernote.com/pub/enml2.dtd">"#;

/// Markup inserted when no body is configured.
pub const DEFAULT_BODY_MARKUP: &str = "Here is the Evernote logo:<br/>\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnmlDocument {
    body_markup: String,
}

impl EnmlDocument {
    /// Uses `markup` verbatim as the `<en-note>` body. The caller owns its validity.
    pub fn from_markup(markup: impl Into<String>) -> Self {
        Self {
            body_markup: markup.into(),
        }
    }

    /// Escapes plain text and turns line breaks into `<br/>`. Control
    /// characters other than tab are dropped; XML 1.0 cannot carry them.
    pub fn from_text(text: &str) -> Self {
        let body_markup = text
            .lines()
            .map(|line| {
                let printable: String = line
                    .chars()
                    .filter(|c| *c == '\t' || !c.is_control())
                    .collect();
                html_escape::encode_text(&printable).into_owned()
            })
            .collect::<Vec<_>>()
            .join("<br/>\n");
        Self { body_markup }
    }

    pub fn body_markup(&self) -> &str {
        &self.body_markup
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n{}\n<en-note>{}</en-note>\n",
            ENML_XML_DECLARATION, ENML_DOCTYPE, self.body_markup
        )
    }
}

impl Default for EnmlDocument {
    fn default() -> Self {
        Self::from_markup(DEFAULT_BODY_MARKUP)
    }
}
