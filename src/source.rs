//! Document sources
//!
//! Loads raw HTML for the engine from local files, stdin or memory.
//! Network retrieval is not performed here. A URL input is
//! surfaced as a `SourceError`, which the engine turns into a degraded
//! report like any other retrieval failure.

use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

/// Retrieval failure for a document source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("{source_name} is not valid UTF-8")]
    InvalidUtf8 { source_name: String },

    #[error("{source_name} is empty")]
    Empty { source_name: String },

    #[error("remote retrieval is not supported ({url}); save the page and pass the file path")]
    RemoteUnsupported { url: String },
}

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Stdin,
    Url(String),
    Inline { name: String, html: String },
}

impl DocumentSource {
    /// Interpret a CLI argument: `-` is stdin, `http(s)://` is a URL,
    /// anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        let lower = arg.trim().to_ascii_lowercase();
        if arg == "-" {
            DocumentSource::Stdin
        } else if lower.starts_with("http://") || lower.starts_with("https://") {
            DocumentSource::Url(arg.trim().to_string())
        } else {
            DocumentSource::File(PathBuf::from(arg))
        }
    }

    pub fn inline(name: impl Into<String>, html: impl Into<String>) -> Self {
        DocumentSource::Inline {
            name: name.into(),
            html: html.into(),
        }
    }

    /// Display name used in reports and logs
    pub fn label(&self) -> String {
        match self {
            DocumentSource::File(path) => path.display().to_string(),
            DocumentSource::Stdin => "<stdin>".to_string(),
            DocumentSource::Url(url) => url.clone(),
            DocumentSource::Inline { name, .. } => name.clone(),
        }
    }

    /// Read the raw HTML
    pub fn load(&self) -> Result<String, SourceError> {
        let source_name = self.label();
        let bytes = match self {
            DocumentSource::File(path) => std::fs::read(path).map_err(|error| SourceError::Io {
                source_name: source_name.clone(),
                error,
            })?,
            DocumentSource::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|error| SourceError::Io {
                        source_name: source_name.clone(),
                        error,
                    })?;
                buf
            }
            DocumentSource::Url(url) => {
                return Err(SourceError::RemoteUnsupported { url: url.clone() });
            }
            DocumentSource::Inline { html, .. } => html.clone().into_bytes(),
        };

        let text = String::from_utf8(bytes).map_err(|_| SourceError::InvalidUtf8 {
            source_name: source_name.clone(),
        })?;
        if text.trim().is_empty() {
            return Err(SourceError::Empty { source_name });
        }
        Ok(text)
    }
}
