//! Filesystem infrastructure — implements `DocumentSource`.

use std::io::Read;

use anyhow::{Context, Result};

use crate::application::ports::{Document, DocumentFormat, DocumentSource};

/// Location that selects standard input.
pub const STDIN_LOCATION: &str = "-";

/// Reads documents from files, or from stdin for `-`.
///
/// Stdin is always treated as JSON; files are YAML when their extension is
/// `.yaml` or `.yml`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDocumentSource;

impl DocumentSource for FsDocumentSource {
    fn read(&self, location: &str) -> Result<Document> {
        if location == STDIN_LOCATION {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("cannot read standard input")?;
            return Ok(Document {
                origin: STDIN_LOCATION.to_string(),
                format: DocumentFormat::Json,
                text,
            });
        }

        let text =
            std::fs::read_to_string(location).with_context(|| format!("cannot read {location}"))?;
        Ok(Document {
            origin: location.to_string(),
            format: DocumentFormat::from_location(location),
            text,
        })
    }
}
