use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::{
    front_matter::{DecodeError, FrontMatter},
    markup,
    source::SourceError,
    split::{self, Segments, SplitError},
};

/// A fully ingested blog post. Serializes with the field names clients of the
/// JSON API expect (`Title`, `ContentPreview`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Post {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub path: String,
    /// Keeps the offset the document was written with.
    pub created: DateTime<FixedOffset>,
    /// `null` in JSON when the document has no `Edited` key.
    pub edited: Option<DateTime<FixedOffset>>,
    pub tags: Vec<String>,
    pub content_preview: String,
    pub content: String,
}

/// Why a document was left out of a catalog.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("no content in post")]
    EmptyContent,
    #[error("document has no metadata block")]
    MissingMetadata,
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("unable to read document: {0}")]
    Read(#[from] SourceError),
}

impl From<SplitError> for IngestError {
    fn from(err: SplitError) -> Self {
        match err {
            SplitError::EmptyContent => IngestError::EmptyContent,
        }
    }
}

/// `/posts/{year}/{month}/{day}` with month and day zero-padded, taken from
/// the timestamp's own calendar day rather than the UTC one.
pub fn canonical_path(created: &DateTime<FixedOffset>) -> String {
    format!("/posts/{}", created.format("%Y/%m/%d"))
}

impl Post {
    pub fn from_bytes(data: &[u8]) -> Result<Self, IngestError> {
        Self::assemble(split::split(data)?)
    }

    pub fn assemble(segments: Segments<'_>) -> Result<Self, IngestError> {
        if !segments.has_metadata() {
            return Err(IngestError::MissingMetadata);
        }

        let FrontMatter {
            title,
            subtitle,
            author,
            created,
            edited,
            tags,
        } = FrontMatter::decode(segments.metadata)?;

        Ok(Post {
            title,
            subtitle,
            author,
            path: canonical_path(&created),
            created,
            edited,
            tags,
            content_preview: markup::to_html(segments.preview),
            content: markup::to_html(segments.body),
        })
    }
}
